//! Grid cell values as produced by an external decoder.
//!
//! The interpreter never touches file bytes; it consumes rows of cells that a
//! spreadsheet or CSV decoder has already materialized. Cells carry no
//! inherent meaning, each is read positionally and textually per row.

/// One cell of a report grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

/// One line of the source grid.
pub type RawRow = Vec<Cell>;

static EMPTY_CELL: Cell = Cell::Empty;

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Textual view of the cell: trimmed text, a number rendered without a
    /// spurious fraction, or the empty string.
    pub fn display_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.trim().to_string(),
            Self::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 1.0e15 {
                    format!("{}", *value as i64)
                } else {
                    format!("{value}")
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Serial number within a bucket: a non-negative integer or absent.
    pub fn as_serial(&self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Text(text) => text.trim().parse().ok(),
            Self::Number(value) => {
                if value.fract() == 0.0 && *value >= 0.0 && *value <= f64::from(u32::MAX) {
                    Some(*value as u32)
                } else {
                    None
                }
            }
        }
    }
}

/// Cell at `index`, with missing positions reading as empty.
pub fn cell_at(row: &[Cell], index: usize) -> &Cell {
    row.get(index).unwrap_or(&EMPTY_CELL)
}

/// Trimmed text of the cell at `index` (empty string when absent).
pub fn text_at(row: &[Cell], index: usize) -> String {
    cell_at(row, index).display_text()
}

pub fn row_is_empty(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_renders_integers_plainly() {
        assert_eq!(Cell::Number(123.0).display_text(), "123");
        assert_eq!(Cell::Number(123.5).display_text(), "123.5");
        assert_eq!(Cell::text("  x  ").display_text(), "x");
        assert_eq!(Cell::Empty.display_text(), "");
    }

    #[test]
    fn serial_parsing() {
        assert_eq!(Cell::text("4").as_serial(), Some(4));
        assert_eq!(Cell::Number(4.0).as_serial(), Some(4));
        assert_eq!(Cell::Number(4.5).as_serial(), None);
        assert_eq!(Cell::text("4a").as_serial(), None);
        assert_eq!(Cell::Empty.as_serial(), None);
    }

    #[test]
    fn out_of_range_positions_read_empty() {
        let row = vec![Cell::text("a")];
        assert_eq!(text_at(&row, 5), "");
        assert!(cell_at(&row, 5).is_empty());
    }

    #[test]
    fn empty_row_detection() {
        assert!(row_is_empty(&[Cell::Empty, Cell::text("   ")]));
        assert!(!row_is_empty(&[Cell::Empty, Cell::Number(0.0)]));
    }
}
