//! Pending-case report ingestion.
//!
//! Flow: a decoder ([`csv_grid`]) materializes the export into a grid of
//! [`grid::Cell`]s, [`detect`] picks the sheet layout, and [`interpreter`]
//! runs the stateful scan that turns grid rows into
//! [`chargesheet_model::CaseRecord`]s.

pub mod csv_grid;
pub mod detect;
pub mod grid;
pub mod interpreter;

pub use csv_grid::{read_csv_grid, read_csv_grid_from_str};
pub use detect::{detect_format, SheetFormat};
pub use grid::{Cell, RawRow};
pub use interpreter::{
    parse_generic, parse_report, parse_standard, BucketPolicy, InterpreterOptions, ParseOutcome,
};
