//! Everything related to the attendance report: member ordering, formatting and output.

pub mod error;
pub mod format;
pub mod sort;

pub use format::{Report, render_report, write_report};
pub use sort::SortMethod;

type Result<T, E = error::ReportError> = std::result::Result<T, E>;

/// Default name of the report file, written in the working directory.
pub const DEFAULT_REPORT_FILE: &str = "GuildAttendance.txt";
