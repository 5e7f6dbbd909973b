use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Unknown sort method `{0}`.")]
    UnknownSortMethod(String),
    #[error("The attendance report ({}) could not be written.", .0.display())]
    CantWriteReport(PathBuf),
}
