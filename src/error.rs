use crate::attendance::error::AttendanceError;
use crate::config::ConfigError;
use crate::directory::DirectoryError;
use crate::member::error::MemberError;
use crate::report::error::ReportError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The configuration is invalid.")]
    Config(#[from] ConfigError),
    #[error("Can't find attendance files.")]
    Directory(#[from] DirectoryError),
    #[error("Error while reading the member file.")]
    Member(#[from] MemberError),
    #[error("Error while reading an attendance file.")]
    Attendance(#[from] AttendanceError),
    #[error("Error while writing the attendance report.")]
    Report(#[from] ReportError),
}
