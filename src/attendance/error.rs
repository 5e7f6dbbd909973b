use std::path::PathBuf;

use thiserror::Error;

use crate::row::RowError;

#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("The attendance file ({}) could not be found.", .0.display())]
    AttendanceFileNotFound(PathBuf),
    #[error("The attendance file ({}) could not be opened.", .path.display())]
    CantOpenAttendanceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("The attendance file ({file}) is malformed.")]
    MalformedAttendance {
        file: String,
        #[source]
        source: RowError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown attendance state '{0}'.")]
pub struct UnknownStateError(pub String);
