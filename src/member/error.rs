use std::path::PathBuf;

use thiserror::Error;

use crate::row::RowError;

#[derive(Debug, Error)]
pub enum MemberError {
    #[error("The member file ({}) could not be found.", .0.display())]
    RosterFileNotFound(PathBuf),
    #[error("The member file ({}) could not be opened.", .path.display())]
    CantOpenRosterFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("The member file ({file}) is malformed.")]
    MalformedRoster {
        file: String,
        #[source]
        source: RowError,
    },
}
