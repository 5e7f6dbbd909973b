use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

use crate::tools::log_error_and_return;

type Result<T, E = DirectoryError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("The directory ({}) was not found.", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("The directory ({}) can't be browsed.", .0.display())]
    CantBrowseDirectory(PathBuf),
    #[error("The directory ({}) does not contain any attendance files.", .0.display())]
    EmptyDirectory(PathBuf),
}

/// List the attendance files of `directory`, sorted by path.
///
/// Only regular files are listed. When a `pattern` is given, files whose name doesn't match are left out.
/// The roster file is never listed, even when it lives in `directory`.
pub fn list_attendance_files(directory: &Path, pattern: Option<&Regex>, roster_file: &Path) -> Result<Vec<PathBuf>> {
    match fs::metadata(directory) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => return Err(DirectoryError::DirectoryNotFound(directory.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(DirectoryError::DirectoryNotFound(directory.to_path_buf())),
        Err(e) => {
            error!("{e:#?}");
            return Err(DirectoryError::CantBrowseDirectory(directory.to_path_buf()));
        }
    }

    let roster_file = fs::canonicalize(roster_file).ok();
    let entries = fs::read_dir(directory).map_err(log_error_and_return(
        DirectoryError::CantBrowseDirectory(directory.to_path_buf()),
    ))?;

    let mut files = vec![];
    for entry in entries {
        let path = entry
            .map_err(log_error_and_return(DirectoryError::CantBrowseDirectory(directory.to_path_buf())))?
            .path();
        if !path.is_file() {
            continue;
        }

        let filename = path.file_name().unwrap_or_default().to_string_lossy();
        if pattern.is_some_and(|pattern| !pattern.is_match(&filename)) {
            debug!("Ignoring {path:?}: its name doesn't match the attendance file pattern.");
            continue;
        }

        if roster_file.is_some() && fs::canonicalize(&path).ok() == roster_file {
            debug!("Ignoring {path:?}: it is the member file.");
            continue;
        }

        files.push(path);
    }

    if files.is_empty() {
        return Err(DirectoryError::EmptyDirectory(directory.to_path_buf()));
    }
    files.sort();

    Ok(files)
}
