use std::io::{BufRead, Write};
use std::path::PathBuf;

use derive_getters::Getters;
use regex::Regex;
use thiserror::Error;

use crate::member::DEFAULT_MEMBERS_FILE;
use crate::report::{DEFAULT_REPORT_FILE, SortMethod};
use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value};

type Result<T, E = ConfigError> = std::result::Result<T, E>;

const DIRECTORY_ARG: [&str; 2] = ["--directory", "-d"];
const MEMBERS_FILE_ARG: [&str; 2] = ["--members-file", "-m"];
const OUTPUT_ARG: [&str; 2] = ["--output", "-o"];
const SORT_ARG: [&str; 2] = ["--sort", "-s"];
const SWITCH_WAITING_TO_CAN_ARG: &str = "--switch-waiting-to-can";
const ATTENDANCE_FILE_PATTERN_ARG: &str = "--attendance-file-pattern";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value `{value}` for `{name}`.")]
    InvalidArgValue { name: String, value: String },
    #[error("The attendance file pattern `{pattern}` is not a valid regex.")]
    InvalidAttendanceFilePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Can't read the directory from the console.")]
    CantReadDirectory(#[from] std::io::Error),
}

/// Settings of a run, read from `--name=value` args.
#[derive(Debug, Getters)]
pub struct AttendanceConfig {
    /// Folder holding attendance files. When absent, it is asked for on the console.
    directory: Option<PathBuf>,
    members_file: PathBuf,
    output_file: PathBuf,
    sort_method: SortMethod,
    switch_waiting_to_can: bool,
    /// When set, only files whose name matches are read as attendance files.
    attendance_file_pattern: Option<Regex>,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            directory: None,
            members_file: PathBuf::from(DEFAULT_MEMBERS_FILE),
            output_file: PathBuf::from(DEFAULT_REPORT_FILE),
            sort_method: SortMethod::default(),
            switch_waiting_to_can: true,
            attendance_file_pattern: None,
        }
    }
}

impl AttendanceConfig {
    pub fn from_env_args() -> Result<Self> {
        let default = Self::default();
        let invalid_arg_value = |name, value| ConfigError::InvalidArgValue { name, value };

        let attendance_file_pattern = retrieve_arg_value(ATTENDANCE_FILE_PATTERN_ARG)
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| ConfigError::InvalidAttendanceFilePattern { pattern, source })
            })
            .transpose()?;

        let config = Self {
            directory: retrieve_arg_value(DIRECTORY_ARG.to_vec()).map(PathBuf::from),
            members_file: retrieve_arg_value(MEMBERS_FILE_ARG.to_vec()).map(PathBuf::from).unwrap_or(default.members_file),
            output_file: retrieve_arg_value(OUTPUT_ARG.to_vec()).map(PathBuf::from).unwrap_or(default.output_file),
            sort_method: retrieve_parsed_arg_value(SORT_ARG.to_vec(), invalid_arg_value)?.unwrap_or(default.sort_method),
            switch_waiting_to_can: retrieve_parsed_arg_value(SWITCH_WAITING_TO_CAN_ARG, invalid_arg_value)?
                .unwrap_or(default.switch_waiting_to_can),
            attendance_file_pattern,
        };
        debug!("Configuration: {config:?}");

        Ok(config)
    }
}

/// Ask for the attendance folder on the console.
pub fn prompt_directory<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "Choose Directory: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    writeln!(output)?;

    Ok(PathBuf::from(answer.trim()))
}
