mod attendance;
mod config;
mod directory;
mod error;
mod member;
mod pipeline;
mod report;
mod row;
mod tools;

#[macro_use]
extern crate log;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use env_logger::Env;

use crate::config::{AttendanceConfig, prompt_directory};
use crate::error::Result;
use crate::report::Report;
use crate::tools::error_chain;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("Nodewar Attendance Manager (v{})", env!("CARGO_PKG_VERSION"));
    println!();

    match compile_attendance() {
        Ok(report) => {
            println!();
            println!("{}", report.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

fn compile_attendance() -> Result<Report> {
    let config = AttendanceConfig::from_env_args()?;
    let directory = match config.directory() {
        Some(directory) => directory.clone(),
        None => ask_for_directory()?,
    };

    pipeline::run(&config, &directory)
}

fn ask_for_directory() -> Result<PathBuf> {
    let directory = prompt_directory(&mut io::stdin().lock(), &mut io::stdout())?;
    Ok(directory)
}
