use std::path::{Path, PathBuf};

use crate::attendance::ingest::AttendanceIngester;
use crate::config::AttendanceConfig;
use crate::directory::list_attendance_files;
use crate::error::Result;
use crate::member::MemberRegistry;
use crate::member::roster::load_roster_file;
use crate::report::{Report, render_report, write_report};

/// Compile every attendance file of `directory` into the attendance report.
///
/// Nothing is written when any step fails.
pub fn run(config: &AttendanceConfig, directory: &Path) -> Result<Report> {
    let attendance_files = list_attendance_files(
        directory,
        config.attendance_file_pattern().as_ref(),
        config.members_file(),
    )?;
    println!("{}", format_directory_files(&attendance_files));

    let ingester = AttendanceIngester::new(*config.switch_waiting_to_can());
    let registry = build_registry(config.members_file(), &attendance_files, &ingester)?;

    let report = render_report(&registry, *config.sort_method());
    write_report(&report, config.output_file())?;

    Ok(report)
}

/// Load the roster, then add every attendance file to it, in order.
pub fn build_registry(
    members_file: &Path,
    attendance_files: &[PathBuf],
    ingester: &AttendanceIngester,
) -> Result<MemberRegistry> {
    let mut registry = MemberRegistry::default();
    load_roster_file(&mut registry, members_file)?;
    if registry.is_empty() {
        warn!("The member file ({}) doesn't list any member.", members_file.display());
    }

    for attendance_file in attendance_files {
        ingester.ingest_file(&mut registry, attendance_file)?;
    }
    info!(
        "Compiled {} attendance file(s) for {} member(s).",
        attendance_files.len(),
        registry.len()
    );

    Ok(registry)
}

fn format_directory_files(files: &[PathBuf]) -> String {
    let mut listing = String::from("Directory Files:\n");
    for (index, file) in files.iter().enumerate() {
        listing.push_str(&format!("{}.) {}\n", index + 1, file.display()));
    }

    listing
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use crate::attendance::error::AttendanceError;
    use crate::attendance::ingest::AttendanceIngester;
    use crate::config::AttendanceConfig;
    use crate::directory::DirectoryError;
    use crate::error::ApplicationError;
    use crate::member::error::MemberError;
    use crate::pipeline::{build_registry, format_directory_files, run};
    use crate::tools::env_args::with_env_args;
    use crate::tools::test::tests::{attendance, roster, temp_dir, write_file};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    struct Workspace {
        members_file: PathBuf,
        attendance_folder: PathBuf,
        output_file: PathBuf,
    }

    /// Attendance files are given as (file name, content).
    fn workspace(roster_rows: &[&str], attendance_files: &[(&str, String)]) -> Workspace {
        let root = temp_dir();
        let members_file = write_file(&root, "Members.csv", &roster(roster_rows));
        let attendance_folder = root.join("nodewars");
        fs::create_dir(&attendance_folder).unwrap();
        for (filename, content) in attendance_files {
            write_file(&attendance_folder, filename, content);
        }

        Workspace { members_file, attendance_folder, output_file: root.join("GuildAttendance.txt") }
    }

    fn config(workspace: &Workspace, extra_args: &[&str]) -> AttendanceConfig {
        let mut args = vec![
            format!("--members-file={}", workspace.members_file.display()),
            format!("--output={}", workspace.output_file.display()),
        ];
        args.extend(extra_args.iter().map(|arg| arg.to_string()));

        with_env_args(args, AttendanceConfig::from_env_args).unwrap()
    }

    #[test]
    fn should_compile_attendance_report() {
        init();
        let workspace = workspace(
            &[
                "1001,alice#0,House,Arin",
                "1002,bob#1,Hall,Brin",
                "1003,cara#2,Keep,Cael",
            ],
            &[
                (
                    "nodewar-1.csv",
                    attendance(&[
                        "1001,ev1,House,Arin,Can",
                        "1002,ev1,Hall,Brin,WaitingList",
                        "4242,ev1,Gone,Ghost,Can",
                    ]),
                ),
                (
                    "nodewar-2.csv",
                    attendance(&[
                        "1001,ev2,House,Arin,NoShow",
                        "1002,ev2,Hall,Brin,Cant",
                        "1003,ev2,Keep,Cael,Maybe",
                    ]),
                ),
            ],
        );

        let report = run(&config(&workspace, &[]), &workspace.attendance_folder).unwrap();

        let expected = "Nodewar/Siege Attendance Sheet\n\
            \n\
            CAN\tCANT\tWAITING\tUNDECIDED\tTOTAL\t\tCANUTE\t  FAMILY NAME (CHARACTER NAME)\n\
            0\t0\t0\t0\t\t0.0%\t\t#1003\t  Keep (Cael)\n\
            1\t0\t0\t0\t\t50.0%\t\t#1001\t  House (Arin)\n\
            1\t1\t0\t0\t\t50.0%\t\t#1002\t  Hall (Brin)\n\
            \n\
            Successfully parsed '3' node war accounts.\n";
        assert_eq!(expected, report.content());
        assert_eq!(expected, fs::read_to_string(&workspace.output_file).unwrap());
        assert_eq!("Successfully parsed '3' node war accounts.", report.summary());
    }

    #[test]
    fn should_apply_configured_sort_and_waiting_list_handling() {
        init();
        let workspace = workspace(
            &["1001,alice#0,House,Arin", "1002,bob#1,Hall,Brin"],
            &[("nodewar-1.csv", attendance(&["1001,ev1,House,Arin,Can", "1002,ev1,Hall,Brin,WaitingList"]))],
        );
        let config = config(&workspace, &["--sort=character-name-descending", "--switch-waiting-to-can=false"]);

        let report = run(&config, &workspace.attendance_folder).unwrap();

        let lines = report.content().lines().collect::<Vec<_>>();
        assert_eq!("0\t0\t1\t0\t\t0.0%\t\t#1002\t  Hall (Brin)", lines[3]);
        assert_eq!("1\t0\t0\t0\t\t100.0%\t\t#1001\t  House (Arin)", lines[4]);
    }

    #[test]
    fn should_not_write_report_when_roster_is_missing() {
        init();
        let workspace = workspace(&[], &[("nodewar-1.csv", attendance(&["1001,ev1,House,Arin,Can"]))]);
        fs::remove_file(&workspace.members_file).unwrap();

        let error = run(&config(&workspace, &[]), &workspace.attendance_folder).unwrap_err();

        assert!(matches!(
            error,
            ApplicationError::Member(MemberError::RosterFileNotFound(_))
        ));
        assert!(!workspace.output_file.exists());
    }

    #[test]
    fn should_not_write_report_when_member_id_is_malformed() {
        init();
        let workspace = workspace(
            &["1001,alice#0,House,Arin"],
            &[
                ("nodewar-1.csv", attendance(&["1001,ev1,House,Arin,Can"])),
                ("nodewar-2.csv", attendance(&["Arin,ev2,House,Arin,Can"])),
            ],
        );

        let error = run(&config(&workspace, &[]), &workspace.attendance_folder).unwrap_err();

        assert!(matches!(
            error,
            ApplicationError::Attendance(AttendanceError::MalformedAttendance { .. })
        ));
        assert!(!workspace.output_file.exists());
    }

    #[test]
    fn should_not_write_report_when_directory_is_empty() {
        init();
        let workspace = workspace(&["1001,alice#0,House,Arin"], &[]);

        let error = run(&config(&workspace, &[]), &workspace.attendance_folder).unwrap_err();

        assert!(matches!(
            error,
            ApplicationError::Directory(DirectoryError::EmptyDirectory(_))
        ));
        assert!(!workspace.output_file.exists());
    }

    #[test]
    fn should_fail_on_missing_attendance_file() {
        init();
        let workspace = workspace(&["1001,alice#0,House,Arin"], &[]);
        let missing = workspace.attendance_folder.join("nodewar-1.csv");

        let error = build_registry(&workspace.members_file, &[missing], &AttendanceIngester::default()).unwrap_err();

        assert!(matches!(
            error,
            ApplicationError::Attendance(AttendanceError::AttendanceFileNotFound(_))
        ));
    }

    #[test]
    fn should_format_directory_files() {
        let files = vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")];

        assert_eq!(
            "Directory Files:\n1.) a.csv\n2.) b.csv\n",
            format_directory_files(&files)
        );
    }
}
