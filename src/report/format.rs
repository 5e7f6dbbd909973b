use std::fs;
use std::path::Path;

use derive_getters::Getters;

use crate::member::{MemberRecord, MemberRegistry};
use crate::report::Result;
use crate::report::SortMethod;
use crate::report::error::ReportError::CantWriteReport;
use crate::tools::log_message_and_return;

const TITLE: &str = "Nodewar/Siege Attendance Sheet";
const COLUMNS: &str =
    "CAN\tCANT\tWAITING\tUNDECIDED\tTOTAL\t\tCANUTE\t  FAMILY NAME (CHARACTER NAME)";

/// A rendered attendance report.
#[derive(Debug, PartialEq, Eq, Getters)]
pub struct Report {
    content: String,
    member_count: usize,
}

impl Report {
    /// The line closing the report, also displayed on the console.
    pub fn summary(&self) -> String {
        summary_line(self.member_count)
    }
}

/// Render every member of the registry, ordered by `sort_method`.
pub fn render_report(registry: &MemberRegistry, sort_method: SortMethod) -> Report {
    let members = sort_method.sort(registry);

    let mut content = String::new();
    content.push_str(TITLE);
    content.push_str("\n\n");
    content.push_str(COLUMNS);
    content.push('\n');
    for member in &members {
        content.push_str(&format_member_line(member));
        content.push('\n');
    }
    content.push('\n');
    content.push_str(&summary_line(members.len()));
    content.push('\n');

    Report { content, member_count: members.len() }
}

pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    fs::write(path, report.content()).map_err(log_message_and_return(
        &format!("Can't write attendance report to {}.", path.display()),
        CantWriteReport(path.to_path_buf()),
    ))?;
    info!("Attendance report written to {}.", path.display());

    Ok(())
}

fn format_member_line(member: &MemberRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}\t\t{}\t\t#{}\t  {} ({})",
        member.can(),
        member.cannot(),
        member.waiting(),
        member.undecided(),
        format_percentage(member.participation()),
        member.member_id(),
        member.family_name(),
        member.character_name(),
    )
}

/// Format `can / total` as a percentage with one decimal, e.g. `42.3%`.
/// Halves are rounded up: 1 / 16 gives `6.3%`.
fn format_percentage((can, total): (u64, u64)) -> String {
    let tenths = (u128::from(can) * 2000 + u128::from(total)) / (2 * u128::from(total));
    format!("{}.{}%", tenths / 10, tenths % 10)
}

fn summary_line(member_count: usize) -> String {
    format!("Successfully parsed '{member_count}' node war accounts.")
}
