use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use derive_getters::Getters;

use crate::member::Result;
use crate::member::error::MemberError::{CantOpenRosterFile, MalformedRoster, RosterFileNotFound};
use crate::member::{MemberRecord, MemberRegistry};
use crate::row::{DecodedRow, decode_rows};

/// What happened to the rows of a roster file.
#[derive(Debug, Default, PartialEq, Eq, Getters)]
pub struct RosterSummary {
    loaded: usize,
    duplicates: usize,
    malformed: usize,
}

/// Register every member listed in the roster file.
///
/// The file is expected to look like
/// `MemberId,DiscordName,FamilyName,CharacterName[,...]`, with a header line.
pub fn load_roster_file(registry: &mut MemberRegistry, path: &Path) -> Result<RosterSummary> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RosterFileNotFound(path.to_path_buf()),
        _ => CantOpenRosterFile {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let summary = load_roster(registry, file, &path.display().to_string())?;
    info!(
        "Loaded {} member(s) from {} ({} duplicate(s), {} malformed row(s)).",
        summary.loaded,
        path.display(),
        summary.duplicates,
        summary.malformed
    );

    Ok(summary)
}

/// Register every member read from `reader`.
/// `source_name` only appears in diagnostics.
///
/// A member whose id is already registered is reported and skipped.
/// A member id which is not a number aborts the load.
pub fn load_roster<R: Read>(registry: &mut MemberRegistry, reader: R, source_name: &str) -> Result<RosterSummary> {
    let mut summary = RosterSummary::default();
    let malformed = |source| MalformedRoster {
        file: source_name.to_owned(),
        source,
    };

    for row in decode_rows(reader) {
        let row = match row.map_err(malformed)? {
            DecodedRow::Data(row) => row,
            DecodedRow::Comment { line } | DecodedRow::MissingMemberId { line } => {
                debug!("Skipping line {line} of the member file ({source_name}).");
                continue;
            }
        };

        let member_id = row.member_id().map_err(malformed)?;
        let [_, discord_handle, family_name, character_name] = match row.leading_fields::<4>() {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Skipping member '{member_id}' in the member file ({source_name}): {e}");
                summary.malformed += 1;
                continue;
            }
        };

        let member = MemberRecord::new(
            member_id,
            discord_handle.to_owned(),
            family_name.to_owned(),
            character_name.to_owned(),
        );
        match registry.insert(member) {
            Ok(()) => summary.loaded += 1,
            Err(_) => {
                warn!(
                    "Duplicate account found with the member index '{member_id}' in the member file ({source_name}, line {}).",
                    row.line()
                );
                summary.duplicates += 1;
            }
        }
    }

    Ok(summary)
}
