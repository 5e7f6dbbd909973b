use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use derive_getters::Getters;

use crate::attendance::error::AttendanceError::{
    AttendanceFileNotFound, CantOpenAttendanceFile, MalformedAttendance,
};
use crate::attendance::{AttendanceState, Result};
use crate::member::{AttendanceCounter, MemberRegistry};
use crate::row::{DecodedRow, decode_rows};

/// What happened to the rows of an attendance file.
#[derive(Debug, Default, PartialEq, Eq, Getters)]
pub struct IngestSummary {
    applied: usize,
    unknown_members: usize,
    unknown_states: usize,
    malformed: usize,
}

/// Adds the content of attendance files to the members' counters.
#[derive(Debug, Clone, Copy, Getters)]
pub struct AttendanceIngester {
    /// Members who sign up shortly before or during the node war are moved
    /// to the waiting list by Canute. When set, they are counted as `Can`.
    switch_waiting_to_can: bool,
}

impl Default for AttendanceIngester {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AttendanceIngester {
    pub fn new(switch_waiting_to_can: bool) -> Self {
        Self { switch_waiting_to_can }
    }

    pub fn counter_for(&self, state: AttendanceState) -> AttendanceCounter {
        match state {
            AttendanceState::Can => AttendanceCounter::Can,
            AttendanceState::Cant => AttendanceCounter::Cannot,
            AttendanceState::Undecided => AttendanceCounter::Undecided,
            AttendanceState::WaitingList if self.switch_waiting_to_can => AttendanceCounter::Can,
            AttendanceState::WaitingList => AttendanceCounter::Waiting,
            AttendanceState::NoShow => AttendanceCounter::NoShow,
        }
    }

    /// Add the attendance file content to the registry.
    ///
    /// The file is expected to look like
    /// `MemberId,NodewarId,FamilyName,CharacterName,Attendance[,...]`, with a header line.
    pub fn ingest_file(&self, registry: &mut MemberRegistry, path: &Path) -> Result<IngestSummary> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AttendanceFileNotFound(path.to_path_buf()),
            _ => CantOpenAttendanceFile {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let summary = self.ingest(registry, file, &path.display().to_string())?;
        debug!("Ingested {path:?}: {summary:?}");

        Ok(summary)
    }

    /// Add every attendance row read from `reader` to the registry.
    /// `source_name` only appears in diagnostics.
    ///
    /// Each row increments at most one counter. Rows about members absent from the registry,
    /// or with an unknown state, are reported and skipped.
    /// A member id which is not a number aborts the ingestion.
    pub fn ingest<R: Read>(
        &self,
        registry: &mut MemberRegistry,
        reader: R,
        source_name: &str,
    ) -> Result<IngestSummary> {
        let mut summary = IngestSummary::default();
        let malformed = |source| MalformedAttendance {
            file: source_name.to_owned(),
            source,
        };

        for row in decode_rows(reader) {
            let row = match row.map_err(malformed)? {
                DecodedRow::Data(row) => row,
                DecodedRow::Comment { line } | DecodedRow::MissingMemberId { line } => {
                    debug!("Skipping line {line} of {source_name}.");
                    continue;
                }
            };

            let member_id = row.member_id().map_err(malformed)?;
            let [_, _, family_name, character_name, state] = match row.leading_fields::<5>() {
                Ok(fields) => fields,
                Err(e) => {
                    warn!("Skipping attendance of member '{member_id}' in {source_name}: {e}");
                    summary.malformed += 1;
                    continue;
                }
            };

            let Some(member) = registry.get_mut(member_id) else {
                warn!(
                    "Removing character '{character_name}' with family name '{family_name}' from final results (no longer in guild, found in {source_name})."
                );
                summary.unknown_members += 1;
                continue;
            };

            match state.parse::<AttendanceState>() {
                Ok(state) => {
                    member.increment(self.counter_for(state));
                    summary.applied += 1;
                }
                Err(e) => {
                    warn!(
                        "{e} for character name '{character_name}' ({source_name}, line {}).",
                        row.line()
                    );
                    summary.unknown_states += 1;
                }
            }
        }

        Ok(summary)
    }
}
