use derive_getters::Getters;

use crate::member::MemberId;

/// The counter touched by a single attendance row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceCounter {
    Can,
    Cannot,
    Undecided,
    Waiting,
    NoShow,
}

/// A member of the guild and the number of times each attendance state was recorded for them.
/// Names are set once from the roster; counters only ever go up.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MemberRecord {
    member_id: MemberId,
    discord_handle: String,
    family_name: String,
    character_name: String,
    can: u32,
    cannot: u32,
    undecided: u32,
    waiting: u32,
    no_show: u32,
}

impl MemberRecord {
    pub fn new(member_id: MemberId, discord_handle: String, family_name: String, character_name: String) -> Self {
        Self {
            member_id,
            discord_handle,
            family_name,
            character_name,
            can: 0,
            cannot: 0,
            undecided: 0,
            waiting: 0,
            no_show: 0,
        }
    }

    pub fn increment(&mut self, counter: AttendanceCounter) {
        let value = match counter {
            AttendanceCounter::Can => &mut self.can,
            AttendanceCounter::Cannot => &mut self.cannot,
            AttendanceCounter::Undecided => &mut self.undecided,
            AttendanceCounter::Waiting => &mut self.waiting,
            AttendanceCounter::NoShow => &mut self.no_show,
        };
        *value = value.saturating_add(1);
    }

    /// Number of events recorded for this member, whatever the state.
    pub fn total(&self) -> u64 {
        [self.can, self.cannot, self.undecided, self.waiting, self.no_show].into_iter().map(u64::from).sum()
    }

    /// Share of recorded events the member could attend, as `(can, total)`.
    /// A member with no recorded event gets `(0, 1)`, a ratio of 0.
    pub fn participation(&self) -> (u64, u64) {
        match self.total() {
            0 => (0, 1),
            total => (u64::from(self.can), total),
        }
    }
}
