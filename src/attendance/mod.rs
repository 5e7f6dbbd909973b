use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::attendance::error::UnknownStateError;

pub mod error;
pub mod ingest;

type Result<T, E = error::AttendanceError> = std::result::Result<T, E>;

/// The answer recorded by Canute for a member and a node war.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceState {
    /// The member took part in the node war.
    Can,
    /// The member didn't take part in the node war.
    Cant,
    /// The member never answered.
    Undecided,
    /// The member signed up late and was moved to the waiting list by Canute.
    WaitingList,
    /// The member signed up but didn't show up.
    NoShow,
}

impl AttendanceState {
    const ALL: [AttendanceState; 5] = [
        AttendanceState::Can,
        AttendanceState::Cant,
        AttendanceState::Undecided,
        AttendanceState::WaitingList,
        AttendanceState::NoShow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceState::Can => "Can",
            AttendanceState::Cant => "Cant",
            AttendanceState::Undecided => "Undecided",
            AttendanceState::WaitingList => "WaitingList",
            AttendanceState::NoShow => "NoShow",
        }
    }
}

impl Display for AttendanceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceState {
    type Err = UnknownStateError;

    /// States are matched exactly: `can` or `Can ` are unknown.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|state| state.as_str() == s).ok_or_else(|| UnknownStateError(s.to_owned()))
    }
}
