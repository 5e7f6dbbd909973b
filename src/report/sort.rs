use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::member::{MemberRecord, MemberRegistry};
use crate::report::error::ReportError;

/// How members are ordered in the report.
///
/// [SortMethod::TotalPercentThenCan] is the default: members attending the least come first,
/// and among them, those who attended the fewest node wars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMethod {
    TotalPercent,
    #[default]
    TotalPercentThenCan,
    TotalPercentThenCant,
    CharacterNameAscending,
    CharacterNameDescending,
    FamilyNameAscending,
    FamilyNameDescending,
    Undecided,
    MemberId,
}

impl SortMethod {
    pub const ALL: [SortMethod; 9] = [
        SortMethod::TotalPercent,
        SortMethod::TotalPercentThenCan,
        SortMethod::TotalPercentThenCant,
        SortMethod::CharacterNameAscending,
        SortMethod::CharacterNameDescending,
        SortMethod::FamilyNameAscending,
        SortMethod::FamilyNameDescending,
        SortMethod::Undecided,
        SortMethod::MemberId,
    ];

    /// Name of the method, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SortMethod::TotalPercent => "total-percent",
            SortMethod::TotalPercentThenCan => "total-percent-then-can",
            SortMethod::TotalPercentThenCant => "total-percent-then-cant",
            SortMethod::CharacterNameAscending => "character-name-ascending",
            SortMethod::CharacterNameDescending => "character-name-descending",
            SortMethod::FamilyNameAscending => "family-name-ascending",
            SortMethod::FamilyNameDescending => "family-name-descending",
            SortMethod::Undecided => "undecided",
            SortMethod::MemberId => "member-id",
        }
    }

    pub fn compare(&self, a: &MemberRecord, b: &MemberRecord) -> Ordering {
        match self {
            SortMethod::TotalPercent => compare_participation(a, b),
            SortMethod::TotalPercentThenCan => {
                compare_participation(a, b).then_with(|| a.can().cmp(b.can()))
            }
            SortMethod::TotalPercentThenCant => {
                compare_participation(a, b).then_with(|| a.cannot().cmp(b.cannot()))
            }
            SortMethod::CharacterNameAscending => a.character_name().cmp(b.character_name()),
            SortMethod::CharacterNameDescending => b.character_name().cmp(a.character_name()),
            SortMethod::FamilyNameAscending => a.family_name().cmp(b.family_name()),
            SortMethod::FamilyNameDescending => b.family_name().cmp(a.family_name()),
            SortMethod::Undecided => a.undecided().cmp(b.undecided()),
            SortMethod::MemberId => a.member_id().cmp(b.member_id()),
        }
    }

    /// Members of the registry, ordered by this method.
    /// The sort is stable: members equal for this method keep their registration order.
    pub fn sort<'a>(&self, registry: &'a MemberRegistry) -> Vec<&'a MemberRecord> {
        let mut members = registry.iter().collect::<Vec<_>>();
        members.sort_by(|a, b| self.compare(a, b));

        members
    }
}

/// Compare participation ratios exactly, without going through floats.
/// A member without any recorded event has a ratio of 0.
fn compare_participation(a: &MemberRecord, b: &MemberRecord) -> Ordering {
    let (a_can, a_total) = a.participation();
    let (b_can, b_total) = b.participation();

    (u128::from(a_can) * u128::from(b_total)).cmp(&(u128::from(b_can) * u128::from(a_total)))
}

impl Display for SortMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortMethod {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| ReportError::UnknownSortMethod(s.to_owned()))
    }
}
