pub mod error;
pub mod record;
pub mod registry;
pub mod roster;

pub use record::{AttendanceCounter, MemberRecord};
pub use registry::MemberRegistry;

/// The id Canute assigns to a member. It is the join key between the roster and attendance files.
pub type MemberId = i32;

type Result<T, E = error::MemberError> = std::result::Result<T, E>;

/// Default name of the roster file, read from the working directory.
pub const DEFAULT_MEMBERS_FILE: &str = "Members.csv";
