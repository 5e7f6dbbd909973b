use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::member::{MemberId, MemberRecord};

/// Every known member, indexed by id.
/// Records are kept in the order they were registered, so that sorts stay stable on ties.
#[derive(Debug, Default)]
pub struct MemberRegistry {
    members: Vec<MemberRecord>,
    index_by_id: HashMap<MemberId, usize>,
}

impl MemberRegistry {
    /// Register a new member.
    /// Returns the rejected record when a member with the same id is already registered:
    /// the existing one is left untouched.
    pub fn insert(&mut self, member: MemberRecord) -> Result<(), MemberRecord> {
        match self.index_by_id.entry(*member.member_id()) {
            Entry::Occupied(_) => Err(member),
            Entry::Vacant(entry) => {
                entry.insert(self.members.len());
                self.members.push(member);
                Ok(())
            }
        }
    }

    pub fn get_mut(&mut self, member_id: MemberId) -> Option<&mut MemberRecord> {
        self.index_by_id.get(&member_id).map(|&index| &mut self.members[index])
    }

    /// Members in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &MemberRecord> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
impl MemberRegistry {
    pub fn get(&self, member_id: MemberId) -> Option<&MemberRecord> {
        self.index_by_id.get(&member_id).map(|&index| &self.members[index])
    }

    pub fn contains(&self, member_id: MemberId) -> bool {
        self.index_by_id.contains_key(&member_id)
    }
}
