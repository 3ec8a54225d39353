//! Storage key layout.
//!
//! - `groups` holds the JSON array of group names.
//! - `groups.<name>.players` holds the JSON array of one group's players.

use crate::domain::group::GroupName;

/// Key of the group-name list
pub const GROUP_COLLECTION: &str = "groups";

/// Key of the player list belonging to `group`
pub fn player_collection(group: &GroupName) -> String {
    format!("{}.{}.players", GROUP_COLLECTION, group.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_key_is_derived_from_group_name() {
        let group = GroupName::new("Tuesday").unwrap();
        assert_eq!(player_collection(&group), "groups.Tuesday.players");
    }

    #[test]
    fn player_key_differs_per_group() {
        let a = GroupName::new("A").unwrap();
        let b = GroupName::new("B").unwrap();
        assert_ne!(player_collection(&a), player_collection(&b));
    }
}
