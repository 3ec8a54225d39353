use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{RosterError, RosterResult};

/// Name of a group, unique within the stored group set
///
/// # Invariants
/// - Must contain at least one non-whitespace character
/// - Is stored verbatim (no trimming)
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName(String);

impl GroupName {
    /// Creates a new GroupName value object
    ///
    /// # Returns
    /// * `Ok(GroupName)` - If the name is not blank
    /// * `Err(RosterError::InvalidName)` - If the name is empty or whitespace
    ///
    /// # Example
    /// ```
    /// use teams_roster::domain::group::GroupName;
    ///
    /// let group = GroupName::new("Sunday League").expect("valid name");
    /// assert_eq!(group.as_str(), "Sunday League");
    /// assert!(GroupName::new("   ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> RosterResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RosterError::InvalidName(
                "group name cannot be empty".to_string(),
            ));
        }
        Ok(GroupName(name))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GroupName {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        GroupName::new(value)
    }
}

impl From<GroupName> for String {
    fn from(name: GroupName) -> Self {
        name.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
