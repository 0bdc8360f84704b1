//! Role priority table
//!
//! Maps each declared role onto one of six disjoint priority bands. Bands
//! are single bits, so a new band can later be slotted between two existing
//! ones without renumbering anything.

use crate::workload::types::{AccessMode, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Operation-ordering rank of a role. Higher is more senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolePriority(u32);

impl RolePriority {
    pub const LEADER: RolePriority = RolePriority(1 << 5);
    pub const FOLLOWER_READ_WRITE: RolePriority = RolePriority(1 << 4);
    pub const FOLLOWER_READONLY: RolePriority = RolePriority(1 << 3);
    pub const FOLLOWER_NONE: RolePriority = RolePriority(1 << 2);
    pub const LEARNER: RolePriority = RolePriority(1 << 1);
    /// Member without an assigned role yet
    pub const EMPTY: RolePriority = RolePriority(1 << 0);
    /// Role name the workload never declared
    pub const UNKNOWN: RolePriority = RolePriority(0);

    /// Band a declared role falls into
    pub fn of(role: &Role) -> Self {
        if role.is_leader {
            return Self::LEADER;
        }
        if !role.can_vote {
            return Self::LEARNER;
        }
        match role.access_mode {
            AccessMode::None => Self::FOLLOWER_NONE,
            AccessMode::Readonly => Self::FOLLOWER_READONLY,
            AccessMode::ReadWrite => Self::FOLLOWER_READ_WRITE,
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn band_name(self) -> &'static str {
        match self {
            Self::LEADER => "leader",
            Self::FOLLOWER_READ_WRITE => "follower(ReadWrite)",
            Self::FOLLOWER_READONLY => "follower(Readonly)",
            Self::FOLLOWER_NONE => "follower(None)",
            Self::LEARNER => "learner",
            Self::EMPTY => "empty",
            _ => "unknown",
        }
    }
}

impl std::fmt::Display for RolePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.band_name(), self.0)
    }
}

/// Lowercased role name → priority. Always holds the empty role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolePriorityTable {
    priorities: HashMap<String, RolePriority>,
}

impl RolePriorityTable {
    /// Build the table for a declared role list.
    ///
    /// A name declared twice keeps the priority of its last declaration.
    pub fn from_roles(roles: &[Role]) -> Self {
        let mut priorities = HashMap::with_capacity(roles.len() + 1);
        priorities.insert(String::new(), RolePriority::EMPTY);

        for role in roles {
            let name = role.name.to_lowercase();
            let priority = RolePriority::of(role);
            if let Some(previous) = priorities.insert(name, priority) {
                if previous != priority {
                    tracing::debug!(
                        role = %role.name,
                        %previous,
                        %priority,
                        "Role declared more than once, keeping last declaration"
                    );
                }
            }
        }

        Self { priorities }
    }

    /// Priority of a role name, case-insensitively.
    /// Undeclared names resolve to [`RolePriority::UNKNOWN`].
    pub fn get(&self, role: &str) -> RolePriority {
        let found = match self.priorities.get(role) {
            Some(priority) => Some(*priority),
            None => self.priorities.get(&role.to_lowercase()).copied(),
        };
        found.unwrap_or(RolePriority::UNKNOWN)
    }

    /// Priority of a member's optional role; `None` is the empty role
    pub fn lookup(&self, role: Option<&str>) -> RolePriority {
        self.get(role.unwrap_or_default())
    }

    pub fn contains(&self, role: &str) -> bool {
        self.priorities.contains_key(&role.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    /// Entries from most to least senior, names ascending within a band
    pub fn entries(&self) -> Vec<(&str, RolePriority)> {
        let mut entries: Vec<(&str, RolePriority)> = self
            .priorities
            .iter()
            .map(|(name, priority)| (name.as_str(), *priority))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Build the priority table for `roles`.
pub fn compose_role_priority_map(roles: &[Role]) -> RolePriorityTable {
    RolePriorityTable::from_roles(roles)
}

/// Index declared roles by lowercased name. Last duplicate wins.
pub fn compose_role_map(roles: &[Role]) -> HashMap<String, Role> {
    roles
        .iter()
        .map(|role| (role.name.to_lowercase(), role.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_roles() -> Vec<Role> {
        vec![
            Role::learner("Learner"),
            Role::follower("none-follower", AccessMode::None),
            Role::follower("ro-follower", AccessMode::Readonly),
            Role::leader("Leader"),
            Role::follower("rw-follower", AccessMode::ReadWrite),
        ]
    }

    #[test]
    fn test_bands_strictly_ordered() {
        let table = RolePriorityTable::from_roles(&mixed_roles());

        let ordered = [
            table.get("leader"),
            table.get("rw-follower"),
            table.get("ro-follower"),
            table.get("none-follower"),
            table.get("learner"),
            table.get(""),
            table.get("observer"),
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] > pair[1], "{} should outrank {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_order_independent_of_declaration_order() {
        let mut roles = mixed_roles();
        let forward = RolePriorityTable::from_roles(&roles);
        roles.reverse();
        let backward = RolePriorityTable::from_roles(&roles);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_bands_are_disjoint_bits() {
        let bands = [
            RolePriority::LEADER,
            RolePriority::FOLLOWER_READ_WRITE,
            RolePriority::FOLLOWER_READONLY,
            RolePriority::FOLLOWER_NONE,
            RolePriority::LEARNER,
            RolePriority::EMPTY,
        ];
        let combined = bands.iter().fold(0u32, |acc, band| {
            assert_eq!(acc & band.value(), 0);
            acc | band.value()
        });
        assert_eq!(combined.count_ones(), 6);
    }

    #[test]
    fn test_empty_role_always_present() {
        let table = RolePriorityTable::from_roles(&[]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(""), RolePriority::EMPTY);
        assert_eq!(table.lookup(None), RolePriority::EMPTY);
    }

    #[test]
    fn test_unknown_distinct_from_empty() {
        let table = RolePriorityTable::from_roles(&mixed_roles());
        assert_eq!(table.get("candidate"), RolePriority::UNKNOWN);
        assert!(!table.contains("candidate"));
        assert!(table.get("candidate") < table.get(""));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let table = RolePriorityTable::from_roles(&mixed_roles());
        assert_eq!(table.get("LEADER"), RolePriority::LEADER);
        assert_eq!(table.get("Leader"), RolePriority::LEADER);
        assert!(table.contains("RW-Follower"));
    }

    #[test]
    fn test_duplicate_last_wins() {
        let roles = vec![Role::leader("primary"), Role::learner("PRIMARY")];
        let table = RolePriorityTable::from_roles(&roles);
        assert_eq!(table.get("primary"), RolePriority::LEARNER);
        assert_eq!(table.len(), 2);

        let map = compose_role_map(&roles);
        assert!(!map["primary"].is_leader);
    }

    #[test]
    fn test_entries_sorted_by_priority() {
        let table = compose_role_priority_map(&mixed_roles());
        let names: Vec<&str> = table.entries().into_iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["leader", "rw-follower", "ro-follower", "none-follower", "learner", ""]
        );
    }
}
