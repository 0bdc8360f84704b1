//! # roleset
//!
//! Ordering and readiness decisions for controllers that manage a
//! replicated, role-aware workload (primary/replica/learner instances):
//! - Role priority table: declared roles mapped to disjoint priority bands
//! - Member ranking: safe order for scale-in and rolling restarts
//! - Readiness: one verdict from bootstrap, generation, scale and role status
//! - Scoped annotations and last-writer-wins merge helpers
//!
//! ## Priority bands
//!
//! ```text
//!   leader               1 << 5   most senior, acted on last
//!   follower(ReadWrite)  1 << 4
//!   follower(Readonly)   1 << 3
//!   follower(None)       1 << 2
//!   learner              1 << 1
//!   empty (no role yet)  1 << 0
//!   unknown role         0        acted on first
//! ```
//!
//! ## Usage
//!
//! ```
//! use roleset::workload::{sort_members, AccessMode, Member, Role, RolePriorityTable};
//!
//! let roles = vec![
//!     Role::leader("primary"),
//!     Role::follower("secondary", AccessMode::Readonly),
//! ];
//! let table = RolePriorityTable::from_roles(&roles);
//!
//! let mut members = vec![
//!     Member::with_role("db-0", "primary"),
//!     Member::with_role("db-1", "secondary"),
//!     Member::new("db-2"),
//! ];
//! sort_members(&mut members, &table, false);
//!
//! let order: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
//! assert_eq!(order, ["db-2", "db-1", "db-0"]);
//! ```
//!
//! ### CLI
//! ```bash
//! roleset rank --file snapshot.json --reverse
//! roleset ready --file snapshot.json
//! roleset plan scale-in --file snapshot.json --count 2
//! ```

pub mod common;
pub mod ops;
pub mod workload;

// Re-export commonly used types
pub use common::{Config, Error, Result};
pub use workload::{is_ready, sort_members, RolePriority, RolePriorityTable, Workload};

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build info
pub const BUILD_INFO: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CARGO_PKG_NAME"), ")");
