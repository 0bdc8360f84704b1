//! Role-aware workload decisions
//!
//! - Role priority table (declared roles → disjoint priority bands)
//! - Member ranking (priority, then name ordinal)
//! - Readiness (bootstrap, generation, scale, leader presence)
//! - Scoped annotations and the shared label vocabulary

pub mod labels;
pub mod priority;
pub mod ranking;
pub mod readiness;
pub mod scope;
pub mod snapshot;
pub mod types;

pub use labels::{match_labels, service_selector, ROLE_LABEL_KEY};
pub use priority::{compose_role_map, compose_role_priority_map, RolePriority, RolePriorityTable};
pub use ranking::{base_sort, ranked, sort_by_ordinal, sort_members, RankedMember};
pub use readiness::{evaluate_readiness, is_ready, NotReady};
pub use scope::{apply_scope, strip_scope, AnnotationScope};
pub use snapshot::Snapshot;
pub use types::{AccessMode, Member, MemberStatus, Role, RoleProbe, Workload, WorkloadSpec, WorkloadStatus};
