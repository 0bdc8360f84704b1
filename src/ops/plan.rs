//! Operation order for scale-in and rolling restarts
//!
//! Both walk members from least to most senior: scale-in removes the
//! lowest-ranked members first, restarts leave the leader for last.

use crate::workload::priority::RolePriorityTable;
use crate::workload::ranking::{ranked, RankedMember};
use crate::workload::types::Role;

/// Members to remove when scaling in by `count`, in removal order.
///
/// Asking for more than there are returns all of them.
pub fn scale_in_candidates<'a, M: RankedMember>(
    members: &'a [M],
    roles: &[Role],
    count: usize,
) -> Vec<&'a M> {
    let table = RolePriorityTable::from_roles(roles);
    let mut order = ranked(members, &table, false);
    order.truncate(count);

    tracing::debug!(
        requested = count,
        selected = order.len(),
        "Selected members for scale-in"
    );
    order
}

/// Order to restart members in during a rolling update, leader last.
pub fn restart_order<'a, M: RankedMember>(members: &'a [M], roles: &[Role]) -> Vec<&'a M> {
    let table = RolePriorityTable::from_roles(roles);
    ranked(members, &table, false)
}
