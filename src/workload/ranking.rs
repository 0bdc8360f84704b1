//! Member ranking
//!
//! Orders members by role priority, then by the ordinal in their name.
//! Ascending order puts the least senior member first, which is the order
//! scale-in removes members in and the order rolling restarts walk through
//! (leader last).

use crate::common::parse_parent_name_and_ordinal;
use crate::workload::priority::{RolePriority, RolePriorityTable};
use crate::workload::types::Member;
use std::cmp::Ordering;

/// Anything that can be ranked: a name with an ordinal suffix and an
/// optional current role.
pub trait RankedMember {
    fn member_name(&self) -> &str;

    /// Role reported by the probe, `None` if not assigned yet
    fn role_name(&self) -> Option<&str>;
}

impl RankedMember for Member {
    fn member_name(&self) -> &str {
        &self.name
    }

    fn role_name(&self) -> Option<&str> {
        self.role()
    }
}

impl<M: RankedMember + ?Sized> RankedMember for &M {
    fn member_name(&self) -> &str {
        (**self).member_name()
    }

    fn role_name(&self) -> Option<&str> {
        (**self).role_name()
    }
}

/// Sort members in place, least senior first (most senior first if `reverse`).
///
/// e.g. unknown → empty → learner → follower → leader, and among equal
/// roles `db-2` before `db-10`.
pub fn sort_members<M: RankedMember>(members: &mut [M], table: &RolePriorityTable, reverse: bool) {
    base_sort(
        members,
        |m| parse_parent_name_and_ordinal(m.member_name()),
        |m| table.lookup(m.role_name()),
        reverse,
    );

    if tracing::enabled!(tracing::Level::TRACE) {
        let order: Vec<&str> = members.iter().map(|m| m.member_name()).collect();
        tracing::trace!(?order, reverse, "Ranked members");
    }
}

/// Sorted copy of `members`, leaving the input untouched.
pub fn ranked<'a, M: RankedMember>(
    members: &'a [M],
    table: &RolePriorityTable,
    reverse: bool,
) -> Vec<&'a M> {
    let mut refs: Vec<&M> = members.iter().collect();
    sort_members(&mut refs, table, reverse);
    refs
}

/// Sort by name ordinal alone, as if every member held the same role.
pub fn sort_by_ordinal<M: RankedMember>(members: &mut [M], reverse: bool) {
    base_sort(
        members,
        |m| parse_parent_name_and_ordinal(m.member_name()),
        |_| RolePriority::UNKNOWN,
        reverse,
    );
}

/// Stable sort of any slice by (priority, ordinal, parent name).
///
/// Names without an ordinal sort before every numbered name. `reverse`
/// flips the full comparison, tie-breakers included.
pub fn base_sort<T, N, P>(items: &mut [T], name_and_ordinal: N, role_priority: P, reverse: bool)
where
    N: Fn(&T) -> (&str, Option<u64>),
    P: Fn(&T) -> RolePriority,
{
    items.sort_by(|a, b| {
        let key_a = RankKey::new(role_priority(a), name_and_ordinal(a));
        let key_b = RankKey::new(role_priority(b), name_and_ordinal(b));
        let ordering = key_a.cmp(&key_b);
        if reverse {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Compare two members the way [`sort_members`] does (ascending).
pub fn compare_members<M: RankedMember>(a: &M, b: &M, table: &RolePriorityTable) -> Ordering {
    RankKey::of(a, table).cmp(&RankKey::of(b, table))
}

/// Sort key of a member. Field order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct RankKey<'a> {
    priority: RolePriority,
    ordinal: Option<u64>,
    parent: &'a str,
}

impl<'a> RankKey<'a> {
    fn new(priority: RolePriority, (parent, ordinal): (&'a str, Option<u64>)) -> Self {
        Self {
            priority,
            ordinal,
            parent,
        }
    }

    fn of<M: RankedMember>(member: &'a M, table: &RolePriorityTable) -> Self {
        Self::new(
            table.lookup(member.role_name()),
            parse_parent_name_and_ordinal(member.member_name()),
        )
    }
}
