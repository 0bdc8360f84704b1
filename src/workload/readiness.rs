//! Workload readiness
//!
//! A workload is ready when:
//! 1. bootstrap has finished (all init replicas ready)
//! 2. the latest spec has been observed
//! 3. every declared replica exists, is ready and is updated
//!    (and available, when min-ready-seconds is set)
//! 4. for role-aware workloads, every member reported a role and a leader
//!    is present, unless the workload opted into running without one
//!
//! The evaluation is a snapshot predicate. Callers poll it; nothing here
//! remembers previous verdicts.

use crate::workload::types::Workload;
use thiserror::Error;

/// First readiness check a workload failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotReady {
    #[error("workload not found")]
    Missing,

    #[error("initialization incomplete: {ready} of {total} init replicas ready")]
    Initializing { ready: i32, total: i32 },

    #[error("spec not yet observed: generation {generation}, observed {observed}")]
    StaleGeneration { generation: i64, observed: i64 },

    #[error("replica count not declared")]
    ReplicasUnset,

    #[error("scale mismatch: want {declared}, have {replicas} replicas, {ready} ready, {updated} updated")]
    ScaleMismatch {
        declared: i32,
        replicas: i32,
        ready: i32,
        updated: i32,
    },

    #[error("availability pending: {available} of {declared} replicas available")]
    Unavailable { declared: i32, available: i32 },

    #[error("role probe incomplete: {reported} of {declared} members reported a role")]
    RolesPending { declared: i32, reported: usize },

    #[error("no leader among members")]
    NoLeader,
}

/// Walk the readiness checks in order, stopping at the first failure.
pub fn evaluate_readiness(workload: &Workload) -> Result<(), NotReady> {
    let spec = &workload.spec;
    let status = &workload.status;

    if status.ready_init_replicas != status.init_replicas {
        return Err(NotReady::Initializing {
            ready: status.ready_init_replicas,
            total: status.init_replicas,
        });
    }

    if status.observed_generation != workload.generation {
        return Err(NotReady::StaleGeneration {
            generation: workload.generation,
            observed: status.observed_generation,
        });
    }

    let Some(declared) = spec.replicas else {
        return Err(NotReady::ReplicasUnset);
    };

    if status.replicas != declared
        || status.ready_replicas != declared
        || status.updated_replicas != declared
    {
        return Err(NotReady::ScaleMismatch {
            declared,
            replicas: status.replicas,
            ready: status.ready_replicas,
            updated: status.updated_replicas,
        });
    }

    // Availability only means something once a min-ready window is set
    if spec.min_ready_seconds > 0 && status.available_replicas != declared {
        return Err(NotReady::Unavailable {
            declared,
            available: status.available_replicas,
        });
    }

    if spec.roles.is_empty() || spec.role_probe.is_none() {
        return Ok(());
    }

    let reported = status.members_status.len();
    if i32::try_from(reported).ok() != Some(declared) {
        return Err(NotReady::RolesPending { declared, reported });
    }

    if status.ready_without_primary {
        return Ok(());
    }

    let has_leader = status
        .members_status
        .iter()
        .any(|member| member.replica_role.as_ref().is_some_and(|role| role.is_leader));
    if has_leader {
        Ok(())
    } else {
        Err(NotReady::NoLeader)
    }
}

/// Boolean readiness verdict. A missing workload is not ready.
pub fn is_ready(workload: Option<&Workload>) -> bool {
    let result = match workload {
        Some(workload) => evaluate_readiness(workload),
        None => Err(NotReady::Missing),
    };

    match result {
        Ok(()) => true,
        Err(reason) => {
            tracing::debug!(
                workload = workload.map(|w| w.name.as_str()).unwrap_or_default(),
                %reason,
                "Workload not ready"
            );
            false
        }
    }
}

impl Workload {
    pub fn is_ready(&self) -> bool {
        is_ready(Some(self))
    }

    pub fn readiness(&self) -> Result<(), NotReady> {
        evaluate_readiness(self)
    }
}
