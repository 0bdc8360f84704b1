//! Workload model consumed by the ranking and readiness decisions
//!
//! Mirrors the declared spec and observed status of a role-aware instance
//! set. Everything here is plain data: the reconciliation loop fills it in,
//! this crate only reads it.

use crate::workload::labels::ROLE_LABEL_KEY;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How clients may use a member holding a role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessMode {
    None,
    Readonly,
    #[default]
    ReadWrite,
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessMode::None => write!(f, "None"),
            AccessMode::Readonly => write!(f, "Readonly"),
            AccessMode::ReadWrite => write!(f, "ReadWrite"),
        }
    }
}

/// A replication role declared by the workload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role name, compared case-insensitively
    pub name: String,
    #[serde(default)]
    pub is_leader: bool,
    #[serde(default)]
    pub can_vote: bool,
    #[serde(default)]
    pub access_mode: AccessMode,
}

impl Role {
    pub fn leader(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_leader: true,
            can_vote: true,
            access_mode: AccessMode::ReadWrite,
        }
    }

    pub fn follower(name: impl Into<String>, access_mode: AccessMode) -> Self {
        Self {
            name: name.into(),
            is_leader: false,
            can_vote: true,
            access_mode,
        }
    }

    pub fn learner(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_leader: false,
            can_vote: false,
            access_mode: AccessMode::Readonly,
        }
    }
}

/// Settings of the external role probe. Its presence is what matters here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleProbe {
    #[serde(default)]
    pub initial_delay_seconds: i32,
    #[serde(default = "default_period_seconds")]
    pub period_seconds: i32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: i32,
    #[serde(default = "default_failure_threshold")]
    pub failure_threshold: i32,
}

fn default_period_seconds() -> i32 {
    2
}
fn default_timeout_seconds() -> i32 {
    1
}
fn default_failure_threshold() -> i32 {
    3
}

impl Default for RoleProbe {
    fn default() -> Self {
        Self {
            initial_delay_seconds: 0,
            period_seconds: default_period_seconds(),
            timeout_seconds: default_timeout_seconds(),
            failure_threshold: default_failure_threshold(),
        }
    }
}

/// Desired state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadSpec {
    /// Declared replica count; `None` means not yet defaulted
    #[serde(default)]
    pub replicas: Option<i32>,

    /// Seconds a member must be ready before it counts as available
    #[serde(default)]
    pub min_ready_seconds: i32,

    #[serde(default)]
    pub roles: Vec<Role>,

    #[serde(default)]
    pub role_probe: Option<RoleProbe>,

    /// Labels selecting the workload's members
    #[serde(default)]
    pub selector: HashMap<String, String>,
}

/// Role reported for one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatus {
    pub pod_name: String,
    #[serde(default)]
    pub replica_role: Option<Role>,
}

/// Observed state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkloadStatus {
    pub observed_generation: i64,
    pub replicas: i32,
    pub ready_replicas: i32,
    pub updated_replicas: i32,
    pub available_replicas: i32,
    pub init_replicas: i32,
    pub ready_init_replicas: i32,
    pub members_status: Vec<MemberStatus>,
    pub ready_without_primary: bool,
}

/// A role-aware workload: spec, status and the generation tying them together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workload {
    pub name: String,
    #[serde(default)]
    pub generation: i64,
    #[serde(default)]
    pub spec: WorkloadSpec,
    #[serde(default)]
    pub status: WorkloadStatus,
}

/// One member instance, named `<parent>-<ordinal>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_role(name: impl Into<String>, role: impl Into<String>) -> Self {
        let mut member = Self::new(name);
        member.labels.insert(ROLE_LABEL_KEY.to_string(), role.into());
        member
    }

    /// Current role as reported by the probe, if any
    pub fn role(&self) -> Option<&str> {
        self.labels.get(ROLE_LABEL_KEY).map(String::as_str)
    }
}
