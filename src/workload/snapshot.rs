//! Point-in-time capture of a workload and its members, as JSON

use crate::common::Result;
use crate::workload::priority::RolePriorityTable;
use crate::workload::types::{Member, Workload};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub workload: Workload,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Snapshot {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        tracing::debug!(
            workload = %snapshot.workload.name,
            members = snapshot.members.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn priority_table(&self) -> RolePriorityTable {
        RolePriorityTable::from_roles(&self.workload.spec.roles)
    }
}
