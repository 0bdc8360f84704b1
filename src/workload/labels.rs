//! Label vocabulary shared by everything managing a workload

use crate::workload::types::Workload;
use std::collections::HashMap;

/// Label carrying a member's current role, set by the role probe
pub const ROLE_LABEL_KEY: &str = "roleset.io/role";

/// Label naming the controller kind that manages a member
pub const MANAGED_BY_LABEL_KEY: &str = "roleset.io/managed-by";

/// Label naming the workload a member belongs to
pub const INSTANCE_LABEL_KEY: &str = "roleset.io/instance";

/// Kind of the managed workload object
pub const WORKLOAD_KIND: &str = "InstanceSet";

/// Labels every member of workload `name` carries
pub fn match_labels(name: &str) -> HashMap<String, String> {
    HashMap::from([
        (MANAGED_BY_LABEL_KEY.to_string(), WORKLOAD_KIND.to_string()),
        (INSTANCE_LABEL_KEY.to_string(), name.to_string()),
    ])
}

/// Selector for a service in front of the workload.
///
/// A regular service only routes to the leader, so it selects on the first
/// declared leader role. Headless services select every member. The
/// workload's own selector labels are always included and take precedence.
pub fn service_selector(workload: &Workload, headless: bool) -> HashMap<String, String> {
    let mut selector = HashMap::new();

    if !headless {
        if let Some(leader) = workload
            .spec
            .roles
            .iter()
            .find(|role| role.is_leader && !role.name.is_empty())
        {
            selector.insert(ROLE_LABEL_KEY.to_string(), leader.name.clone());
        }
    }

    for (k, v) in &workload.spec.selector {
        selector.insert(k.clone(), v.clone());
    }
    selector
}
