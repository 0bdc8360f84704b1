//! Readiness over JSON snapshots, as the reconciliation loop would see them

use roleset::workload::{is_ready, NotReady, Snapshot};
use std::io::Write;
use tempfile::NamedTempFile;

fn role_aware_snapshot(leader: bool, ready_without_primary: bool) -> String {
    let replica_role = if leader {
        r#"{"name": "primary", "isLeader": true, "canVote": true}"#
    } else {
        r#"{"name": "secondary", "canVote": true, "accessMode": "Readonly"}"#
    };
    format!(
        r#"{{
            "workload": {{
                "name": "pg",
                "generation": 7,
                "spec": {{
                    "replicas": 3,
                    "minReadySeconds": 0,
                    "roles": [
                        {{"name": "primary", "isLeader": true, "canVote": true}},
                        {{"name": "secondary", "canVote": true, "accessMode": "Readonly"}}
                    ],
                    "roleProbe": {{"periodSeconds": 5}}
                }},
                "status": {{
                    "observedGeneration": 7,
                    "replicas": 3,
                    "readyReplicas": 3,
                    "updatedReplicas": 3,
                    "availableReplicas": 3,
                    "readyWithoutPrimary": {ready_without_primary},
                    "membersStatus": [
                        {{"podName": "pg-0", "replicaRole": {replica_role}}},
                        {{"podName": "pg-1", "replicaRole": {{"name": "secondary", "canVote": true}}}},
                        {{"podName": "pg-2", "replicaRole": {{"name": "secondary", "canVote": true}}}}
                    ]
                }}
            }},
            "members": [
                {{"name": "pg-0", "labels": {{"roleset.io/role": "primary"}}}},
                {{"name": "pg-1", "labels": {{"roleset.io/role": "secondary"}}}},
                {{"name": "pg-2", "labels": {{"roleset.io/role": "secondary"}}}}
            ]
        }}"#
    )
}

fn load(json: &str) -> Snapshot {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    Snapshot::from_file(file.path()).unwrap()
}

#[test]
fn test_role_aware_with_leader_is_ready() {
    let snapshot = load(&role_aware_snapshot(true, false));
    assert!(is_ready(Some(&snapshot.workload)));
}

#[test]
fn test_role_aware_without_leader_is_not_ready() {
    let snapshot = load(&role_aware_snapshot(false, false));
    assert_eq!(snapshot.workload.readiness(), Err(NotReady::NoLeader));
    assert!(!snapshot.workload.is_ready());
}

#[test]
fn test_ready_without_primary() {
    let snapshot = load(&role_aware_snapshot(false, true));
    assert!(snapshot.workload.is_ready());
}

#[test]
fn test_roleless_workload() {
    let snapshot = load(
        r#"{
            "workload": {
                "name": "cache",
                "generation": 1,
                "spec": {"replicas": 2},
                "status": {
                    "observedGeneration": 1,
                    "replicas": 2,
                    "readyReplicas": 2,
                    "updatedReplicas": 2
                }
            }
        }"#,
    );
    assert!(snapshot.members.is_empty());
    assert!(snapshot.workload.is_ready());
}

#[test]
fn test_probe_without_declared_roles() {
    let snapshot = load(
        r#"{
            "workload": {
                "name": "queue",
                "generation": 3,
                "spec": {"replicas": 2, "roles": [], "roleProbe": {"periodSeconds": 1}},
                "status": {
                    "observedGeneration": 3,
                    "replicas": 2,
                    "readyReplicas": 2,
                    "updatedReplicas": 2,
                    "membersStatus": []
                }
            }
        }"#,
    );
    assert!(snapshot.workload.spec.role_probe.is_some());
    assert_eq!(snapshot.workload.readiness(), Ok(()));
}

#[test]
fn test_unset_replicas_never_ready() {
    let snapshot = load(
        r#"{
            "workload": {
                "name": "cache",
                "spec": {},
                "status": {}
            }
        }"#,
    );
    assert_eq!(snapshot.workload.readiness(), Err(NotReady::ReplicasUnset));
}

#[test]
fn test_rolling_update_not_ready() {
    let mut snapshot = load(&role_aware_snapshot(true, false));
    snapshot.workload.status.updated_replicas = 2;
    assert!(!snapshot.workload.is_ready());

    snapshot.workload.status.updated_replicas = 3;
    snapshot.workload.generation += 1;
    assert!(!snapshot.workload.is_ready());
}

#[test]
fn test_not_ready_messages() {
    let err = NotReady::ScaleMismatch {
        declared: 3,
        replicas: 3,
        ready: 2,
        updated: 3,
    };
    assert_eq!(
        err.to_string(),
        "scale mismatch: want 3, have 3 replicas, 2 ready, 3 updated"
    );
}
