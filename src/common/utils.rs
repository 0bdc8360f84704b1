//! Utility functions for roleset

/// Separator between a member's parent name and its ordinal
pub const ORDINAL_SEPARATOR: char = '-';

/// Split a member name such as `"mysql-3"` into `("mysql", Some(3))`.
///
/// The split happens at the last separator, and only when everything after
/// it is a decimal integer. Anything else returns the whole name with no
/// ordinal.
pub fn parse_parent_name_and_ordinal(name: &str) -> (&str, Option<u64>) {
    let Some((parent, suffix)) = name.rsplit_once(ORDINAL_SEPARATOR) else {
        return (name, None);
    };
    if parent.is_empty() || suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return (name, None);
    }
    match suffix.parse::<u64>() {
        Ok(ordinal) => (parent, Some(ordinal)),
        Err(_) => (name, None),
    }
}

/// Name of the config map holding environment shared by a workload's members
pub fn env_config_map_name(workload_name: &str) -> String {
    format!("{}-its-env", workload_name)
}
