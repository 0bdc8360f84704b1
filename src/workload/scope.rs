//! Scoped annotations
//!
//! The workload carries annotations destined for several sub-resources in
//! one flat map. Each key is suffixed with the scope of the sub-resource it
//! belongs to; unscoped keys belong to the workload itself.

use crate::common::merge_map;
use crate::workload::types::Member;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which sub-resource an annotation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationScope {
    /// The workload object itself; keys carry no suffix
    Root,
    Service,
    HeadlessService,
    ConfigMap,
    Pod,
}

impl AnnotationScope {
    pub const ALL: [AnnotationScope; 5] = [
        AnnotationScope::Root,
        AnnotationScope::Service,
        AnnotationScope::HeadlessService,
        AnnotationScope::ConfigMap,
        AnnotationScope::Pod,
    ];

    /// Key suffix marking this scope. None of them is a suffix of another.
    pub fn suffix(self) -> &'static str {
        match self {
            AnnotationScope::Root => "",
            AnnotationScope::Service => "__service__",
            AnnotationScope::HeadlessService => "__headless_service__",
            AnnotationScope::ConfigMap => "__configmap__",
            AnnotationScope::Pod => "__pod__",
        }
    }

    /// Suffixes of every non-root scope
    pub fn known_suffixes() -> impl Iterator<Item = &'static str> {
        Self::ALL
            .into_iter()
            .filter(|scope| *scope != AnnotationScope::Root)
            .map(AnnotationScope::suffix)
    }

    /// Scope a key belongs to
    pub fn of_key(key: &str) -> AnnotationScope {
        Self::ALL
            .into_iter()
            .filter(|scope| *scope != AnnotationScope::Root)
            .find(|scope| key.ends_with(scope.suffix()))
            .unwrap_or(AnnotationScope::Root)
    }
}

impl std::fmt::Display for AnnotationScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Suffix every key with `scope`. `None` stays `None`.
pub fn apply_scope(
    scope: AnnotationScope,
    annotations: Option<&HashMap<String, String>>,
) -> Option<HashMap<String, String>> {
    let annotations = annotations?;
    Some(
        annotations
            .iter()
            .map(|(k, v)| (format!("{}{}", k, scope.suffix()), v.clone()))
            .collect(),
    )
}

/// Extract the annotations of `scope`, suffix removed. `None` stays `None`.
///
/// For the root scope this is every key that ends with no known scope
/// suffix, unchanged.
pub fn strip_scope(
    scope: AnnotationScope,
    scoped: Option<&HashMap<String, String>>,
) -> Option<HashMap<String, String>> {
    let scoped = scoped?;

    let annotations = match scope {
        AnnotationScope::Root => scoped
            .iter()
            .filter(|(k, _)| AnnotationScope::of_key(k) == AnnotationScope::Root)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        _ => scoped
            .iter()
            .filter_map(|(k, v)| {
                k.strip_suffix(scope.suffix())
                    .map(|key| (key.to_string(), v.clone()))
            })
            .collect(),
    };
    Some(annotations)
}

impl Member {
    /// This member's annotations belonging to `scope`, suffix removed
    pub fn scoped_annotations(&self, scope: AnnotationScope) -> HashMap<String, String> {
        strip_scope(scope, Some(&self.annotations)).unwrap_or_default()
    }

    /// Write `annotations` under `scope`, overwriting keys already there
    pub fn set_scoped_annotations(&mut self, scope: AnnotationScope, annotations: &HashMap<String, String>) {
        let Some(scoped) = apply_scope(scope, Some(annotations)) else {
            return;
        };
        let mut merged = Some(std::mem::take(&mut self.annotations));
        merge_map(&scoped, &mut merged);
        self.annotations = merged.unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_none_passes_through() {
        for scope in AnnotationScope::ALL {
            assert_eq!(apply_scope(scope, None), None);
            assert_eq!(strip_scope(scope, None), None);
        }
    }

    #[test]
    fn test_apply_scope() {
        let annotations = map(&[("owner", "team-a")]);
        let scoped = apply_scope(AnnotationScope::Service, Some(&annotations)).unwrap();
        assert_eq!(scoped, map(&[("owner__service__", "team-a")]));

        let root = apply_scope(AnnotationScope::Root, Some(&annotations)).unwrap();
        assert_eq!(root, annotations);
    }

    #[test]
    fn test_roundtrip_non_root() {
        let annotations = map(&[("a", "1"), ("b.example.com/c", "2")]);
        for scope in AnnotationScope::ALL.into_iter().skip(1) {
            let scoped = apply_scope(scope, Some(&annotations));
            assert_eq!(strip_scope(scope, scoped.as_ref()), Some(annotations.clone()));
        }
    }

    #[test]
    fn test_strip_root_skips_scoped_keys() {
        let scoped = map(&[
            ("plain", "1"),
            ("svc__service__", "2"),
            ("hl__headless_service__", "3"),
            ("cm__configmap__", "4"),
            ("pod__pod__", "5"),
            ("trailing__", "6"),
        ]);

        let root = strip_scope(AnnotationScope::Root, Some(&scoped)).unwrap();
        assert_eq!(root, map(&[("plain", "1"), ("trailing__", "6")]));
    }

    #[test]
    fn test_strip_scopes_do_not_collide() {
        let scoped = map(&[("x__service__", "svc"), ("x__headless_service__", "headless")]);

        let service = strip_scope(AnnotationScope::Service, Some(&scoped)).unwrap();
        assert_eq!(service, map(&[("x", "svc")]));

        let headless = strip_scope(AnnotationScope::HeadlessService, Some(&scoped)).unwrap();
        assert_eq!(headless, map(&[("x", "headless")]));
    }

    #[test]
    fn test_strip_empty_result_is_some() {
        let scoped = map(&[("plain", "1")]);
        assert_eq!(
            strip_scope(AnnotationScope::Pod, Some(&scoped)),
            Some(HashMap::new())
        );
    }

    #[test]
    fn test_suffixes_are_disjoint() {
        let suffixes: Vec<&str> = AnnotationScope::known_suffixes().collect();
        assert_eq!(suffixes.len(), 4);
        for a in &suffixes {
            for b in &suffixes {
                if a != b {
                    assert!(!a.ends_with(b), "{} ends with {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_of_key() {
        assert_eq!(AnnotationScope::of_key("a__pod__"), AnnotationScope::Pod);
        assert_eq!(AnnotationScope::of_key("a"), AnnotationScope::Root);
    }
}
