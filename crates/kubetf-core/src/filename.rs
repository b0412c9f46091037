//! Output filename allocation for per-resource mode
//!
//! Filenames derive from the resource kind only. Several resources of the same
//! kind in one run get `_1`, `_2`, ... suffixes in file-creation order; the
//! allocator tracks what it has handed out so the sequence is collision-free
//! without consulting the filesystem.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Sanitize a resource kind into a safe filename stem.
///
/// Lowercases, replaces anything outside `[a-zA-Z0-9_-]` with `_`, collapses
/// runs of `_`, and trims `_` from both ends. Idempotent.
pub fn sanitize_kind(kind: &str) -> String {
    let mut out = String::with_capacity(kind.len());
    let mut last_was_underscore = false;

    for c in kind.chars() {
        let mapped = if c.is_ascii_alphanumeric() || c == '-' {
            c.to_ascii_lowercase()
        } else {
            '_'
        };

        if mapped == '_' {
            if !last_was_underscore {
                out.push('_');
            }
            last_was_underscore = true;
        } else {
            out.push(mapped);
            last_was_underscore = false;
        }
    }

    out.trim_matches('_').to_string()
}

/// Hands out unique `.tf` paths under an output directory, one per resource.
#[derive(Debug)]
pub struct FilenameAllocator {
    output_dir: PathBuf,
    used: HashSet<PathBuf>,
}

impl FilenameAllocator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            used: HashSet::new(),
        }
    }

    /// The directory this allocator writes into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Allocate the next free path for a resource of the given kind.
    ///
    /// First resource of a kind gets `<kind>.tf`; later ones get
    /// `<kind>_1.tf`, `<kind>_2.tf`, ... in allocation order.
    pub fn allocate(&mut self, kind: &str) -> PathBuf {
        let stem = sanitize_kind(kind);

        let mut candidate = self.output_dir.join(format!("{stem}.tf"));
        let mut suffix = 0usize;
        while self.used.contains(&candidate) {
            suffix += 1;
            candidate = self.output_dir.join(format!("{stem}_{suffix}.tf"));
        }

        self.used.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_lowercases() {
        assert_eq!(sanitize_kind("Deployment"), "deployment");
        assert_eq!(sanitize_kind("ConfigMap"), "configmap");
    }

    #[test]
    fn test_sanitize_replaces_invalid_chars() {
        assert_eq!(sanitize_kind("My Kind!"), "my_kind");
        assert_eq!(sanitize_kind("a.b.c"), "a_b_c");
    }

    #[test]
    fn test_sanitize_collapses_and_trims_underscores() {
        assert_eq!(sanitize_kind("__Weird__Kind__"), "weird_kind");
        assert_eq!(sanitize_kind("a...b"), "a_b");
        assert_eq!(sanitize_kind("..."), "");
    }

    #[test]
    fn test_sanitize_keeps_hyphens_and_digits() {
        assert_eq!(sanitize_kind("kind-2"), "kind-2");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for input in ["Deployment", "My Kind!", "__x__y__", "a.b-c_d", "..."] {
            let once = sanitize_kind(input);
            assert_eq!(sanitize_kind(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_allocator_disambiguates_same_kind() {
        let mut alloc = FilenameAllocator::new("out");

        assert_eq!(alloc.allocate("Deployment"), PathBuf::from("out/deployment.tf"));
        assert_eq!(
            alloc.allocate("Deployment"),
            PathBuf::from("out/deployment_1.tf")
        );
        assert_eq!(
            alloc.allocate("Deployment"),
            PathBuf::from("out/deployment_2.tf")
        );
    }

    #[test]
    fn test_allocator_distinct_kinds_do_not_collide() {
        let mut alloc = FilenameAllocator::new("out");

        assert_eq!(alloc.allocate("Service"), PathBuf::from("out/service.tf"));
        assert_eq!(alloc.allocate("ConfigMap"), PathBuf::from("out/configmap.tf"));
        assert_eq!(alloc.allocate("Service"), PathBuf::from("out/service_1.tf"));
    }

    #[test]
    fn test_allocator_collides_on_sanitized_stem() {
        // Different raw kinds that sanitize to the same stem still disambiguate
        let mut alloc = FilenameAllocator::new("out");

        assert_eq!(alloc.allocate("My.Kind"), PathBuf::from("out/my_kind.tf"));
        assert_eq!(alloc.allocate("My Kind"), PathBuf::from("out/my_kind_1.tf"));
    }
}
