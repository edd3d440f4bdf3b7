//! Lint: sprite resources are freed only by dropping their lease.
//!
//! `ResourcePool::release` has no reference count. A direct call from outside
//! `src/overlay/resource.rs` can free a tag that a live `TagLease` still owns,
//! and the lease's later drop then frees it a second time.
//!
//! This test scans every `.rs` file under `src/` and flags `.release(` calls
//! anywhere but the resource module.

use std::fs;
use std::path::Path;

const OWNER: &str = "resource.rs";

/// Scan source for `.release(` calls outside comments.
fn find_release_calls(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.starts_with("//") {
            continue;
        }

        let code = match trimmed.find("//") {
            Some(idx) => &trimmed[..idx],
            None => trimmed,
        };
        if code.contains(".release(") {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

#[test]
fn only_leases_release_resources() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut all_violations = Vec::new();

    visit_source_files(&src_dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found direct ResourcePool::release() calls outside the resource module.\n\
             Hold a TagLease and drop it instead.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

fn visit_source_files(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_source_files(&path, violations);
            continue;
        }
        let is_rust = path.extension().map(|e| e == "rs").unwrap_or(false);
        let is_owner = path.file_name().map(|n| n == OWNER).unwrap_or(false);
        if !is_rust || is_owner {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        let display_path = path.display().to_string();
        for (line_num, line) in find_release_calls(&source) {
            violations.push((display_path.clone(), line_num, line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_direct_release() {
        let source = "self.pool.borrow_mut().release(TAG_INFO_ICON);";
        assert_eq!(find_release_calls(source).len(), 1);
    }

    #[test]
    fn ignores_comments() {
        let source = "// pool.release(tag) is reserved for leases";
        assert!(find_release_calls(source).is_empty());
        let trailing = "drop(lease); // instead of pool.release(tag)";
        assert!(find_release_calls(trailing).is_empty());
    }

    #[test]
    fn ignores_similar_names() {
        let source = "let released = pool.releases;";
        assert!(find_release_calls(source).is_empty());
    }
}
