//! Shared test utilities for the simple-landing test suite.
//!
//! Provides fixture setup, small file writers, and lookup helpers that work
//! with the loaded [`Content`] records.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let content = scan(tmp.path()).unwrap();
//!
//! let section = find_section(&content, "Cobertura Nacional");
//! assert_eq!(section.order, 2);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{ButtonGroup, Content, Section};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `contents` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

// =========================================================================
// Content lookups — panics with a clear message on miss
// =========================================================================

/// Find a section by title. Panics if not found.
pub fn find_section<'a>(content: &'a Content, title: &str) -> &'a Section {
    content
        .sections
        .iter()
        .find(|s| s.title == title)
        .unwrap_or_else(|| {
            let titles = section_titles(content);
            panic!("section '{title}' not found. Available: {titles:?}")
        })
}

/// Find a button group by directory name. Panics if not found.
pub fn find_group<'a>(content: &'a Content, title: &str) -> &'a ButtonGroup {
    content
        .button_groups
        .iter()
        .find(|g| g.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = content
                .button_groups
                .iter()
                .map(|g| g.title.as_str())
                .collect();
            panic!("button group '{title}' not found. Available: {titles:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All section titles in render order.
pub fn section_titles(content: &Content) -> Vec<&str> {
    content.sections.iter().map(|s| s.title.as_str()).collect()
}

/// All button titles of a group in render order.
pub fn button_titles(group: &ButtonGroup) -> Vec<&str> {
    group.buttons.iter().map(|b| b.title.as_str()).collect()
}
