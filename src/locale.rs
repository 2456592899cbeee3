//! Injected text-resource provider and language-list resolution.
//!
//! The host platform supplies named configuration text (a language list)
//! through the [`TextProvider`] capability; nothing here holds global or
//! static state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Named text resources supplied by the host platform.
pub trait TextProvider {
    /// Returns the text content of a named resource.
    fn get_text(&self, name: &str) -> Result<String>;
}

/// Reads named resources as files under a root directory.
pub struct FileProvider {
    root: PathBuf,
}

impl FileProvider {
    /// Creates a provider rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextProvider for FileProvider {
    fn get_text(&self, name: &str) -> Result<String> {
        let path = self.root.join(name);
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read text resource: {}", path.display()))
    }
}

/// Built-in language list used when the platform provides none.
///
/// One `name-code-tag` entry per line.
pub const DEFAULT_LANGUAGE_LIST: &str = "English-en-english\nPersian-fa-persian\nArabic-ar-arabic\n";

/// Resolves a display-language code from a language list.
///
/// Each line is a `name-code-tag` entry; the first entry whose tag
/// matches case-insensitively wins and its code is returned. Malformed
/// lines are skipped.
pub fn resolve_language(list: &str, tag: &str) -> Option<String> {
    for entry in list.lines() {
        let parts: Vec<&str> = entry.split('-').collect();
        if parts.len() != 3 {
            continue;
        }
        if parts[2].eq_ignore_ascii_case(tag) {
            return Some(parts[1].to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_from_default_list() {
        assert_eq!(
            resolve_language(DEFAULT_LANGUAGE_LIST, "persian").as_deref(),
            Some("fa")
        );
        assert_eq!(
            resolve_language(DEFAULT_LANGUAGE_LIST, "english").as_deref(),
            Some("en")
        );
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        assert_eq!(
            resolve_language(DEFAULT_LANGUAGE_LIST, "Persian").as_deref(),
            Some("fa")
        );
    }

    #[test]
    fn unknown_tag_resolves_to_none() {
        assert_eq!(resolve_language(DEFAULT_LANGUAGE_LIST, "klingon"), None);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let list = "garbage\nFrench-fr-french\n";
        assert_eq!(resolve_language(list, "french").as_deref(), Some("fr"));
    }
}
