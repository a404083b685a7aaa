//! Library conformance checks.
//!
//! Unlike the loader, which skips what it cannot use, the check collects
//! every problem a library has so that library authors can fix them all at
//! once.

use std::collections::HashSet;

use serde::Serialize;

use robolib_api::{LibraryKind, SourceLocator};

use crate::error::KeywordInfoError;
use crate::info::{KeywordInfo, RawKeyword};

/// A problem found in a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConformanceIssue {
    #[error("Keyword name at position {index} is empty.")]
    EmptyName { index: usize },

    #[error("Keyword '{name}' is reported multiple times.")]
    DuplicateName { name: String },

    #[error("Keyword '{name}' is invalid: {reason}")]
    InvalidKeyword { name: String, reason: String },

    #[error("Keyword '{name}' has malformed source '{source_text}': {reason}")]
    MalformedSource {
        name: String,
        source_text: String,
        reason: String,
    },
}

/// Result of checking a library.
#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    pub library: String,
    pub api: &'static str,
    pub keywords: usize,
    pub issues: Vec<ConformanceIssue>,
}

impl ConformanceReport {
    pub fn is_conformant(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check a library against the library API rules.
pub fn check(kind: &LibraryKind) -> ConformanceReport {
    let metadata = kind.metadata();
    let span = tracing::debug_span!("conformance", library = %metadata.name);
    let _enter = span.enter();

    let names = kind.keyword_names();
    let mut seen = HashSet::new();
    let mut issues = Vec::new();

    for (index, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            issues.push(ConformanceIssue::EmptyName { index });
            continue;
        }
        if !seen.insert(name.as_str()) {
            issues.push(ConformanceIssue::DuplicateName { name: name.clone() });
            continue;
        }

        let raw = match RawKeyword::collect(kind, name) {
            Ok(raw) => raw,
            Err(e) => {
                issues.push(invalid(name, e));
                continue;
            }
        };
        if let Some(source) = raw.source.as_deref() {
            if let Err(e) = SourceLocator::parse(source) {
                issues.push(ConformanceIssue::MalformedSource {
                    name: name.clone(),
                    source_text: source.to_string(),
                    reason: e.to_string(),
                });
            }
        }
        if let Err(e) = KeywordInfo::build(name, raw, metadata.source.as_deref()) {
            issues.push(invalid(name, e));
        }
    }

    for issue in &issues {
        tracing::debug!("{}", issue);
    }

    ConformanceReport {
        library: metadata.name,
        api: kind.api_name(),
        keywords: names.len(),
        issues,
    }
}

fn invalid(name: &str, err: KeywordInfoError) -> ConformanceIssue {
    ConformanceIssue::InvalidKeyword {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
