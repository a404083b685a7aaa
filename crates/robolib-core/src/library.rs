//! Loaded keyword libraries.

use std::fmt;
use std::time::Instant;

use chrono::Utc;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use robolib_api::{KeywordError, LibraryKind, LibraryMetadata};

use crate::info::KeywordInfo;
use crate::outcome::{KeywordOutcome, RunError};

/// A library whose keywords have been validated by the
/// [`LibraryLoader`](crate::loader::LibraryLoader).
#[derive(Clone)]
pub struct KeywordLibrary {
    kind: LibraryKind,
    metadata: LibraryMetadata,
    doc: String,
    init_doc: String,
    keywords: IndexMap<String, KeywordInfo>,
    skipped: Vec<String>,
}

impl KeywordLibrary {
    pub(crate) fn new(
        kind: LibraryKind,
        metadata: LibraryMetadata,
        doc: String,
        init_doc: String,
        keywords: IndexMap<String, KeywordInfo>,
        skipped: Vec<String>,
    ) -> Self {
        Self {
            kind,
            metadata,
            doc,
            init_doc,
            keywords,
            skipped,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn metadata(&self) -> &LibraryMetadata {
        &self.metadata
    }

    pub fn kind(&self) -> &LibraryKind {
        &self.kind
    }

    /// Library documentation.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Importing documentation.
    pub fn init_doc(&self) -> &str {
        &self.init_doc
    }

    /// Keyword names in the order the library reported them.
    pub fn keyword_names(&self) -> Vec<&str> {
        self.keywords.keys().map(String::as_str).collect()
    }

    pub fn keyword(&self, name: &str) -> Option<&KeywordInfo> {
        self.keywords.get(name)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &KeywordInfo> {
        self.keywords.values()
    }

    /// Names that were reported but could not be added.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Run a keyword.
    ///
    /// Arguments are checked against the keyword's specification before the
    /// library sees them. The name is passed to the library exactly as the
    /// library reported it.
    pub fn run(&self, name: &str, args: &[Value], named: &Map<String, Value>) -> KeywordOutcome {
        let span = tracing::info_span!("run_keyword", library = %self.metadata.name, keyword = %name);
        let _enter = span.enter();

        let started_at = Utc::now();
        let start = Instant::now();
        let result = self.execute(name, args, named);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let outcome = KeywordOutcome::from_result(name, result, started_at, elapsed_ms);
        match &outcome.message {
            Some(message) if outcome.unexpected => {
                tracing::error!(status = %outcome.status, elapsed_ms, "{}", message)
            }
            Some(message) => tracing::info!(status = %outcome.status, elapsed_ms, "{}", message),
            None => tracing::debug!(status = %outcome.status, elapsed_ms, "Keyword passed"),
        }
        outcome
    }

    fn execute(
        &self,
        name: &str,
        args: &[Value],
        named: &Map<String, Value>,
    ) -> Result<Value, RunError> {
        let info = self
            .keywords
            .get(name)
            .ok_or_else(|| KeywordError::UnknownKeyword(name.to_string()))?;
        info.arguments.validate(args, named)?;
        Ok(self.kind.run_keyword(&info.name, args, named)?)
    }
}

impl fmt::Debug for KeywordLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordLibrary")
            .field("name", &self.metadata.name)
            .field("api", &self.kind.api_name())
            .field("keywords", &self.keywords.len())
            .field("skipped", &self.skipped)
            .finish()
    }
}
