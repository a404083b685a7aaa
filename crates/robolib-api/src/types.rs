//! Common types for keyword libraries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Keyword name, used verbatim in every call after enumeration.
pub type Name = String;

/// Keyword or library documentation.
pub type Documentation = String;

/// Keyword tags.
pub type Tags = Vec<String>;

/// Reserved keyword name for the overall library documentation.
pub const INTRO_NAME: &str = "__intro__";

/// Reserved keyword name for the library importing documentation.
pub const INIT_NAME: &str = "__init__";

/// How long a library instance lives in the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LibraryScope {
    /// One instance for the whole execution.
    #[default]
    Global,
    /// A new instance for every suite.
    Suite,
    /// A new instance for every test.
    Test,
}

/// Markup used in library and keyword documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocFormat {
    #[default]
    Robot,
    Text,
    Html,
    Rest,
}

/// Library level information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryMetadata {
    /// Library name
    pub name: String,
    /// Library version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<semver::Version>,
    /// Instance lifetime
    #[serde(default)]
    pub scope: LibraryScope,
    /// Documentation markup
    #[serde(default)]
    pub doc_format: DocFormat,
    /// File the library is implemented in, used for keywords that report
    /// only a line number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    /// Library documentation, used when the library does not report
    /// `__intro__` documentation itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<Documentation>,
    /// Importing documentation, used when the library does not report
    /// `__init__` documentation itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_doc: Option<Documentation>,
}

impl LibraryMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the version. An invalid version is logged and ignored.
    pub fn with_version(mut self, version: &str) -> Self {
        match semver::Version::parse(version) {
            Ok(v) => self.version = Some(v),
            Err(e) => {
                tracing::warn!(library = %self.name, version, "Ignoring invalid library version: {}", e)
            }
        }
        self
    }

    pub fn with_scope(mut self, scope: LibraryScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_doc_format(mut self, doc_format: DocFormat) -> Self {
        self.doc_format = doc_format;
        self
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_init_doc(mut self, doc: impl Into<String>) -> Self {
        self.init_doc = Some(doc.into());
        self
    }
}

/// Last path segment of a type name, `my_crate::libs::Browser` -> `Browser`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
