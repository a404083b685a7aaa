//! Library loading.
//!
//! The loader asks a library for its keyword names and the information
//! about each name, validates the answers, and produces a
//! [`KeywordLibrary`]. Invalid keywords are skipped with a warning unless
//! the loader is strict.

use std::collections::HashSet;

use indexmap::IndexMap;

use robolib_api::{LibraryKind, INIT_NAME, INTRO_NAME};

use crate::config::LoaderConfig;
use crate::error::{LoadError, Result};
use crate::info::{KeywordInfo, RawKeyword};
use crate::library::KeywordLibrary;

/// Loads libraries into validated [`KeywordLibrary`]s.
#[derive(Debug, Clone, Default)]
pub struct LibraryLoader {
    config: LoaderConfig,
}

impl LibraryLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Loader configured from the environment.
    pub fn from_env() -> Self {
        Self::new(LoaderConfig::from_env())
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a library.
    pub fn load(&self, kind: LibraryKind) -> Result<KeywordLibrary> {
        let metadata = kind.metadata();
        let span = tracing::debug_span!("load_library", library = %metadata.name, api = kind.api_name());
        let _enter = span.enter();

        let mut keywords = IndexMap::new();
        let mut skipped = Vec::new();
        let mut seen = HashSet::new();

        for name in kind.keyword_names() {
            if !seen.insert(name.clone()) {
                if self.config.strict {
                    return Err(LoadError::DuplicateKeyword {
                        library: metadata.name.clone(),
                        name,
                    });
                }
                tracing::warn!(keyword = %name, "Keyword reported multiple times, keeping the first");
                continue;
            }

            let info = RawKeyword::collect(&kind, &name)
                .and_then(|raw| KeywordInfo::build(&name, raw, metadata.source.as_deref()));
            match info {
                Ok(info) => {
                    tracing::debug!(keyword = %name, arguments = %info.arguments, "Loaded keyword");
                    keywords.insert(name, info);
                }
                Err(source) if self.config.strict => {
                    return Err(LoadError::InvalidKeyword {
                        library: metadata.name.clone(),
                        name,
                        source,
                    });
                }
                Err(e) => {
                    tracing::warn!(keyword = %name, "Adding keyword failed: {}", e);
                    skipped.push(name);
                }
            }
        }

        let (doc, init_doc) = match &kind {
            LibraryKind::Dynamic(lib) => (
                lib.get_keyword_documentation(INTRO_NAME)
                    .or_else(|| metadata.doc.clone()),
                lib.get_keyword_documentation(INIT_NAME)
                    .or_else(|| metadata.init_doc.clone()),
            ),
            LibraryKind::Hybrid(_) => (metadata.doc.clone(), metadata.init_doc.clone()),
        };

        tracing::debug!(
            keywords = keywords.len(),
            skipped = skipped.len(),
            "Loaded library"
        );

        Ok(KeywordLibrary::new(
            kind,
            metadata,
            doc.unwrap_or_default(),
            init_doc.unwrap_or_default(),
            keywords,
            skipped,
        ))
    }
}
