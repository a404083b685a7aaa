//! Keyword dispatch table.
//!
//! [`KeywordRegistry`] maps keyword names to members and is built once per
//! library instance. [`RegistryLibrary`] puts a registry behind both library
//! APIs so a library only has to register its keywords.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::argspec::ArgumentItem;
use crate::error::{KeywordError, KeywordResult, RegistryError};
use crate::keyword::{DynKeyword, FnKeyword};
use crate::library::{DynamicLibrary, HybridLibrary};
use crate::source::Source;
use crate::typespec::TypeSpec;
use crate::types::{Documentation, LibraryMetadata, Name, Tags, INIT_NAME, INTRO_NAME};

/// Insertion ordered mapping from keyword name to member.
#[derive(Clone, Default)]
pub struct KeywordRegistry {
    keywords: IndexMap<String, DynKeyword>,
}

impl KeywordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, failing on the first duplicate name.
    pub fn try_from_keywords<I>(keywords: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = DynKeyword>,
    {
        let mut registry = Self::new();
        for keyword in keywords {
            registry.register(keyword)?;
        }
        Ok(registry)
    }

    /// Register a keyword under its own name.
    pub fn register(&mut self, keyword: DynKeyword) -> Result<(), RegistryError> {
        let name = keyword.name().to_string();
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.keywords.contains_key(&name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        tracing::debug!(keyword = %name, "Registered keyword");
        self.keywords.insert(name, keyword);
        Ok(())
    }

    /// Register a closure as a keyword.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, func: F) -> Result<(), RegistryError>
    where
        F: Fn(&[Value], &Map<String, Value>) -> KeywordResult<Value> + Send + Sync + 'static,
    {
        self.register(FnKeyword::new(name, func).into_dyn())
    }

    pub fn get(&self, name: &str) -> Option<&DynKeyword> {
        self.keywords.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.keywords.contains_key(name)
    }

    /// Keyword names in registration order.
    pub fn names(&self) -> Vec<Name> {
        self.keywords.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Run a keyword by name.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[Value],
        named: &Map<String, Value>,
    ) -> KeywordResult<Value> {
        let keyword = self
            .get(name)
            .ok_or_else(|| KeywordError::UnknownKeyword(name.to_string()))?;
        keyword.run(args, named)
    }
}

impl std::fmt::Debug for KeywordRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordRegistry")
            .field("keywords", &self.keywords.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Library backed by a [`KeywordRegistry`], usable with either API.
#[derive(Debug, Clone)]
pub struct RegistryLibrary {
    metadata: LibraryMetadata,
    registry: KeywordRegistry,
}

impl RegistryLibrary {
    pub fn new(metadata: LibraryMetadata, registry: KeywordRegistry) -> Self {
        Self { metadata, registry }
    }

    pub fn registry(&self) -> &KeywordRegistry {
        &self.registry
    }

    fn member_info<T>(&self, name: &str, f: impl FnOnce(&DynKeyword) -> Option<T>) -> Option<T> {
        self.registry.get(name).and_then(f)
    }
}

impl DynamicLibrary for RegistryLibrary {
    fn metadata(&self) -> LibraryMetadata {
        self.metadata.clone()
    }

    fn get_keyword_names(&self) -> Vec<Name> {
        self.registry.names()
    }

    fn run_keyword(
        &self,
        name: &str,
        args: &[Value],
        named: &Map<String, Value>,
    ) -> KeywordResult<Value> {
        self.registry.dispatch(name, args, named)
    }

    fn get_keyword_documentation(&self, name: &str) -> Option<Documentation> {
        match name {
            INTRO_NAME => self.metadata.doc.clone(),
            INIT_NAME => self.metadata.init_doc.clone(),
            _ => self.member_info(name, |kw| kw.documentation()),
        }
    }

    fn get_keyword_arguments(&self, name: &str) -> Option<Vec<ArgumentItem>> {
        self.member_info(name, |kw| kw.arguments())
    }

    fn get_keyword_types(&self, name: &str) -> Option<TypeSpec> {
        self.member_info(name, |kw| kw.types())
    }

    fn get_keyword_tags(&self, name: &str) -> Option<Tags> {
        self.member_info(name, |kw| kw.tags())
    }

    fn get_keyword_source(&self, name: &str) -> Option<Source> {
        self.member_info(name, |kw| kw.source())
    }
}

impl HybridLibrary for RegistryLibrary {
    fn metadata(&self) -> LibraryMetadata {
        self.metadata.clone()
    }

    fn get_keyword_names(&self) -> Vec<Name> {
        self.registry.names()
    }

    fn keyword(&self, name: &str) -> Option<DynKeyword> {
        self.registry.get(name).cloned()
    }
}
