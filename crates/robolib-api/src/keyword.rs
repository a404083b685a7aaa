//! Keyword members.
//!
//! A [`Keyword`] is what a hybrid library resolves a name to: it runs the
//! keyword and describes itself. [`FnKeyword`] wraps a closure.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::argspec::ArgumentItem;
use crate::error::KeywordResult;
use crate::source::Source;
use crate::typespec::TypeSpec;
use crate::types::{Documentation, Tags};

/// A single keyword implementation.
pub trait Keyword: Send + Sync {
    /// Keyword name.
    fn name(&self) -> &str;

    /// Keyword documentation.
    fn documentation(&self) -> Option<Documentation> {
        None
    }

    /// Argument specification, `None` when any arguments are accepted.
    fn arguments(&self) -> Option<Vec<ArgumentItem>> {
        None
    }

    /// Type information.
    fn types(&self) -> Option<TypeSpec> {
        None
    }

    /// Keyword tags.
    fn tags(&self) -> Option<Tags> {
        None
    }

    /// Source as `path:lineno`.
    fn source(&self) -> Option<Source> {
        None
    }

    /// Run the keyword.
    fn run(&self, args: &[Value], named: &Map<String, Value>) -> KeywordResult<Value>;
}

/// Shared keyword handle.
pub type DynKeyword = Arc<dyn Keyword>;

type KeywordFn = dyn Fn(&[Value], &Map<String, Value>) -> KeywordResult<Value> + Send + Sync;

/// Keyword backed by a closure.
#[derive(Clone)]
pub struct FnKeyword {
    name: String,
    doc: Option<Documentation>,
    arguments: Option<Vec<ArgumentItem>>,
    types: Option<TypeSpec>,
    tags: Option<Tags>,
    source: Option<Source>,
    func: Arc<KeywordFn>,
}

impl FnKeyword {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value], &Map<String, Value>) -> KeywordResult<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            doc: None,
            arguments: None,
            types: None,
            tags: None,
            source: None,
            func: Arc::new(func),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_arguments<I, T>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ArgumentItem>,
    {
        self.arguments = Some(arguments.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_types(mut self, types: TypeSpec) -> Self {
        self.types = Some(types);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn into_dyn(self) -> DynKeyword {
        Arc::new(self)
    }
}

impl Keyword for FnKeyword {
    fn name(&self) -> &str {
        &self.name
    }

    fn documentation(&self) -> Option<Documentation> {
        self.doc.clone()
    }

    fn arguments(&self) -> Option<Vec<ArgumentItem>> {
        self.arguments.clone()
    }

    fn types(&self) -> Option<TypeSpec> {
        self.types.clone()
    }

    fn tags(&self) -> Option<Tags> {
        self.tags.clone()
    }

    fn source(&self) -> Option<Source> {
        self.source.clone()
    }

    fn run(&self, args: &[Value], named: &Map<String, Value>) -> KeywordResult<Value> {
        (self.func)(args, named)
    }
}

impl fmt::Debug for FnKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnKeyword")
            .field("name", &self.name)
            .field("arguments", &self.arguments)
            .field("tags", &self.tags)
            .finish_non_exhaustive()
    }
}
