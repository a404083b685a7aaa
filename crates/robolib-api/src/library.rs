//! Library API contracts.
//!
//! - [`DynamicLibrary`]: the library reports its keyword names and runs
//!   keywords by name. Optional methods return more information about the
//!   keywords.
//! - [`HybridLibrary`]: the library reports its keyword names, and each name
//!   resolves to a [`Keyword`](crate::keyword::Keyword) member that carries
//!   its own documentation, arguments, types, tags and source.
//!
//! A library implements one of the two. [`LibraryKind`] is what the engine
//! receives.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::argspec::ArgumentItem;
use crate::error::{KeywordError, KeywordResult};
use crate::keyword::DynKeyword;
use crate::source::Source;
use crate::typespec::TypeSpec;
use crate::types::{short_type_name, Documentation, LibraryMetadata, Name, Tags};

/// Library using the dynamic library API.
///
/// `name` passed to the other methods is always exactly as returned by
/// [`get_keyword_names`](DynamicLibrary::get_keyword_names). All optional
/// methods default to "no information" and never fail.
pub trait DynamicLibrary: Send + Sync {
    /// Library level information. Defaults to the type name.
    fn metadata(&self) -> LibraryMetadata {
        LibraryMetadata::new(short_type_name::<Self>())
    }

    /// Names of the keywords this library implements.
    fn get_keyword_names(&self) -> Vec<Name>;

    /// Execute the named keyword with positional and named arguments.
    ///
    /// Report failures with [`KeywordError::Failure`] and friends, skips with
    /// [`KeywordError::Skip`]. Any other error is an unexpected failure.
    fn run_keyword(&self, name: &str, args: &[Value], named: &Map<String, Value>)
        -> KeywordResult<Value>;

    /// Keyword documentation.
    ///
    /// Also called with [`INTRO_NAME`](crate::types::INTRO_NAME) for the
    /// library documentation and [`INIT_NAME`](crate::types::INIT_NAME) for
    /// the importing documentation. The first logical line is shown in the
    /// execution log.
    fn get_keyword_documentation(&self, _name: &str) -> Option<Documentation> {
        None
    }

    /// Argument specification. `None` means the keyword accepts any
    /// arguments; an empty list means it accepts none.
    fn get_keyword_arguments(&self, _name: &str) -> Option<Vec<ArgumentItem>> {
        None
    }

    /// Type information, by argument name or by position.
    fn get_keyword_types(&self, _name: &str) -> Option<TypeSpec> {
        None
    }

    /// Keyword tags.
    fn get_keyword_tags(&self, _name: &str) -> Option<Tags> {
        None
    }

    /// Source as `path:lineno`, `path` or `:lineno`.
    fn get_keyword_source(&self, _name: &str) -> Option<Source> {
        None
    }
}

/// Library using the hybrid library API.
pub trait HybridLibrary: Send + Sync {
    /// Library level information. Defaults to the type name.
    fn metadata(&self) -> LibraryMetadata {
        LibraryMetadata::new(short_type_name::<Self>())
    }

    /// Names of the implemented keyword members.
    fn get_keyword_names(&self) -> Vec<Name>;

    /// Resolve a keyword name to its member.
    fn keyword(&self, name: &str) -> Option<DynKeyword>;

    /// Run the named member.
    fn run_keyword(
        &self,
        name: &str,
        args: &[Value],
        named: &Map<String, Value>,
    ) -> KeywordResult<Value> {
        match self.keyword(name) {
            Some(kw) => kw.run(args, named),
            None => Err(KeywordError::UnknownKeyword(name.to_string())),
        }
    }
}

/// Shared dynamic library handle.
pub type DynDynamicLibrary = Arc<dyn DynamicLibrary>;

/// Shared hybrid library handle.
pub type DynHybridLibrary = Arc<dyn HybridLibrary>;

/// A library in one of the two API styles.
#[derive(Clone)]
pub enum LibraryKind {
    Dynamic(DynDynamicLibrary),
    Hybrid(DynHybridLibrary),
}

impl LibraryKind {
    pub fn dynamic<L: DynamicLibrary + 'static>(library: L) -> Self {
        Self::Dynamic(Arc::new(library))
    }

    pub fn hybrid<L: HybridLibrary + 'static>(library: L) -> Self {
        Self::Hybrid(Arc::new(library))
    }

    pub fn metadata(&self) -> LibraryMetadata {
        match self {
            LibraryKind::Dynamic(lib) => lib.metadata(),
            LibraryKind::Hybrid(lib) => lib.metadata(),
        }
    }

    pub fn keyword_names(&self) -> Vec<Name> {
        match self {
            LibraryKind::Dynamic(lib) => lib.get_keyword_names(),
            LibraryKind::Hybrid(lib) => lib.get_keyword_names(),
        }
    }

    pub fn run_keyword(
        &self,
        name: &str,
        args: &[Value],
        named: &Map<String, Value>,
    ) -> KeywordResult<Value> {
        match self {
            LibraryKind::Dynamic(lib) => lib.run_keyword(name, args, named),
            LibraryKind::Hybrid(lib) => lib.run_keyword(name, args, named),
        }
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            LibraryKind::Dynamic(_) => "dynamic",
            LibraryKind::Hybrid(_) => "hybrid",
        }
    }
}

impl fmt::Debug for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LibraryKind")
            .field(&self.api_name())
            .field(&self.metadata().name)
            .finish()
    }
}
