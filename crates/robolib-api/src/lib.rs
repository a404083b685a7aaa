//! robolib API
//!
//! Contracts for keyword libraries used by a keyword-driven test engine.
//!
//! - [`DynamicLibrary`] for libraries using the dynamic library API: keyword
//!   names are reported by the library and keywords are run by name.
//! - [`HybridLibrary`] for libraries using the hybrid library API: keyword
//!   names are reported by the library and every name resolves to a
//!   [`Keyword`] member.
//! - Types describing keywords: [`ArgumentSpec`], [`TypeSpec`], [`Tags`],
//!   [`SourceLocator`].
//!
//! # Quick Start
//!
//! ```rust
//! use robolib_api::prelude::*;
//!
//! let registry = keyword_registry! {
//!     "Should Be Positive" => |args, _named| match args.first().and_then(Value::as_f64) {
//!         Some(n) if n > 0.0 => Ok(Value::Null),
//!         Some(n) => Err(KeywordError::failure(format!("{} is not positive", n))),
//!         None => Err(KeywordError::failure("expected a number")),
//!     },
//! }
//! .unwrap();
//!
//! let library = RegistryLibrary::new(library_metadata! { name: "Numbers" }, registry);
//! let kind = LibraryKind::dynamic(library);
//! assert_eq!(kind.keyword_names(), vec!["Should Be Positive"]);
//! ```

pub mod argspec;
pub mod doc;
pub mod error;
pub mod keyword;
pub mod library;
#[macro_use]
pub mod macros;
pub mod registry;
pub mod source;
pub mod typespec;
pub mod types;

pub use argspec::{Argument, ArgumentItem, ArgumentSpec, DefaultValue};
pub use error::{
    ArgumentError, ArgumentSpecError, KeywordError, KeywordResult, RegistryError, SourceError,
    TypeSpecError,
};
pub use keyword::{DynKeyword, FnKeyword, Keyword};
pub use library::{DynDynamicLibrary, DynHybridLibrary, DynamicLibrary, HybridLibrary, LibraryKind};
pub use registry::{KeywordRegistry, RegistryLibrary};
pub use source::{Source, SourceLocator};
pub use typespec::{ResolvedTypes, TypeRef, TypeSpec, ValueType, RETURN_KEY};
pub use types::{
    DocFormat, Documentation, LibraryMetadata, LibraryScope, Name, Tags, INIT_NAME, INTRO_NAME,
};

/// Prelude module with common imports
pub mod prelude {
    pub use crate::argspec::{ArgumentItem, ArgumentSpec};
    pub use crate::error::{KeywordError, KeywordResult};
    pub use crate::keyword::{DynKeyword, FnKeyword, Keyword};
    pub use crate::library::{DynamicLibrary, HybridLibrary, LibraryKind};
    pub use crate::registry::{KeywordRegistry, RegistryLibrary};
    pub use crate::source::Source;
    pub use crate::typespec::{TypeRef, TypeSpec, ValueType};
    pub use crate::types::{
        DocFormat, Documentation, LibraryMetadata, LibraryScope, Name, Tags, INIT_NAME,
        INTRO_NAME,
    };
    pub use crate::{keyword_registry, library_metadata};
    pub use serde_json::{Map, Value};
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
