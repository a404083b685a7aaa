//! robolib core
//!
//! The engine side of the keyword library APIs: loading a library into a
//! [`KeywordLibrary`] of validated [`KeywordInfo`], running keywords and
//! reporting their [`KeywordOutcome`], and checking libraries for
//! conformance.
//!
//! ```rust
//! use robolib_api::prelude::*;
//! use robolib_core::{LibraryLoader, Status};
//!
//! let registry = keyword_registry! {
//!     "Double" => |args, _| Ok(Value::from(args[0].as_i64().unwrap_or(0) * 2)),
//! }
//! .unwrap();
//! let kind = LibraryKind::dynamic(RegistryLibrary::new(library_metadata! { name: "Math" }, registry));
//!
//! let library = LibraryLoader::default().load(kind).unwrap();
//! let outcome = library.run("Double", &[Value::from(21)], &Map::new());
//! assert_eq!(outcome.status, Status::Pass);
//! assert_eq!(outcome.return_value, Value::from(42));
//! ```

pub mod config;
pub mod conformance;
pub mod error;
pub mod info;
pub mod library;
pub mod loader;
pub mod outcome;

pub use config::LoaderConfig;
pub use conformance::{check, ConformanceIssue, ConformanceReport};
pub use error::{KeywordInfoError, LoadError, Result};
pub use info::{KeywordInfo, RawKeyword};
pub use library::KeywordLibrary;
pub use loader::LibraryLoader;
pub use outcome::{KeywordOutcome, RunError, Status};
