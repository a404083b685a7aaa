//! Declarative macros for library development.

/// Build a [`KeywordRegistry`](crate::registry::KeywordRegistry) from
/// `name => closure` pairs.
///
/// Evaluates to `Result<KeywordRegistry, RegistryError>`.
///
/// # Example
///
/// ```rust
/// use robolib_api::prelude::*;
///
/// let registry = keyword_registry! {
///     "Add" => |args, _named| {
///         let sum: i64 = args.iter().filter_map(Value::as_i64).sum();
///         Ok(Value::from(sum))
///     },
///     "Fail" => |_, _| Err(KeywordError::failure("failed on purpose")),
/// }
/// .unwrap();
///
/// assert_eq!(registry.names(), vec!["Add", "Fail"]);
/// ```
#[macro_export]
macro_rules! keyword_registry {
    ($($name:expr => $func:expr),* $(,)?) => {
        $crate::registry::KeywordRegistry::try_from_keywords(vec![
            $($crate::keyword::FnKeyword::new($name, $func).into_dyn()),*
        ])
    };
}

/// Build [`LibraryMetadata`](crate::types::LibraryMetadata) with common fields.
///
/// # Example
///
/// ```rust
/// use robolib_api::prelude::*;
///
/// let metadata = library_metadata! {
///     name: "Browser",
///     version: "2.1.0",
///     scope: LibraryScope::Suite,
///     doc: "Library for driving browsers.",
/// };
///
/// assert_eq!(metadata.name, "Browser");
/// assert_eq!(metadata.scope, LibraryScope::Suite);
/// ```
#[macro_export]
macro_rules! library_metadata {
    (
        name: $name:expr
        $(, version: $version:expr)?
        $(, scope: $scope:expr)?
        $(, source: $source:expr)?
        $(, doc: $doc:expr)?
        $(,)?
    ) => {{
        let metadata = $crate::types::LibraryMetadata::new($name);
        $(let metadata = metadata.with_version($version);)?
        $(let metadata = metadata.with_scope($scope);)?
        $(let metadata = metadata.with_source($source);)?
        $(let metadata = metadata.with_doc($doc);)?
        metadata
    }};
}

#[cfg(test)]
mod tests {
    use crate::error::KeywordError;
    use crate::types::LibraryScope;
    use serde_json::{json, Map, Value};

    #[test]
    fn test_keyword_registry_macro() {
        let registry = keyword_registry! {
            "One" => |_, _| Ok(json!(1)),
            "Two" => |_, _| Ok(json!(2)),
        }
        .unwrap();
        assert_eq!(registry.names(), vec!["One", "Two"]);
        assert_eq!(registry.dispatch("Two", &[], &Map::new()).unwrap(), json!(2));
    }

    #[test]
    fn test_keyword_registry_macro_duplicate() {
        let result = keyword_registry! {
            "Same" => |_, _| Ok(Value::Null),
            "Same" => |_, _| Err(KeywordError::failure("x")),
        };
        assert!(result.is_err());
    }

    #[test]
    fn test_library_metadata_macro() {
        let metadata = library_metadata! {
            name: "Files",
            version: "0.3.0",
            scope: LibraryScope::Test,
        };
        assert_eq!(metadata.name, "Files");
        assert_eq!(metadata.scope, LibraryScope::Test);
        assert!(metadata.version.is_some());
        assert!(metadata.doc.is_none());

        let minimal = library_metadata! { name: "Bare" };
        assert_eq!(minimal.scope, LibraryScope::Global);
    }
}
