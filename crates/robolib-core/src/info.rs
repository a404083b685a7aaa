//! Keyword information collected from a library.

use std::path::Path;

use serde::Serialize;

use robolib_api::doc::{merge_tags, short_doc, split_tags_from_doc};
use robolib_api::{
    ArgumentItem, ArgumentSpec, Documentation, LibraryKind, ResolvedTypes, Source, SourceLocator,
    Tags, TypeSpec,
};

use crate::error::KeywordInfoError;

/// Validated information about a single keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordInfo {
    /// Name exactly as reported by the library
    pub name: String,
    /// Documentation without a trailing `Tags:` line
    pub doc: String,
    /// First logical line of the documentation
    pub short_doc: String,
    /// Accepted arguments
    pub arguments: ArgumentSpec,
    /// Type hints mapped to argument names
    pub types: ResolvedTypes,
    /// Tags from the library and from the documentation
    pub tags: Tags,
    /// Where the keyword is implemented
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLocator>,
}

/// Raw answers of a library for one keyword name.
#[derive(Debug, Clone, Default)]
pub struct RawKeyword {
    pub doc: Option<Documentation>,
    pub arguments: Option<Vec<ArgumentItem>>,
    pub types: Option<TypeSpec>,
    pub tags: Option<Tags>,
    pub source: Option<Source>,
}

impl RawKeyword {
    /// Ask the library about `name`.
    ///
    /// Dynamic libraries answer through their optional methods, hybrid
    /// libraries through the resolved member. A hybrid name without a
    /// member is an error.
    pub fn collect(kind: &LibraryKind, name: &str) -> Result<Self, KeywordInfoError> {
        match kind {
            LibraryKind::Dynamic(lib) => Ok(Self {
                doc: lib.get_keyword_documentation(name),
                arguments: lib.get_keyword_arguments(name),
                types: lib.get_keyword_types(name),
                tags: lib.get_keyword_tags(name),
                source: lib.get_keyword_source(name),
            }),
            LibraryKind::Hybrid(lib) => {
                let member = lib.keyword(name).ok_or(KeywordInfoError::MissingMember)?;
                Ok(Self {
                    doc: member.documentation(),
                    arguments: member.arguments(),
                    types: member.types(),
                    tags: member.tags(),
                    source: member.source(),
                })
            }
        }
    }
}

impl KeywordInfo {
    /// Validate raw answers into keyword information.
    ///
    /// An invalid source locator does not invalidate the keyword; it is
    /// logged and dropped.
    pub fn build(
        name: &str,
        raw: RawKeyword,
        library_source: Option<&Path>,
    ) -> Result<Self, KeywordInfoError> {
        if name.trim().is_empty() {
            return Err(KeywordInfoError::EmptyName);
        }

        let arguments = match raw.arguments {
            Some(items) => ArgumentSpec::parse(items)?,
            None => ArgumentSpec::any(),
        };
        let types = match raw.types {
            Some(types) => types.resolve(&arguments)?,
            None => ResolvedTypes::default(),
        };

        let (doc, doc_tags) = split_tags_from_doc(raw.doc.as_deref().unwrap_or_default());
        let tags = merge_tags(raw.tags.unwrap_or_default().into_iter().chain(doc_tags));

        let source = raw.source.and_then(|s| match SourceLocator::parse(&s) {
            Ok(loc) => Some(loc.with_library_source(library_source)),
            Err(e) => {
                tracing::warn!(keyword = %name, source = %s, "Ignoring invalid keyword source: {}", e);
                None
            }
        });
        let source = source.or_else(|| {
            library_source.map(|path| SourceLocator {
                path: Some(path.to_path_buf()),
                line: None,
            })
        });

        Ok(Self {
            name: name.to_string(),
            short_doc: short_doc(&doc),
            doc,
            arguments,
            types,
            tags,
            source,
        })
    }
}
