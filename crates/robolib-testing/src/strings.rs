//! Hybrid library whose keywords are closure members.

use serde_json::{Map, Value};

use robolib_api::prelude::*;

use crate::values::{arg, integer, required, text, type_map};

/// String keywords using the hybrid library API.
#[derive(Debug, Clone)]
pub struct Strings {
    registry: KeywordRegistry,
}

impl Strings {
    pub const NAME: &'static str = "Strings";

    pub fn new() -> Self {
        let keywords = vec![
            FnKeyword::new("Concatenate", concatenate)
                .with_doc("Joins `parts` with `separator`.\n\nNon-string parts are joined as JSON.")
                .with_arguments(["*parts", "separator= "])
                .with_types(type_map(&[("parts", "str"), ("separator", "str"), ("return", "str")]))
                .with_source(format!("{}:{}", file!(), CONCATENATE_LINE)),
            FnKeyword::new("Convert To Upper Case", |args, named| {
                let value = required(args, named, 0, "text")?;
                Ok(Value::from(text(value).to_uppercase()))
            })
            .with_doc("Returns `text` in upper case.\n\nTags: conversion")
            .with_arguments(["text"]),
            FnKeyword::new("Length Should Be", length_should_be)
                .with_doc("Verifies that `item` has the given `length`.\n\nThe test continues after a failure.")
                .with_arguments(["item", "length"])
                .with_types(TypeSpec::ByPosition(vec![TypeRef::Unspecified, "int".into()]))
                .with_tags(["assertion"]),
            FnKeyword::new("Fail Fatally", |args, named| {
                let message = arg(args, named, 0, "message")
                    .map(text)
                    .unwrap_or_else(|| "Execution stopped.".to_string());
                Err(KeywordError::Fatal(message))
            })
            .with_doc("Fails and stops the whole execution.")
            .with_arguments(["message=Execution stopped."]),
            FnKeyword::new("Read Text File", |args, named| {
                let path = text(required(args, named, 0, "path")?);
                let content = std::fs::read_to_string(&path).map_err(KeywordError::unexpected)?;
                Ok(Value::from(content))
            })
            .with_doc("Returns the content of the file at `path`.")
            .with_arguments(["path"])
            .with_tags(["file"]),
            FnKeyword::new("Log Values", |args, named| {
                tracing::info!(args = ?args, named = ?named, "Log Values");
                Ok(Value::from(args.len() + named.len()))
            })
            .with_doc("Logs all given values and returns how many there were."),
        ];

        let mut registry = KeywordRegistry::new();
        for keyword in keywords {
            if let Err(e) = registry.register(keyword.into_dyn()) {
                tracing::warn!("Skipping fixture keyword: {}", e);
            }
        }
        Self { registry }
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::new()
    }
}

impl HybridLibrary for Strings {
    fn metadata(&self) -> LibraryMetadata {
        LibraryMetadata::new(Self::NAME)
            .with_version("0.3.1")
            .with_scope(LibraryScope::Suite)
            .with_doc_format(DocFormat::Text)
            .with_source(file!())
            .with_doc("String keywords for tests.")
    }

    fn get_keyword_names(&self) -> Vec<Name> {
        self.registry.names()
    }

    fn keyword(&self, name: &str) -> Option<DynKeyword> {
        self.registry.get(name).cloned()
    }
}

const CONCATENATE_LINE: u32 = line!() + 1;
fn concatenate(args: &[Value], named: &Map<String, Value>) -> KeywordResult<Value> {
    let separator = named.get("separator").map(text).unwrap_or_else(|| " ".to_string());
    let joined = args.iter().map(text).collect::<Vec<_>>().join(&separator);
    Ok(Value::from(joined))
}

fn length_should_be(args: &[Value], named: &Map<String, Value>) -> KeywordResult<Value> {
    let item = required(args, named, 0, "item")?;
    let expected = integer(required(args, named, 1, "length")?, "length")?;
    let actual = match item {
        Value::String(s) => s.chars().count(),
        Value::Array(a) => a.len(),
        Value::Object(o) => o.len(),
        other => {
            return Err(KeywordError::failure(format!(
                "Could not get length of '{}'.",
                other
            )))
        }
    };
    if actual as i64 != expected {
        return Err(KeywordError::ContinuableFailure(format!(
            "Length of '{}' should be {} but is {}.",
            text(item),
            expected,
            actual
        )));
    }
    Ok(Value::Null)
}
