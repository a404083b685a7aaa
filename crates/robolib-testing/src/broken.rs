//! Library that violates the library API rules in every way it can.

use serde_json::{Map, Value};

use robolib_api::prelude::*;

use crate::values::type_map;

/// Dynamic library with invalid keywords, for loader and conformance tests.
#[derive(Debug, Clone, Default)]
pub struct Broken;

impl Broken {
    pub const NAME: &'static str = "Broken";
}

impl DynamicLibrary for Broken {
    fn metadata(&self) -> LibraryMetadata {
        library_metadata! {
            name: Self::NAME,
            version: "not-a-version",
            doc: "Deliberately broken library.",
        }
    }

    fn get_keyword_names(&self) -> Vec<Name> {
        [
            "Works",
            "",
            "Works",
            "Kwargs First",
            "Default Before Required",
            "Typed Ghost",
            "Zero Line",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn run_keyword(&self, name: &str, _args: &[Value], _named: &Map<String, Value>) -> KeywordResult<Value> {
        match name {
            "Works" => Ok(Value::from("works")),
            "Zero Line" => Ok(Value::Null),
            other => Err(KeywordError::UnknownKeyword(other.to_string())),
        }
    }

    fn get_keyword_arguments(&self, name: &str) -> Option<Vec<ArgumentItem>> {
        match name {
            "Works" | "Zero Line" => Some(Vec::new()),
            "Kwargs First" => Some(vec!["**options".into(), "value".into()]),
            "Default Before Required" => Some(vec!["first=1".into(), "second".into()]),
            "Typed Ghost" => Some(vec!["real".into()]),
            _ => None,
        }
    }

    fn get_keyword_types(&self, name: &str) -> Option<TypeSpec> {
        match name {
            "Typed Ghost" => Some(type_map(&[("ghost", "int")])),
            _ => None,
        }
    }

    fn get_keyword_source(&self, name: &str) -> Option<Source> {
        match name {
            "Zero Line" => Some("broken.rs:0".to_string()),
            _ => None,
        }
    }
}
