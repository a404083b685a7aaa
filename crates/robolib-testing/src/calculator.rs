//! Dynamic library with full introspection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};

use robolib_api::prelude::*;

use crate::values::{arg, integer, number, number_value, required, text, type_map};

const INTRO: &str = "Calculator library for tests.

Provides arithmetic and assertion keywords. All numeric arguments accept
numbers and numeric strings.";

const INIT: &str = "The library takes no arguments.";

/// Arithmetic and assertion keywords using the dynamic library API.
#[derive(Debug, Clone, Default)]
pub struct Calculator;

impl Calculator {
    pub const NAME: &'static str = "Calculator";

    pub fn new() -> Self {
        Self
    }
}

impl DynamicLibrary for Calculator {
    fn metadata(&self) -> LibraryMetadata {
        library_metadata! {
            name: Self::NAME,
            version: "1.2.0",
            scope: LibraryScope::Global,
            source: file!(),
        }
    }

    fn get_keyword_names(&self) -> Vec<Name> {
        [
            "Add",
            "Divide",
            "Sum All",
            "Should Be Equal",
            "Skip If",
            "Random Integer",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn run_keyword(&self, name: &str, args: &[Value], named: &Map<String, Value>) -> KeywordResult<Value> {
        tracing::debug!(keyword = name, "Calculator running keyword");
        match name {
            "Add" => add(args, named),
            "Divide" => divide(args, named),
            "Sum All" => {
                let mut total = 0.0;
                for value in args {
                    total += number(value, "numbers")?;
                }
                Ok(number_value(total))
            }
            "Should Be Equal" => {
                let first = required(args, named, 0, "first")?;
                let second = required(args, named, 1, "second")?;
                if first == second {
                    return Ok(Value::Null);
                }
                match arg(args, named, 2, "msg").filter(|m| !m.is_null()) {
                    Some(msg) => Err(KeywordError::failure(text(msg))),
                    None => Err(KeywordError::failure(format!("{} != {}", text(first), text(second)))),
                }
            }
            "Skip If" => {
                let condition = required(args, named, 0, "condition")?;
                let reason = arg(args, named, 1, "reason").map(text);
                if truthy(condition) {
                    return Err(KeywordError::skip(reason.unwrap_or_else(|| "Skipped".to_string())));
                }
                Ok(Value::Null)
            }
            "Random Integer" => random_integer(args, named),
            other => Err(KeywordError::UnknownKeyword(other.to_string())),
        }
    }

    fn get_keyword_documentation(&self, name: &str) -> Option<Documentation> {
        let doc = match name {
            INTRO_NAME => INTRO,
            INIT_NAME => INIT,
            "Add" => "Adds two numbers and returns the sum.\n\nTags: arithmetic",
            "Divide" => "Divides `numerator` by `denominator`.\n\nFails when `denominator` is zero.\n\nTags: arithmetic",
            "Sum All" => "Returns the sum of all given numbers.",
            "Should Be Equal" => "Fails unless `first` and `second` are equal.\n\nThe default error message can be overridden with `msg`.",
            "Skip If" => "Skips the rest of the test if `condition` is true.",
            "Random Integer" => "Returns a random integer between `min` and `max`, inclusive.\n\nThe same `seed` always produces the same number.",
            _ => return None,
        };
        Some(doc.to_string())
    }

    fn get_keyword_arguments(&self, name: &str) -> Option<Vec<ArgumentItem>> {
        let arguments = match name {
            "Add" => vec!["a".into(), "b".into()],
            "Divide" => vec!["numerator".into(), "denominator".into()],
            "Sum All" => vec!["*numbers".into()],
            "Should Be Equal" => vec![
                ArgumentItem::name("first"),
                ArgumentItem::name("second"),
                ArgumentItem::with_default("msg", Value::Null),
            ],
            "Skip If" => vec!["condition".into(), "reason=Skipped".into()],
            "Random Integer" => vec![
                ArgumentItem::with_default("min", 0),
                ArgumentItem::with_default("max", 100),
                "*".into(),
                ArgumentItem::with_default("seed", Value::Null),
            ],
            _ => return None,
        };
        Some(arguments)
    }

    fn get_keyword_types(&self, name: &str) -> Option<TypeSpec> {
        let types = match name {
            "Add" => type_map(&[("a", "float"), ("b", "float"), ("return", "float")]),
            "Divide" => TypeSpec::ByPosition(vec![
                TypeRef::ByClass(ValueType::Float),
                TypeRef::ByClass(ValueType::Float),
            ]),
            "Sum All" => type_map(&[("numbers", "float")]),
            "Skip If" => type_map(&[("condition", "bool")]),
            "Random Integer" => {
                let mut types = type_map(&[("min", "int"), ("max", "int")]);
                if let TypeSpec::ByName(map) = &mut types {
                    map.insert(
                        "seed".to_string(),
                        TypeRef::Union(vec![
                            TypeRef::ByClass(ValueType::Integer),
                            TypeRef::ByClass(ValueType::None),
                        ]),
                    );
                }
                types
            }
            _ => return None,
        };
        Some(types)
    }

    fn get_keyword_tags(&self, name: &str) -> Option<Tags> {
        let tags: &[&str] = match name {
            "Sum All" => &["arithmetic"],
            "Should Be Equal" => &["assertion"],
            "Skip If" => &["control"],
            "Random Integer" => &["random"],
            _ => return None,
        };
        Some(tags.iter().map(|t| t.to_string()).collect())
    }

    fn get_keyword_source(&self, name: &str) -> Option<Source> {
        match name {
            "Add" => Some(format!(":{}", ADD_LINE)),
            "Divide" => Some(format!(":{}", DIVIDE_LINE)),
            "Random Integer" => Some(format!("{}:{}", file!(), RANDOM_INTEGER_LINE)),
            _ => None,
        }
    }
}

const ADD_LINE: u32 = line!() + 1;
fn add(args: &[Value], named: &Map<String, Value>) -> KeywordResult<Value> {
    let a = number(required(args, named, 0, "a")?, "a")?;
    let b = number(required(args, named, 1, "b")?, "b")?;
    Ok(number_value(a + b))
}

const DIVIDE_LINE: u32 = line!() + 1;
fn divide(args: &[Value], named: &Map<String, Value>) -> KeywordResult<Value> {
    let numerator = number(required(args, named, 0, "numerator")?, "numerator")?;
    let denominator = number(required(args, named, 1, "denominator")?, "denominator")?;
    if denominator == 0.0 {
        return Err(KeywordError::failure("Cannot divide by zero."));
    }
    Ok(number_value(numerator / denominator))
}

const RANDOM_INTEGER_LINE: u32 = line!() + 1;
fn random_integer(args: &[Value], named: &Map<String, Value>) -> KeywordResult<Value> {
    let min = arg(args, named, 0, "min")
        .map(|v| integer(v, "min"))
        .transpose()?
        .unwrap_or(0);
    let max = arg(args, named, 1, "max")
        .map(|v| integer(v, "max"))
        .transpose()?
        .unwrap_or(100);
    if min > max {
        return Err(KeywordError::failure(format!(
            "Minimum {} is greater than maximum {}.",
            min, max
        )));
    }
    let value = match named.get("seed").filter(|s| !s.is_null()) {
        Some(seed) => StdRng::seed_from_u64(integer(seed, "seed")? as u64).gen_range(min..=max),
        None => rand::thread_rng().gen_range(min..=max),
    };
    Ok(Value::from(value))
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !matches!(s.trim().to_lowercase().as_str(), "" | "false" | "no" | "none" | "0" | "off"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
