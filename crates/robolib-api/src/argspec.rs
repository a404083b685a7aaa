//! Argument specifications.
//!
//! Libraries describe the arguments a keyword accepts as a list of
//! [`ArgumentItem`]s:
//!
//! - normal arguments like `"arg"`, optionally with an embedded string
//!   default like `"arg=default"`;
//! - `"*varargs"` for a single variadic-positional argument;
//! - arguments after varargs, or after a lone `"*"` separator, are named-only;
//! - `"**kwargs"` for a single variadic-named argument, always last;
//! - names without defaults and names with non-string defaults can be given
//!   with [`ArgumentItem::Name`] and [`ArgumentItem::WithDefault`].
//!
//! [`ArgumentSpec::parse`] turns the items into a validated [`ArgumentSpec`].

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ArgumentError, ArgumentSpecError};

/// A single item of an argument specification as returned by a library.
///
/// JSON form: a string (`"arg=1"`), a one element array (`["arg"]`) or a
/// two element array (`["arg", 1]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum ArgumentItem {
    /// Name with a possible embedded default, `arg` or `arg=1`.
    Embedded(String),
    /// Name without a default.
    Name(String),
    /// Name with an explicit default value.
    WithDefault(String, Value),
}

impl ArgumentItem {
    /// Name without a default.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Name with an explicit default value.
    pub fn with_default(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self::WithDefault(name.into(), default.into())
    }
}

impl From<&str> for ArgumentItem {
    fn from(item: &str) -> Self {
        Self::Embedded(item.to_string())
    }
}

impl From<String> for ArgumentItem {
    fn from(item: String) -> Self {
        Self::Embedded(item)
    }
}

impl TryFrom<Value> for ArgumentItem {
    type Error = ArgumentSpecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(Self::Embedded(s)),
            Value::Array(mut items) => match items.len() {
                1 => match items.pop() {
                    Some(Value::String(name)) => Ok(Self::Name(name)),
                    other => Err(ArgumentSpecError::InvalidItem(format!("{:?}", other))),
                },
                2 => {
                    let default = items.pop().unwrap_or(Value::Null);
                    match items.pop() {
                        Some(Value::String(name)) => Ok(Self::WithDefault(name, default)),
                        other => Err(ArgumentSpecError::InvalidItem(format!("{:?}", other))),
                    }
                }
                _ => Err(ArgumentSpecError::InvalidItem(Value::Array(items).to_string())),
            },
            other => Err(ArgumentSpecError::InvalidItem(other.to_string())),
        }
    }
}

impl From<ArgumentItem> for Value {
    fn from(item: ArgumentItem) -> Self {
        match item {
            ArgumentItem::Embedded(s) => Value::String(s),
            ArgumentItem::Name(name) => Value::Array(vec![Value::String(name)]),
            ArgumentItem::WithDefault(name, default) => {
                Value::Array(vec![Value::String(name), default])
            }
        }
    }
}

/// Default value of an argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    /// Default embedded in the name, always a string.
    Embedded(String),
    /// Default given separately, may have any type.
    Explicit(Value),
}

impl DefaultValue {
    /// The default as a JSON value.
    pub fn to_value(&self) -> Value {
        match self {
            DefaultValue::Embedded(s) => Value::String(s.clone()),
            DefaultValue::Explicit(v) => v.clone(),
        }
    }
}

/// A normal or named-only argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

impl Argument {
    pub fn required(&self) -> bool {
        self.default.is_none()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.default {
            None => write!(f, "{}", self.name),
            Some(DefaultValue::Embedded(s)) => write!(f, "{}={}", self.name, s),
            Some(DefaultValue::Explicit(Value::String(s))) => write!(f, "{}={}", self.name, s),
            Some(DefaultValue::Explicit(v)) => write!(f, "{}={}", self.name, v),
        }
    }
}

/// Validated argument specification of a keyword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    /// Normal arguments, accepted positionally or by name.
    pub positional: Vec<Argument>,
    /// Name of the variadic-positional argument.
    pub var_positional: Option<String>,
    /// Arguments that can only be given by name.
    pub named_only: Vec<Argument>,
    /// Name of the variadic-named argument.
    pub var_named: Option<String>,
}

impl ArgumentSpec {
    /// Specification used when a library does not report arguments.
    pub fn any() -> Self {
        Self {
            var_positional: Some("varargs".to_string()),
            var_named: Some("kwargs".to_string()),
            ..Default::default()
        }
    }

    /// Parse and validate library-provided specification items.
    pub fn parse<I, T>(items: I) -> Result<Self, ArgumentSpecError>
    where
        I: IntoIterator<Item = T>,
        T: Into<ArgumentItem>,
    {
        let mut spec = Self::default();
        let mut seen = HashSet::new();
        let mut named_only = false;
        let mut separator = false;

        for item in items {
            if spec.var_named.is_some() {
                return Err(ArgumentSpecError::KwargsNotLast);
            }
            let (name, default) = match item.into() {
                ArgumentItem::Embedded(s) => split_embedded(s),
                ArgumentItem::Name(name) => (name, None),
                ArgumentItem::WithDefault(name, value) => {
                    (name, Some(DefaultValue::Explicit(value)))
                }
            };

            if let Some(kwargs) = name.strip_prefix("**") {
                if default.is_some() {
                    return Err(ArgumentSpecError::VariadicDefault(name));
                }
                spec.var_named = Some(unique(kwargs, &mut seen)?);
                continue;
            }
            if let Some(varargs) = name.strip_prefix('*') {
                if default.is_some() {
                    return Err(ArgumentSpecError::VariadicDefault(name));
                }
                if named_only {
                    return Err(ArgumentSpecError::MultipleVarargs);
                }
                named_only = true;
                if varargs.is_empty() {
                    separator = true;
                } else {
                    spec.var_positional = Some(unique(varargs, &mut seen)?);
                }
                continue;
            }

            let name = unique(&name, &mut seen)?;
            if named_only {
                spec.named_only.push(Argument { name, default });
                continue;
            }
            if default.is_none() && spec.positional.iter().any(|a| a.default.is_some()) {
                return Err(ArgumentSpecError::NonDefaultAfterDefault(name));
            }
            spec.positional.push(Argument { name, default });
        }

        if separator && spec.named_only.is_empty() {
            return Err(ArgumentSpecError::SeparatorWithoutNamedOnly);
        }
        Ok(spec)
    }

    /// All argument names in the order type information is mapped by position:
    /// normal arguments, varargs, named-only arguments, kwargs.
    pub fn argument_names(&self) -> Vec<&str> {
        self.positional
            .iter()
            .map(|a| a.name.as_str())
            .chain(self.var_positional.as_deref())
            .chain(self.named_only.iter().map(|a| a.name.as_str()))
            .chain(self.var_named.as_deref())
            .collect()
    }

    /// Whether the specification contains an argument with the given name.
    pub fn has_argument(&self, name: &str) -> bool {
        self.argument_names().contains(&name)
    }

    /// Minimum number of positional arguments.
    pub fn min_positional(&self) -> usize {
        self.positional.iter().filter(|a| a.required()).count()
    }

    /// Maximum number of positional arguments, `None` when unlimited.
    pub fn max_positional(&self) -> Option<usize> {
        match self.var_positional {
            Some(_) => None,
            None => Some(self.positional.len()),
        }
    }

    /// Check that the given arguments can be mapped to this specification.
    pub fn validate(&self, args: &[Value], named: &Map<String, Value>) -> Result<(), ArgumentError> {
        let given = args.len();
        if let Some(max) = self.max_positional() {
            if given > max {
                return Err(ArgumentError::Count {
                    expected: self.expected_count(),
                    got: given,
                });
            }
        }

        for key in named.keys() {
            if let Some(index) = self.positional.iter().position(|a| &a.name == key) {
                if index < given {
                    return Err(ArgumentError::MultipleValues(key.clone()));
                }
            } else if !self.named_only.iter().any(|a| &a.name == key) && self.var_named.is_none()
            {
                return Err(ArgumentError::UnexpectedNamed(key.clone()));
            }
        }

        let missing_positional: Vec<String> = self
            .positional
            .iter()
            .skip(given)
            .filter(|a| a.required() && !named.contains_key(&a.name))
            .map(|a| a.name.clone())
            .collect();
        if !missing_positional.is_empty() && named.is_empty() {
            return Err(ArgumentError::Count {
                expected: self.expected_count(),
                got: given,
            });
        }

        let missing: Vec<String> = missing_positional
            .into_iter()
            .chain(
                self.named_only
                    .iter()
                    .filter(|a| a.required() && !named.contains_key(&a.name))
                    .map(|a| a.name.clone()),
            )
            .collect();
        if !missing.is_empty() {
            return Err(ArgumentError::Missing(missing));
        }
        Ok(())
    }

    fn expected_count(&self) -> String {
        let min = self.min_positional();
        match self.max_positional() {
            None => format!("at least {}", min),
            Some(max) if max == min => min.to_string(),
            Some(max) => format!("{} to {}", min, max),
        }
    }
}

impl fmt::Display for ArgumentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = self.positional.iter().map(|a| a.to_string()).collect();
        match &self.var_positional {
            Some(name) => parts.push(format!("*{}", name)),
            None if !self.named_only.is_empty() => parts.push("*".to_string()),
            None => {}
        }
        parts.extend(self.named_only.iter().map(|a| a.to_string()));
        if let Some(name) = &self.var_named {
            parts.push(format!("**{}", name));
        }
        write!(f, "{}", parts.join(", "))
    }
}

fn split_embedded(item: String) -> (String, Option<DefaultValue>) {
    match item.split_once('=') {
        Some((name, default)) => (
            name.to_string(),
            Some(DefaultValue::Embedded(default.to_string())),
        ),
        None => (item, None),
    }
}

fn unique(name: &str, seen: &mut HashSet<String>) -> Result<String, ArgumentSpecError> {
    if name.is_empty() {
        return Err(ArgumentSpecError::EmptyName);
    }
    if !seen.insert(name.to_string()) {
        return Err(ArgumentSpecError::DuplicateName(name.to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_parse_normal_and_defaults() {
        let spec = ArgumentSpec::parse(["a", "b=2"]).unwrap();
        assert_eq!(spec.positional.len(), 2);
        assert!(spec.positional[0].required());
        assert_eq!(
            spec.positional[1].default,
            Some(DefaultValue::Embedded("2".to_string()))
        );
        assert_eq!(spec.min_positional(), 1);
        assert_eq!(spec.max_positional(), Some(2));
    }

    #[test]
    fn test_parse_tuple_forms() {
        let spec = ArgumentSpec::parse(vec![
            ArgumentItem::name("a"),
            ArgumentItem::with_default("b", 1),
            ArgumentItem::with_default("c", json!([1, 2])),
        ])
        .unwrap();
        assert!(spec.positional[0].required());
        assert_eq!(spec.positional[1].default.as_ref().unwrap().to_value(), json!(1));
        assert_eq!(spec.to_string(), "a, b=1, c=[1,2]");
    }

    #[test]
    fn test_parse_varargs_named_only_kwargs() {
        let spec = ArgumentSpec::parse(["a", "*rest", "key", "other=x", "**config"]).unwrap();
        assert_eq!(spec.var_positional.as_deref(), Some("rest"));
        assert_eq!(spec.named_only.len(), 2);
        assert_eq!(spec.var_named.as_deref(), Some("config"));
        assert_eq!(
            spec.argument_names(),
            vec!["a", "rest", "key", "other", "config"]
        );
        assert_eq!(spec.to_string(), "a, *rest, key, other=x, **config");
    }

    #[test]
    fn test_named_only_without_ordering_constraint() {
        let spec = ArgumentSpec::parse(["*", "a=1", "b"]).unwrap();
        assert!(spec.var_positional.is_none());
        assert_eq!(spec.named_only.len(), 2);
        assert_eq!(spec.max_positional(), Some(0));
        assert_eq!(spec.to_string(), "*, a=1, b");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            ArgumentSpec::parse(["a=1", "b"]),
            Err(ArgumentSpecError::NonDefaultAfterDefault("b".to_string()))
        );
        assert_eq!(
            ArgumentSpec::parse(["*a", "*b"]),
            Err(ArgumentSpecError::MultipleVarargs)
        );
        assert_eq!(
            ArgumentSpec::parse(["*", "*b"]),
            Err(ArgumentSpecError::MultipleVarargs)
        );
        assert_eq!(
            ArgumentSpec::parse(["**kw", "a"]),
            Err(ArgumentSpecError::KwargsNotLast)
        );
        assert_eq!(
            ArgumentSpec::parse(["**a", "**b"]),
            Err(ArgumentSpecError::KwargsNotLast)
        );
        assert_eq!(
            ArgumentSpec::parse(["a", "*"]),
            Err(ArgumentSpecError::SeparatorWithoutNamedOnly)
        );
        assert_eq!(
            ArgumentSpec::parse(["a", "a"]),
            Err(ArgumentSpecError::DuplicateName("a".to_string()))
        );
        assert_eq!(ArgumentSpec::parse(["=x"]), Err(ArgumentSpecError::EmptyName));
        assert!(matches!(
            ArgumentSpec::parse(vec![ArgumentItem::with_default("*args", 1)]),
            Err(ArgumentSpecError::VariadicDefault(_))
        ));
    }

    #[test]
    fn test_item_json_forms() {
        let items: Vec<ArgumentItem> =
            serde_json::from_value(json!(["a", ["b"], ["c", 3], "**kw"])).unwrap();
        assert_eq!(
            items,
            vec![
                ArgumentItem::Embedded("a".to_string()),
                ArgumentItem::name("b"),
                ArgumentItem::with_default("c", 3),
                ArgumentItem::Embedded("**kw".to_string()),
            ]
        );
        assert_eq!(serde_json::to_value(&items[2]).unwrap(), json!(["c", 3]));
        assert!(serde_json::from_value::<ArgumentItem>(json!(["a", 1, 2])).is_err());
        assert!(serde_json::from_value::<ArgumentItem>(json!(7)).is_err());
    }

    #[test]
    fn test_validate_counts() {
        let spec = ArgumentSpec::parse(["a", "b=2"]).unwrap();
        assert!(spec.validate(&[json!(1)], &Map::new()).is_ok());
        assert!(spec.validate(&[json!(1), json!(2)], &Map::new()).is_ok());
        assert_eq!(
            spec.validate(&[], &Map::new()),
            Err(ArgumentError::Count {
                expected: "1 to 2".to_string(),
                got: 0
            })
        );
        assert!(matches!(
            spec.validate(&[json!(1), json!(2), json!(3)], &Map::new()),
            Err(ArgumentError::Count { got: 3, .. })
        ));
    }

    #[test]
    fn test_validate_named() {
        let spec = ArgumentSpec::parse(["a", "b=2", "*", "flag"]).unwrap();
        assert!(spec
            .validate(&[], &named(&[("a", json!(1)), ("flag", json!(true))]))
            .is_ok());
        assert_eq!(
            spec.validate(&[json!(1)], &named(&[("a", json!(1)), ("flag", json!(true))])),
            Err(ArgumentError::MultipleValues("a".to_string()))
        );
        assert_eq!(
            spec.validate(&[json!(1)], &named(&[("nope", json!(1))])),
            Err(ArgumentError::UnexpectedNamed("nope".to_string()))
        );
        assert_eq!(
            spec.validate(&[json!(1)], &Map::new()),
            Err(ArgumentError::Missing(vec!["flag".to_string()]))
        );
    }

    #[test]
    fn test_validate_any() {
        let spec = ArgumentSpec::any();
        assert!(spec
            .validate(&[json!(1), json!("x")], &named(&[("whatever", json!(null))]))
            .is_ok());
        assert_eq!(spec.to_string(), "*varargs, **kwargs");
    }
}
