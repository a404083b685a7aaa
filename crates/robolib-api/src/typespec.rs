//! Type specifications.
//!
//! Type information is metadata for the engine's argument conversion. It can
//! be mapped to arguments by name or by position, and it does not need to
//! cover every argument.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::argspec::ArgumentSpec;
use crate::error::TypeSpecError;

/// Name used in name-keyed type information for the return type.
pub const RETURN_KEY: &str = "return";

/// Value classes known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Integer,
    Float,
    Boolean,
    Bytes,
    List,
    Dict,
    None,
    Any,
}

impl ValueType {
    /// Resolve a type name or alias, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name.trim().to_lowercase().as_str() {
            "str" | "string" | "unicode" => ValueType::String,
            "int" | "integer" | "long" => ValueType::Integer,
            "float" | "double" => ValueType::Float,
            "bool" | "boolean" => ValueType::Boolean,
            "bytes" | "bytearray" => ValueType::Bytes,
            "list" | "sequence" | "array" => ValueType::List,
            "dict" | "dictionary" | "map" | "mapping" => ValueType::Dict,
            "none" | "null" => ValueType::None,
            "any" => ValueType::Any,
            _ => return None,
        };
        Some(ty)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Boolean => "boolean",
            ValueType::Bytes => "bytes",
            ValueType::List => "list",
            ValueType::Dict => "dict",
            ValueType::None => "none",
            ValueType::Any => "any",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a single argument.
///
/// JSON form: `null` for no information, a string for a type name or alias,
/// an array for a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum TypeRef {
    /// A known value class.
    ByClass(ValueType),
    /// A type name or alias the engine resolves itself.
    ByName(String),
    /// Any of the listed types.
    Union(Vec<TypeRef>),
    /// No type information.
    Unspecified,
}

impl TypeRef {
    /// Type given by name or alias.
    pub fn named(name: impl Into<String>) -> Self {
        Self::ByName(name.into())
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, TypeRef::Unspecified)
    }

    /// Resolve known names to classes, flatten nested unions and drop
    /// unspecified union members.
    pub fn normalize(self) -> Self {
        match self {
            TypeRef::ByName(name) => match ValueType::from_name(&name) {
                Some(ty) => TypeRef::ByClass(ty),
                None => TypeRef::ByName(name),
            },
            TypeRef::Union(members) => {
                let mut flat = Vec::new();
                for member in members.into_iter().map(TypeRef::normalize) {
                    match member {
                        TypeRef::Union(inner) => flat.extend(inner),
                        TypeRef::Unspecified => {}
                        other => flat.push(other),
                    }
                }
                match flat.len() {
                    0 => TypeRef::Unspecified,
                    1 => flat.remove(0),
                    _ => TypeRef::Union(flat),
                }
            }
            other => other,
        }
    }
}

impl From<ValueType> for TypeRef {
    fn from(ty: ValueType) -> Self {
        TypeRef::ByClass(ty)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        TypeRef::ByName(name.to_string())
    }
}

impl TryFrom<Value> for TypeRef {
    type Error = TypeSpecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(TypeRef::Unspecified),
            Value::String(name) => Ok(TypeRef::ByName(name)),
            Value::Array(members) => members
                .into_iter()
                .map(TypeRef::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(TypeRef::Union),
            other => Err(TypeSpecError::InvalidType(other.to_string())),
        }
    }
}

impl From<TypeRef> for Value {
    fn from(ty: TypeRef) -> Self {
        match ty {
            TypeRef::ByClass(ty) => Value::String(ty.as_str().to_string()),
            TypeRef::ByName(name) => Value::String(name),
            TypeRef::Union(members) => Value::Array(members.into_iter().map(Value::from).collect()),
            TypeRef::Unspecified => Value::Null,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::ByClass(ty) => write!(f, "{}", ty),
            TypeRef::ByName(name) => write!(f, "{}", name),
            TypeRef::Union(members) => {
                let parts: Vec<String> = members.iter().map(|m| m.to_string()).collect();
                write!(f, "{}", parts.join(" | "))
            }
            TypeRef::Unspecified => Ok(()),
        }
    }
}

/// Type information of a keyword, keyed by argument name or by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    ByName(IndexMap<String, TypeRef>),
    ByPosition(Vec<TypeRef>),
}

/// Where a type entry points to in the argument specification.
#[derive(Debug, Clone, Copy)]
enum TypeKey<'a> {
    Name(&'a str),
    Index(usize),
}

impl TypeSpec {
    /// Map the type information to the arguments of `spec`.
    ///
    /// Both shapes go through the same lookup: a name must exist in the
    /// specification, an index must be inside [`ArgumentSpec::argument_names`].
    pub fn resolve(&self, spec: &ArgumentSpec) -> Result<ResolvedTypes, TypeSpecError> {
        let names = spec.argument_names();
        let entries: Vec<(TypeKey<'_>, &TypeRef)> = match self {
            TypeSpec::ByName(map) => map.iter().map(|(k, v)| (TypeKey::Name(k), v)).collect(),
            TypeSpec::ByPosition(list) => {
                if list.len() > names.len() {
                    return Err(TypeSpecError::TooManyTypes {
                        given: list.len(),
                        available: names.len(),
                    });
                }
                list.iter()
                    .enumerate()
                    .map(|(i, v)| (TypeKey::Index(i), v))
                    .collect()
            }
        };

        let mut resolved = ResolvedTypes::default();
        for (key, ty) in entries {
            let ty = ty.clone().normalize();
            if !ty.is_specified() {
                continue;
            }
            match lookup(&names, key)? {
                None => resolved.return_type = Some(ty),
                Some(name) => {
                    resolved.arguments.insert(name.to_string(), ty);
                }
            }
        }
        Ok(resolved)
    }
}

/// `Ok(None)` means the return type.
fn lookup<'a>(names: &[&'a str], key: TypeKey<'_>) -> Result<Option<&'a str>, TypeSpecError> {
    match key {
        TypeKey::Name(name) => match names.iter().find(|n| **n == name) {
            Some(found) => Ok(Some(*found)),
            None if name == RETURN_KEY => Ok(None),
            None => Err(TypeSpecError::UnknownArgument(name.to_string())),
        },
        TypeKey::Index(index) => names.get(index).copied().map(Some).ok_or(
            TypeSpecError::TooManyTypes {
                given: index + 1,
                available: names.len(),
            },
        ),
    }
}

/// Type information mapped to argument names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTypes {
    pub arguments: IndexMap<String, TypeRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
}

impl ResolvedTypes {
    pub fn get(&self, argument: &str) -> Option<&TypeRef> {
        self.arguments.get(argument)
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty() && self.return_type.is_none()
    }
}
