//! Value Types
//!
//! The semantic type attached to a declaration: a field's declared type, a
//! method's signature, or the property type implied by an accessor. Types come
//! from annotations or from literal initializers only; nothing here infers
//! types from arbitrary expressions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal initializer value (`prop = "x"`, `n = 1`, `flag = true`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl LiteralValue {
    /// The primitive type a literal widens to.
    pub fn base_type(&self) -> ValueType {
        match self {
            LiteralValue::String(_) => ValueType::String,
            LiteralValue::Number(_) => ValueType::Number,
            LiteralValue::Boolean(_) => ValueType::Boolean,
        }
    }
}

/// Signature of a method or function-typed member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionType {
    pub params: Vec<ValueType>,
    pub return_type: Box<ValueType>,
}

/// Semantic type of a member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum ValueType {
    Any,
    Unknown,
    Never,
    Void,
    Null,
    Undefined,
    String,
    Number,
    Boolean,
    Literal(LiteralValue),
    /// Nominal reference to a class or interface by name.
    Class(String),
    Union(Vec<ValueType>),
    Function(FunctionType),
}

impl ValueType {
    pub fn string_literal(value: impl Into<String>) -> Self {
        ValueType::Literal(LiteralValue::String(value.into()))
    }

    pub fn number_literal(value: f64) -> Self {
        ValueType::Literal(LiteralValue::Number(value))
    }

    pub fn boolean_literal(value: bool) -> Self {
        ValueType::Literal(LiteralValue::Boolean(value))
    }

    pub fn class(name: impl Into<String>) -> Self {
        ValueType::Class(name.into())
    }

    pub fn function(params: Vec<ValueType>, return_type: ValueType) -> Self {
        ValueType::Function(FunctionType {
            params,
            return_type: Box::new(return_type),
        })
    }

    /// Build a normalized union: nested unions are flattened, duplicates
    /// removed, a single member collapses to itself and an empty union is
    /// `never`.
    pub fn union(members: Vec<ValueType>) -> Self {
        let mut flat: Vec<ValueType> = Vec::with_capacity(members.len());
        for member in members {
            match member {
                ValueType::Union(inner) => {
                    for m in inner {
                        if !flat.contains(&m) {
                            flat.push(m);
                        }
                    }
                }
                ValueType::Never => {}
                other => {
                    if !flat.contains(&other) {
                        flat.push(other);
                    }
                }
            }
        }
        match flat.len() {
            0 => ValueType::Never,
            1 => flat.pop().unwrap_or(ValueType::Never),
            _ => ValueType::Union(flat),
        }
    }

    /// Widen literal types to their primitives, as a mutable property
    /// initialized with a literal does (`prop = "x"` has type `string`).
    pub fn widen(&self) -> ValueType {
        match self {
            ValueType::Literal(lit) => lit.base_type(),
            ValueType::Union(members) => {
                ValueType::union(members.iter().map(ValueType::widen).collect())
            }
            other => other.clone(),
        }
    }

    /// See [`crate::relations::is_assignable`].
    pub fn is_assignable_to(&self, target: &ValueType) -> bool {
        crate::relations::is_assignable(self, target)
    }

    pub const fn is_literal(&self) -> bool {
        matches!(self, ValueType::Literal(_))
    }

    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            ValueType::Function(func) => Some(func),
            _ => None,
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(s) => write!(f, "\"{s}\""),
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Any => f.write_str("any"),
            ValueType::Unknown => f.write_str("unknown"),
            ValueType::Never => f.write_str("never"),
            ValueType::Void => f.write_str("void"),
            ValueType::Null => f.write_str("null"),
            ValueType::Undefined => f.write_str("undefined"),
            ValueType::String => f.write_str("string"),
            ValueType::Number => f.write_str("number"),
            ValueType::Boolean => f.write_str("boolean"),
            ValueType::Literal(lit) => write!(f, "{lit}"),
            ValueType::Class(name) => f.write_str(name),
            ValueType::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    if matches!(member, ValueType::Function(_)) {
                        write!(f, "({member})")?;
                    } else {
                        write!(f, "{member}")?;
                    }
                }
                Ok(())
            }
            ValueType::Function(func) => {
                f.write_str("(")?;
                for (i, param) in func.params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "arg{i}: {param}")?;
                }
                write!(f, ") => {}", func.return_type)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
