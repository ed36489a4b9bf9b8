use std::fmt;

use crate::{
    ast::{LiteralValue, Primitive, Type},
    util::num::format_double,
};

/// The payload of a runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Double(f64),
    String(String),
    Bool(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Double(d) => write!(f, "{}", format_double(*d)),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A value produced while interpreting, tagged with its runtime type.
///
/// The payload is [`Value::Null`] exactly when the type is `void` or a
/// nullable type that currently holds nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeValue {
    pub value: Value,
    pub ty:    Type,
}

impl RuntimeValue {
    #[must_use]
    pub const fn new(value: Value, ty: Type) -> Self {
        Self { value, ty }
    }

    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::new(Value::Int(value), Type::INT)
    }

    #[must_use]
    pub const fn double(value: f64) -> Self {
        Self::new(Value::Double(value), Type::DOUBLE)
    }

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(Value::String(value.into()), Type::STRING)
    }

    #[must_use]
    pub const fn bool(value: bool) -> Self {
        Self::new(Value::Bool(value), Type::BOOL)
    }

    /// The `null` literal, typed `void`.
    #[must_use]
    pub const fn void() -> Self {
        Self::new(Value::Null, Type::VOID)
    }

    /// A null value carrying the nullable type `ty`.
    #[must_use]
    pub const fn null_of(ty: Type) -> Self {
        Self::new(Value::Null, ty.to_nullable())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.value, Value::Null)
    }

    /// Returns `true` when this value may be stored where `target` is
    /// expected. See [`Type::is_assignable_to`].
    #[must_use]
    pub fn can_be_assigned_to(&self, target: Type) -> bool {
        self.ty.is_assignable_to(target)
    }

    /// The same payload with its type marked non-nullable. Used once a value
    /// is known to be present.
    #[must_use]
    pub fn into_non_nullable(self) -> Self {
        Self::new(self.value, self.ty.to_non_nullable())
    }

    /// The upper-case name of the runtime primitive, as returned by the
    /// `type` builtin.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self.ty.primitive {
            Primitive::Int => "INT",
            Primitive::Double => "DOUBLE",
            Primitive::String => "STRING",
            Primitive::Bool => "BOOL",
            Primitive::Void => "VOID",
        }
    }
}

impl From<&LiteralValue> for RuntimeValue {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(i) => Self::int(*i),
            LiteralValue::Double(d) => Self::double(*d),
            LiteralValue::String(s) => Self::string(s.clone()),
            LiteralValue::Boolean(b) => Self::bool(*b),
            LiteralValue::Null => Self::void(),
        }
    }
}

impl fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
