use crate::AttributeType;

use std::collections::BTreeSet;

use serde::Serialize;

/// A value held in the host's state for one attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Null,
    String(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
    Set(BTreeSet<String>),
}

impl AttributeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Null conforms to every type; nullability is the schema role's call.
    pub fn conforms_to(&self, kind: AttributeType) -> bool {
        matches!(
            (self, kind),
            (Self::Null, _)
                | (Self::String(_), AttributeType::String)
                | (Self::Bool(_), AttributeType::Bool)
                | (Self::Int(_), AttributeType::Int)
                | (Self::List(_), AttributeType::StringList)
                | (Self::Set(_), AttributeType::StringSet)
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => AttributeType::String.as_str(),
            Self::Bool(_) => AttributeType::Bool.as_str(),
            Self::Int(_) => AttributeType::Int.as_str(),
            Self::List(_) => AttributeType::StringList.as_str(),
            Self::Set(_) => AttributeType::StringSet.as_str(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeSet<String>> for AttributeValue {
    fn from(value: BTreeSet<String>) -> Self {
        Self::Set(value)
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
