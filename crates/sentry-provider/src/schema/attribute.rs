use crate::{AttributeRole, AttributeType};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub role: AttributeRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl Attribute {
    pub fn new(name: &'static str, kind: AttributeType, role: AttributeRole) -> Self {
        Self {
            name,
            kind,
            role,
            description: None,
        }
    }

    pub fn required(name: &'static str, kind: AttributeType) -> Self {
        Self::new(name, kind, AttributeRole::Required)
    }

    pub fn computed(name: &'static str, kind: AttributeType) -> Self {
        Self::new(name, kind, AttributeRole::Computed)
    }

    pub fn optional_computed(name: &'static str, kind: AttributeType) -> Self {
        Self::new(name, kind, AttributeRole::OptionalComputed)
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}
