use crate::{AttributeValue, Diagnostic, Diagnostics, Schema};

use std::collections::BTreeMap;

/// The host's state for one data source instance: configured inputs going
/// in, computed attributes and the persisted id coming out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceData {
    id: Option<String>,
    values: BTreeMap<String, AttributeValue>,
}

impl ResourceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder used by the host (and tests) to seed configured inputs
    pub fn with<V: Into<AttributeValue>>(mut self, name: &str, value: V) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id<S: Into<String>>(&mut self, id: S) {
        self.id = Some(id.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    /// String value of `name`; None when unset, null or not a string
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(AttributeValue::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, AttributeValue> {
        &self.values
    }

    /// Assign many attributes in one step.
    ///
    /// Every value is checked against `schema` first and all problems are
    /// returned together. State is only written when there are none, so a
    /// failed assignment leaves the previous state untouched.
    pub fn set_all<I>(&mut self, schema: &Schema, values: I) -> Diagnostics
    where
        I: IntoIterator<Item = (&'static str, AttributeValue)>,
    {
        let values: Vec<(&'static str, AttributeValue)> = values.into_iter().collect();
        let diagnostics: Diagnostics = values
            .iter()
            .filter_map(|(name, value)| Self::check(schema, name, value))
            .collect();

        if diagnostics.is_empty() {
            for (name, value) in values {
                self.values.insert(name.to_string(), value);
            }
        }

        diagnostics
    }

    fn check(schema: &Schema, name: &str, value: &AttributeValue) -> Option<Diagnostic> {
        let Some(attribute) = schema.attribute(name) else {
            return Some(
                Diagnostic::error("Unknown attribute")
                    .with_detail(format!("\"{}\" is not part of the schema", name))
                    .for_attribute(name),
            );
        };

        if value.is_null() && !attribute.role.is_nullable() {
            return Some(
                Diagnostic::error("Missing value")
                    .with_detail(format!("\"{}\" cannot be null", name))
                    .for_attribute(name),
            );
        }

        if !value.conforms_to(attribute.kind) {
            return Some(
                Diagnostic::error("Invalid value type")
                    .with_detail(format!(
                        "\"{}\" expects {}, got {}",
                        name,
                        attribute.kind,
                        value.type_name()
                    ))
                    .for_attribute(name),
            );
        }

        None
    }
}
