use serde::Serialize;

/// Who supplies an attribute's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeRole {
    /// Must be set in configuration
    Required,
    /// May be set in configuration; never filled in by a read
    Optional,
    /// Filled in by a read only
    Computed,
    /// May be set in configuration; a read overwrites it
    OptionalComputed,
}

impl AttributeRole {
    pub fn is_input(&self) -> bool {
        !matches!(self, Self::Computed)
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed | Self::OptionalComputed)
    }

    /// Whether the attribute may hold null
    pub fn is_nullable(&self) -> bool {
        !matches!(self, Self::Required)
    }
}
