use crate::{Diagnostic, Diagnostics, ResourceData};

use std::fmt;

pub const ORGANIZATION: &str = "organization";
pub const SLUG: &str = "slug";

/// Identifies the project to look up
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectKey {
    pub organization: String,
    pub slug: String,
}

impl ProjectKey {
    pub fn new<O: Into<String>, S: Into<String>>(organization: O, slug: S) -> Self {
        Self {
            organization: organization.into(),
            slug: slug.into(),
        }
    }

    /// Read the key from configured inputs, reporting every missing one.
    pub fn from_resource_data(data: &ResourceData) -> Result<Self, Diagnostics> {
        let organization = data.get_string(ORGANIZATION).filter(|s| !s.is_empty());
        let slug = data.get_string(SLUG).filter(|s| !s.is_empty());

        match (organization, slug) {
            (Some(organization), Some(slug)) => Ok(Self::new(organization, slug)),
            (organization, slug) => Err([(ORGANIZATION, organization), (SLUG, slug)]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| {
                    Diagnostic::error("Missing required argument")
                        .with_detail(format!("The argument \"{}\" is required", name))
                        .for_attribute(name)
                })
                .collect()),
        }
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.slug)
    }
}
