use crate::AttributeValue;
use crate::data_sources::project_key::{ORGANIZATION, SLUG};

use std::collections::BTreeSet;

use sentry_client::Project;

pub const NAME: &str = "name";
pub const PLATFORM: &str = "platform";
pub const INTERNAL_ID: &str = "internal_id";
pub const IS_PUBLIC: &str = "is_public";
pub const COLOR: &str = "color";
pub const FEATURES: &str = "features";
pub const STATUS: &str = "status";
pub const DIGESTS_MIN_DELAY: &str = "digests_min_delay";
pub const DIGESTS_MAX_DELAY: &str = "digests_max_delay";
pub const RESOLVE_AGE: &str = "resolve_age";
pub const TEAMS: &str = "teams";

/// Flat projection of a Sentry project, produced by one lookup and
/// discarded once written into state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    /// Authoritative slug from the remote, which may differ from the one requested
    pub slug: String,
    pub organization_slug: String,
    pub platform: Option<String>,
    pub is_public: bool,
    pub color: String,
    pub features: Vec<String>,
    pub status: String,
    /// Seconds
    pub digests_min_delay: Option<i64>,
    /// Seconds
    pub digests_max_delay: Option<i64>,
    pub resolve_age_hours: Option<i64>,
    pub team_slugs: BTreeSet<String>,
}

impl TryFrom<Project> for ProjectRecord {
    /// Describes the first malformed part of the payload
    type Error = String;

    fn try_from(project: Project) -> Result<Self, Self::Error> {
        let team_slugs = project
            .teams
            .into_iter()
            .enumerate()
            .map(|(index, team)| {
                team.slug.ok_or_else(|| match team.id {
                    Some(id) => format!("team #{} (id {}) has no slug", index, id),
                    None => format!("team #{} has no slug", index),
                })
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            id: project.id,
            name: project.name,
            slug: project.slug,
            organization_slug: project.organization.slug,
            platform: project.platform,
            is_public: project.is_public,
            color: project.color,
            features: project.features,
            status: project.status,
            digests_min_delay: project.digests_min_delay,
            digests_max_delay: project.digests_max_delay,
            resolve_age_hours: project.resolve_age,
            team_slugs,
        })
    }
}

impl ProjectRecord {
    /// Every schema attribute paired with its value, ready for `ResourceData::set_all`
    pub fn attribute_values(&self) -> Vec<(&'static str, AttributeValue)> {
        vec![
            (ORGANIZATION, self.organization_slug.clone().into()),
            (NAME, self.name.clone().into()),
            (SLUG, self.slug.clone().into()),
            (PLATFORM, self.platform.clone().into()),
            (INTERNAL_ID, self.id.clone().into()),
            (IS_PUBLIC, self.is_public.into()),
            (COLOR, self.color.clone().into()),
            (FEATURES, self.features.clone().into()),
            (STATUS, self.status.clone().into()),
            (DIGESTS_MIN_DELAY, self.digests_min_delay.into()),
            (DIGESTS_MAX_DELAY, self.digests_max_delay.into()),
            (RESOLVE_AGE, self.resolve_age_hours.into()),
            (TEAMS, self.team_slugs.clone().into()),
        ]
    }
}
