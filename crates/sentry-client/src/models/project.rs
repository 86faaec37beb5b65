use crate::{Organization, Team};

use serde::{Deserialize, Serialize};

/// Project as returned by `GET /0/projects/{organization}/{slug}/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub platform: Option<String>,
    pub is_public: bool,
    pub color: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub status: String,
    /// Seconds
    #[serde(default)]
    pub digests_min_delay: Option<i64>,
    /// Seconds
    #[serde(default)]
    pub digests_max_delay: Option<i64>,
    /// Hours
    #[serde(default)]
    pub resolve_age: Option<i64>,
    pub organization: Organization,
    #[serde(default)]
    pub teams: Vec<Team>,
}
