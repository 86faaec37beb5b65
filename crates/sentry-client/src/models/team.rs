use serde::{Deserialize, Serialize};

/// Team association of a project.
///
/// `slug` stays optional here so that a malformed entry can be reported by
/// the caller instead of failing the whole decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
