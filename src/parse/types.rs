//! Serde target types for the org YAML description.

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level document wrapper; the `org` key is mandatory.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgFile {
    pub org: Org,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Org {
    #[serde(default = "default_org_name")]
    pub name: String,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

fn default_org_name() -> String {
    "Organization".to_string()
}

/// Layout direction of the rendered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A named cluster of roles sharing default reporting and styling.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub default_reports_to: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// A single position in the hierarchy.
#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Distinguishes an absent key (`None`, group default applies) from an
    /// explicit `reports_to: null` (`Some(None)`, forced root).
    #[serde(default, deserialize_with = "present_field")]
    pub reports_to: Option<Option<String>>,
}

/// Wraps any present value (including YAML null) in `Some`, so that an absent
/// key and an explicit null deserialize differently.
fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
