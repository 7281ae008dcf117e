//! Parse phase: YAML → org model types.

pub mod types;

pub use types::*;

use crate::error::OrgError;

/// Deserialize an org YAML document into an `OrgFile`.
///
/// The single top-level `org` key is required; its absence (or any other
/// shape mismatch) is a fatal input error.
pub fn parse(yaml: &str) -> Result<OrgFile, OrgError> {
    serde_yaml::from_str::<OrgFile>(yaml)
        .map_err(|e| OrgError::Input(format!("failed to parse org YAML: {e}")))
}
