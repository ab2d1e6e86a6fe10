//! Wire types for the package/template controller.

use serde::Deserialize;

/// One entry from `listDetails`.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageDetails {
    pub name: String,
    #[serde(default)]
    pub id: Option<i64>,
}
