//! Advisory model representing travel and safety advisories.

use serde::{Deserialize, Serialize};

/// A travel advisory attached to a city.
///
/// The fields mirror the remote schema one to one. `last_updated` stays an
/// opaque timestamp string owned by the upstream source; this layer never
/// parses it.
///
/// Every field is defaulted on decode so a partial server reply still
/// deserializes; operations verify payload completeness themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    /// Server-assigned identifier. `None` until the advisory is created,
    /// so "not yet created" and "fetched but blank" stay distinguishable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub source: String,
}
