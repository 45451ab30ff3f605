// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Enforces a non-empty list of health endpoints.

use nonempty::NonEmpty;
use serde::Deserialize;

pub fn deserialize_endpoints<'de, D>(deserializer: D) -> Result<NonEmpty<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<String> = Vec::deserialize(deserializer)?;
    NonEmpty::from_vec(values)
        .ok_or_else(|| serde::de::Error::custom("at least one health endpoint is required"))
}
