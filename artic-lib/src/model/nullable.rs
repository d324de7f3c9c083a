//! Deserializers for fields that must be present but may be `null`.
//!
//! Using `deserialize_with` makes serde report a missing key as an error
//! instead of silently defaulting it.

use serde::Deserialize;
use serde::Deserializer;

/// A required text field where `null` reads as an empty string.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A required integer field where `null` reads as `None`.
pub(crate) fn year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer)
}
