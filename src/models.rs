//! Frontend Models
//!
//! Records returned by the remote list endpoint.

use serde::{Deserialize, Deserializer};

/// One fetched record. Unknown fields (e.g. `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
