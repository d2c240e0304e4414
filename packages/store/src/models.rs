//! # Domain model for shopping-list items
//!
//! Defines the data structure returned by every [`crate::ItemStore`]
//! operation. The type is `Serialize + Deserialize` so it can cross the
//! server/client boundary as-is: the API layer serves it directly and the
//! HTTP client decodes into it.
//!
//! The wire format uses camelCase for the name field (`itemName`), matching
//! the JSON bodies in the route contract, while the Rust field stays
//! `item_name`.

use serde::{Deserialize, Serialize};

/// A persisted shopping-list entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned unique identifier, immutable once created.
    pub id: String,
    /// User-editable name. Never empty for a persisted item.
    #[serde(rename = "itemName")]
    pub item_name: String,
}
