//! Request and error bodies for the `/api/item` routes.
//!
//! Field names follow the wire casing (`itemName`). Items themselves are
//! [`store::Item`], serialized directly. A missing `itemName` or `id` key
//! deserializes to the empty string, which the store then rejects the same
//! way as an explicit empty value.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/item/add`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddItem {
    #[serde(default, rename = "itemName")]
    pub item_name: String,
}

/// Body of `PATCH /api/item/update`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateItem {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "itemName")]
    pub item_name: String,
}

/// Body of `PATCH /api/item/delete`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteItem {
    #[serde(default)]
    pub id: String,
}

/// Error body attached to any non-2xx response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
