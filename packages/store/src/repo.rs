//! # Store contract for shopping-list items
//!
//! [`ItemStore`] is the single seam between the HTTP layer and persistence.
//! All reads and writes go through this trait, so the same routing and
//! error-mapping code works against the Postgres backend in production and
//! the in-memory store in tests.
//!
//! | Operation | Success | Failure |
//! |-----------|---------|---------|
//! | [`list_all`](ItemStore::list_all) | every live item, store iteration order | `Storage` |
//! | [`create`](ItemStore::create) | the new item with a fresh unique id | `Validation`, `Storage` |
//! | [`update`](ItemStore::update) | the item with its name replaced | `Validation`, `NotFound`, `Storage` |
//! | [`delete`](ItemStore::delete) | the item is gone permanently | `NotFound`, `Storage` |
//!
//! Every operation is durable on success: a subsequent `list_all` reflects
//! the change. Updates replace the whole name; there are no partial-field
//! patches.

use async_trait::async_trait;

use crate::{Item, StoreError};

/// Async CRUD interface over the collection of persisted [`Item`]s.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, in store iteration order (no guaranteed sort).
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Create a new item with a store-assigned id.
    async fn create(&self, item_name: &str) -> Result<Item, StoreError>;

    /// Replace the name of an existing item.
    async fn update(&self, id: &str, item_name: &str) -> Result<Item, StoreError>;

    /// Remove an item permanently (hard delete).
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Reject names that are empty once trimmed.
///
/// Shared by every implementation so the validation rule cannot drift
/// between backends. Returns the trimmed name, which is what gets stored.
pub fn validate_name(item_name: &str) -> Result<&str, StoreError> {
    let trimmed = item_name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation);
    }
    Ok(trimmed)
}
