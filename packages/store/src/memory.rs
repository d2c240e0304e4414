use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::repo::{validate_name, ItemStore};
use crate::{Item, StoreError};

/// In-memory ItemStore for testing and as a non-persistent fallback.
///
/// Ids are drawn from a monotonically increasing counter, so an id handed
/// out once is never reused even after the item is deleted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    items: Vec<Item>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.inner.lock().unwrap().items.clone())
    }

    async fn create(&self, item_name: &str) -> Result<Item, StoreError> {
        let name = validate_name(item_name)?;
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let item = Item {
            id: inner.next_id.to_string(),
            item_name: name.to_string(),
        };
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: &str, item_name: &str) -> Result<Item, StoreError> {
        let name = validate_name(item_name)?;
        let mut inner = self.inner.lock().unwrap();
        let item = inner
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        item.item_name = name.to_string();
        Ok(item.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.items.len();
        inner.items.retain(|i| i.id != id);
        if inner.items.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
