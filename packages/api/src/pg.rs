//! Postgres-backed [`ItemStore`] implementation.
//!
//! One `items` table, one row per item; the schema lives in this crate's
//! `migrations/` directory and is applied by the server launch. Ids are
//! UUIDs generated by the database and exposed to the rest of the system
//! as opaque strings.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use store::repo::validate_name;
use store::{Item, ItemStore, StoreError};

/// Database row of the `items` table.
#[derive(Clone, Debug, FromRow)]
struct ItemRow {
    id: Uuid,
    item_name: String,
}

impl ItemRow {
    fn into_item(self) -> Item {
        Item {
            id: self.id.to_string(),
            item_name: self.item_name,
        }
    }
}

/// [`ItemStore`] over a PostgreSQL `items` table.
#[derive(Clone)]
pub struct PgItemStore {
    pool: PgPool,
}

impl PgItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A string that does not parse as a UUID cannot name a live row.
fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::NotFound(id.to_string()))
}

fn storage(e: sqlx::Error) -> StoreError {
    StoreError::Storage(e.to_string())
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let rows: Vec<ItemRow> = sqlx::query_as("SELECT id, item_name FROM items")
            .fetch_all(&self.pool)
            .await
            .map_err(storage)?;
        Ok(rows.into_iter().map(ItemRow::into_item).collect())
    }

    async fn create(&self, item_name: &str) -> Result<Item, StoreError> {
        let name = validate_name(item_name)?;
        let row: ItemRow = sqlx::query_as(
            "INSERT INTO items (item_name) VALUES ($1) RETURNING id, item_name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(storage)?;
        Ok(row.into_item())
    }

    async fn update(&self, id: &str, item_name: &str) -> Result<Item, StoreError> {
        let name = validate_name(item_name)?;
        let uuid = parse_id(id)?;
        let row: Option<ItemRow> = sqlx::query_as(
            "UPDATE items SET item_name = $2 WHERE id = $1 RETURNING id, item_name",
        )
        .bind(uuid)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;
        row.map(ItemRow::into_item)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let uuid = parse_id(id)?;
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(storage)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
