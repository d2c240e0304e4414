//! # Item resource routes
//!
//! Stateless translation of the `/api/item` HTTP surface into
//! [`ItemStore`] calls. Handlers shape requests and responses and map
//! store errors to statuses; the business rules themselves live in the
//! store.
//!
//! | Method | Path | Body | Success | Failure |
//! |--------|------|------|---------|---------|
//! | GET | `/api/item` | — | 200, item array | 500 |
//! | POST | `/api/item/add` | `{itemName}` | 200, created item | 400, 500 |
//! | PATCH | `/api/item/update` | `{id, itemName}` | 200, updated item | 400, 404, 500 |
//! | PATCH | `/api/item/delete` | `{id}` | 204 | 404, 500 |
//!
//! No request produces side effects beyond a single store call; there is
//! no batching and no application-level locking — concurrent updates to
//! the same item race under last-write-wins.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};

use store::{Item, ItemStore, StoreError};

use crate::wire::{AddItem, DeleteItem, ErrorBody, UpdateItem};

/// Shared store handle injected into every handler.
pub type SharedStore = Arc<dyn ItemStore>;

/// Build the item routes around an injected store handle.
///
/// Merge into the application router with `.merge(item_router(store))`.
pub fn item_router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/item", get(list_items))
        .route("/api/item/add", post(add_item))
        .route("/api/item/update", patch(update_item))
        .route("/api/item/delete", patch(delete_item))
        .with_state(store)
}

/// Store failures mapped onto HTTP statuses.
struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StoreError::Validation => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("store failure: {}", self.0);
        }
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

async fn list_items(State(store): State<SharedStore>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(store.list_all().await?))
}

async fn add_item(
    State(store): State<SharedStore>,
    Json(body): Json<AddItem>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(store.create(&body.item_name).await?))
}

async fn update_item(
    State(store): State<SharedStore>,
    Json(body): Json<UpdateItem>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(store.update(&body.id, &body.item_name).await?))
}

async fn delete_item(
    State(store): State<SharedStore>,
    Json(body): Json<DeleteItem>,
) -> Result<StatusCode, ApiError> {
    store.delete(&body.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
