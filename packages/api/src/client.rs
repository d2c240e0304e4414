//! Typed HTTP client for the item resource.
//!
//! The client is deliberately thin: one method per route, no retries, no
//! request de-duplication, no timeouts. A hung request simply never
//! resolves; a failed one is surfaced as a [`ClientError`] for the caller
//! to show the user.

use serde::de::DeserializeOwned;
use store::Item;
use thiserror::Error;

use crate::wire::{AddItem, DeleteItem, ErrorBody, UpdateItem};

/// Why a call against the item API failed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (network failure, refused connection).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },
}

/// HTTP client for the `/api/item` routes.
///
/// `base_url` is the API origin (e.g. `http://localhost:8080`); the web
/// client passes its own origin so the app talks to the backend that
/// served it.
#[derive(Clone, Debug, Default)]
pub struct ItemClient {
    base_url: String,
    http: reqwest::Client,
}

impl ItemClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/item{path}", self.base_url)
    }

    /// Fetch the full list of items.
    pub async fn list(&self) -> Result<Vec<Item>, ClientError> {
        let resp = self.http.get(self.url("")).send().await?;
        decode(resp).await
    }

    /// Create a new item from a name.
    pub async fn add(&self, item_name: &str) -> Result<Item, ClientError> {
        let body = AddItem {
            item_name: item_name.to_string(),
        };
        let resp = self.http.post(self.url("/add")).json(&body).send().await?;
        decode(resp).await
    }

    /// Replace the name of an existing item.
    pub async fn update(&self, id: &str, item_name: &str) -> Result<Item, ClientError> {
        let body = UpdateItem {
            id: id.to_string(),
            item_name: item_name.to_string(),
        };
        let resp = self
            .http
            .patch(self.url("/update"))
            .json(&body)
            .send()
            .await?;
        decode(resp).await
    }

    /// Permanently delete an item.
    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let body = DeleteItem { id: id.to_string() };
        let resp = self
            .http
            .patch(self.url("/delete"))
            .json(&body)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }
}

/// Turn a non-success response into the server's error message.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    Ok(check(resp).await?.json::<T>().await?)
}
