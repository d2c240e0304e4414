//! Mutation dispatcher: one API call per confirmed action, then a full
//! list refresh.
//!
//! The refresh-after-every-mutation is deliberate: replacing the whole row
//! set keeps the client from drifting from server truth, at the cost of
//! resetting any other row that was mid-edit when the refresh lands. On
//! failure nothing is refreshed — the triggering row stays exactly where
//! it was and the error is shown in the banner. No retries.

use dioxus::prelude::*;

use api::{ClientError, ItemClient};

use crate::banner::ErrorBannerState;
use crate::rows::{Mutation, RowEvent, RowSet};

/// Feed a grid event through the reducer and dispatch whatever mutation it
/// emits.
pub fn dispatch_event(
    client: ItemClient,
    mut rows: Signal<RowSet>,
    banner: Signal<ErrorBannerState>,
    event: RowEvent,
) {
    let Some(mutation) = rows.write().apply(event) else {
        return;
    };
    spawn(async move {
        let result = match &mutation {
            Mutation::Add { item_name } => client.add(item_name).await.map(drop),
            Mutation::Update { id, item_name } => {
                client.update(id, item_name).await.map(drop)
            }
            Mutation::Delete { id } => client.delete(id).await,
        };
        match result {
            Ok(()) => refresh(client, rows, banner).await,
            Err(e) => fail(banner, &e),
        }
    });
}

/// Refetch the entire list and replace every row with the fresh snapshot.
pub async fn refresh(
    client: ItemClient,
    mut rows: Signal<RowSet>,
    banner: Signal<ErrorBannerState>,
) {
    match client.list().await {
        Ok(items) => {
            rows.write().apply(RowEvent::Refresh(items));
        }
        Err(e) => fail(banner, &e),
    }
}

fn fail(mut banner: Signal<ErrorBannerState>, error: &ClientError) {
    tracing::error!("item request failed: {error}");
    banner.write().show(error.to_string());
}
