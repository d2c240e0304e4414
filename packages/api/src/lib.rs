//! # API crate — the HTTP boundary of the shopping list
//!
//! Both halves of the item resource live here so the wire format is defined
//! exactly once:
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`wire`] | — | Request and error bodies for the `/api/item` routes |
//! | [`client`] | — | Typed reqwest client used by the UI (WASM and native) |
//! | [`db`] | `server` | Lazy process-wide PostgreSQL connection pool |
//! | `pg` | `server` | [`PgItemStore`], the Postgres-backed store |
//! | `routes` | `server` | [`item_router`], the axum routes + error mapping |
//!
//! The server half is entirely behind `#[cfg(feature = "server")]` so that
//! client (WASM) builds never pull in SQLx, axum, or Tokio networking code.

pub mod client;
pub mod wire;

#[cfg(feature = "server")]
pub mod db;
#[cfg(feature = "server")]
mod pg;
#[cfg(feature = "server")]
mod routes;

pub use client::{ClientError, ItemClient};
#[cfg(feature = "server")]
pub use pg::PgItemStore;
#[cfg(feature = "server")]
pub use routes::{item_router, SharedStore};

pub use store::Item;
