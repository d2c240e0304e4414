//! # Database module — PostgreSQL connection pool management
//!
//! Provides the shared PostgreSQL connection pool the server half of this
//! crate runs on. Entirely gated behind `#[cfg(feature = "server")]` so
//! client (WASM) builds never pull in SQLx or Tokio.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]: the first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment, opens the pool, and caches it for
//! all subsequent callers. The server launch resolves it once, runs the
//! migrations, and hands the pool to the store — the request path never
//! touches this module again.

mod pool;

pub use pool::get_pool;
