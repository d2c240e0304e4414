use thiserror::Error;

/// Failure taxonomy for [`crate::ItemStore`] operations.
///
/// The API layer maps these onto HTTP statuses (400 / 404 / 500); nothing
/// beyond the message ever leaves the server.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The item name is missing or empty.
    #[error("item name must not be empty")]
    Validation,
    /// No live item with the given id.
    #[error("no item with id {0}")]
    NotFound(String),
    /// The backing store is unreachable or failed mid-operation.
    #[error("storage failure: {0}")]
    Storage(String),
}
