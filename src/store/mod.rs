/*---------- Imports ----------*/
use crate::models::purchase::Purchase;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub mod mysql;

pub use mysql::MySqlPurchaseStore;

/*---------- Enums ----------*/
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Connection attempt timed out after {0:?}")]
    ConnectTimeout(Duration),

    #[error("Write error: {0}")]
    WriteError(String),

    #[error("Read error: {0}")]
    ReadError(String),
}

/// Persistence for purchase records.
///
/// The handlers only talk to this trait, so they run the same against MySQL and
/// against the in-memory store used in tests.
#[async_trait]
pub trait PurchaseStore: Send + Sync {
    /// Inserts one purchase and commits it.
    async fn insert(&self, purchase: &Purchase) -> Result<(), StoreError>;

    /// Number of rows currently in the `Purchases` table.
    async fn count(&self) -> Result<i64, StoreError>;
}
