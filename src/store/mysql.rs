/*---------- Imports ----------*/
use super::{PurchaseStore, StoreError};
use crate::{config::RdsConfig, models::purchase::Purchase};
use async_trait::async_trait;
use sqlx::{
    mysql::{MySqlConnectOptions, MySqlConnection},
    Connection,
};
use tokio::sync::Mutex;

/*---------- Constants ----------*/
const INSERT_PURCHASE: &str =
    "INSERT INTO Purchases (Store, Product, DateTime, Cost) VALUES (?, ?, ?, ?)";
const COUNT_PURCHASES: &str = "SELECT COUNT(*) FROM Purchases";

/// `Purchases` table access over one long-lived MySQL connection.
///
/// The connection is opened once per process and reused by every invocation; the
/// mutex serializes statements from concurrent callers.
pub struct MySqlPurchaseStore {
    conn: Mutex<MySqlConnection>,
}

impl MySqlPurchaseStore {
    /// Opens the connection, giving up after `config.connect_timeout`. Never retries.
    #[tracing::instrument(skip(config), fields(host = %config.host, database = %config.database))]
    pub async fn connect(config: &RdsConfig) -> Result<Self, StoreError> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let conn = tokio::time::timeout(
            config.connect_timeout,
            MySqlConnection::connect_with(&options),
        )
        .await
        .map_err(|_| StoreError::ConnectTimeout(config.connect_timeout))?
        .map_err(|error| StoreError::ConnectionFailed(error.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl PurchaseStore for MySqlPurchaseStore {
    #[tracing::instrument(skip(self))]
    async fn insert(&self, purchase: &Purchase) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().await;
        let write_error = |error: sqlx::Error| StoreError::WriteError(error.to_string());

        let mut tx = conn.begin().await.map_err(write_error)?;

        sqlx::query(INSERT_PURCHASE)
            .bind(&purchase.store)
            .bind(&purchase.product)
            .bind(&purchase.datetime)
            .bind(purchase.cost)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;

        tx.commit().await.map_err(write_error)
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.conn.lock().await;

        let (total,): (i64,) = sqlx::query_as(COUNT_PURCHASES)
            .fetch_one(&mut *conn)
            .await
            .map_err(|error| StoreError::ReadError(error.to_string()))?;

        Ok(total)
    }
}
