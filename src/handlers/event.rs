/*---------- Imports ----------*/
use crate::{
    error::PurchaseError,
    handlers::purchase::record_purchase,
    models::{event::EventResponse, purchase::Purchase},
    store::PurchaseStore,
};
use serde_json::Value;
use tracing::warn;

/// Records a purchase sent as a direct invocation payload. No CORS, no empty-store skip.
pub async fn handle_purchase_event<S>(store: &S, event: Value) -> Result<EventResponse, PurchaseError>
where
    S: PurchaseStore + ?Sized,
{
    let purchase = Purchase::from_payload(&event)
        .inspect_err(|error| warn!(%error, "Rejected purchase event"))?;

    let summary = record_purchase(store, &purchase).await?;

    Ok(EventResponse {
        message: summary.message(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{tests::MockPurchaseStore, StoreError};
    use serde_json::json;

    fn purchase_event() -> Value {
        json!({
            "store": "A",
            "product": "P",
            "datetime": "2024-01-01",
            "cost": 9.99
        })
    }

    #[tokio::test]
    async fn test_event_on_table_with_four_rows() {
        let store = MockPurchaseStore::with_rows(4);

        let response = handle_purchase_event(&store, purchase_event()).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"message": "Total 5 items from RDS MySQL table"})
        );
        assert_eq!(store.row_count(), 5);
    }

    #[tokio::test]
    async fn test_empty_store_is_still_recorded() {
        let store = MockPurchaseStore::new();
        let mut event = purchase_event();
        event["store"] = json!("");

        let response = handle_purchase_event(&store, event).await.unwrap();

        assert_eq!(response.message, "Total 1 items from RDS MySQL table");
        assert_eq!(store.rows()[0].store, "");
    }

    #[tokio::test]
    async fn test_missing_field_is_error() {
        let store = MockPurchaseStore::new();
        let event = json!({"store": "A", "product": "P", "cost": 9.99});

        let result = handle_purchase_event(&store, event).await;

        assert_eq!(result, Err(PurchaseError::MissingField("datetime")));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_is_error() {
        let store = MockPurchaseStore::new();
        store.set_next_error(StoreError::ReadError("lost connection".to_owned()));

        let result = handle_purchase_event(&store, purchase_event()).await;

        assert!(matches!(result, Err(PurchaseError::Store(StoreError::ReadError(_)))));
    }
}
