/*---------- Imports ----------*/
use crate::{
    error::PurchaseError,
    models::purchase::{Purchase, PurchaseSummary},
    store::PurchaseStore,
};
use tracing::info;

/// Inserts the purchase and reads back the table size. Shared by both lambdas.
pub async fn record_purchase<S>(
    store: &S,
    purchase: &Purchase,
) -> Result<PurchaseSummary, PurchaseError>
where
    S: PurchaseStore + ?Sized,
{
    store.insert(purchase).await?;
    let total = store.count().await?;

    info!(
        store = %purchase.store,
        product = %purchase.product,
        total,
        "Recorded purchase"
    );

    Ok(PurchaseSummary { total })
}
