/*---------- Imports ----------*/
use crate::{
    error::PurchaseError,
    handlers::purchase::record_purchase,
    models::{event::ProxyEvent, purchase::Purchase},
    store::PurchaseStore,
    utils::http::{Cors, HttpResponse},
};
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// `null` counts as absent, so a `null` store is echoed back instead of inserted.
fn has_store(payload: &Value) -> bool {
    match payload.get("store") {
        None | Some(Value::Null) => false,
        Some(Value::String(store)) => !store.is_empty(),
        Some(_) => true,
    }
}

async fn process_event<S>(store: &S, event: &Value) -> Result<ApiGatewayProxyResponse, PurchaseError>
where
    S: PurchaseStore + ?Sized,
{
    if ProxyEvent::is_preflight(event) {
        debug!("Answering CORS pre-flight request");
        return Ok(HttpResponse::echo_event(event, Cors::Full));
    }

    let request = ProxyEvent::from_event(event)?;
    let payload = request.payload()?;

    // Callers rely on a 200 echo here, not a client error
    if !has_store(&payload) {
        warn!("Purchase payload has no store, nothing recorded");
        return Ok(HttpResponse::echo_event(event, Cors::Minimal));
    }

    let purchase = Purchase::from_payload(&payload)?;
    let summary = record_purchase(store, &purchase).await?;

    Ok(HttpResponse::build_response(
        200,
        Cors::Full,
        json!({ "status": "ok", "msg": summary.message() }).to_string(),
    ))
}

/// Handles an API Gateway proxy event for the purchase endpoint.
///
/// Malformed requests become 400 responses. Store failures are returned as errors so
/// the runtime reports the invocation as failed.
pub async fn handle_api_event<S>(store: &S, event: Value) -> Result<ApiGatewayProxyResponse, PurchaseError>
where
    S: PurchaseStore + ?Sized,
{
    match process_event(store, &event).await {
        Err(error) if error.is_bad_request() => {
            warn!(%error, "Rejected purchase request");

            Ok(HttpResponse::build_response(
                400,
                Cors::Full,
                json!({ "status": "error", "msg": error.to_string() }).to_string(),
            ))
        }
        result => result,
    }
}
