/*---------- Imports ----------*/
use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use shopping_purchases::{
    config::RdsConfig,
    handlers::handle_api_event,
    store::MySqlPurchaseStore,
    utils::logging::init_logging,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = RdsConfig::from_env()?;
    let store = match MySqlPurchaseStore::connect(&config).await {
        Ok(store) => store,
        Err(connect_error) => {
            error!(error = %connect_error, "Could not connect to MySQL instance");
            return Err(connect_error.into());
        }
    };
    info!("Connection to RDS MySQL instance succeeded");

    let handler = service_fn(|event| handler_fn(&store, event));

    lambda_runtime::run(handler).await?;

    Ok(())
}

async fn handler_fn(
    store: &MySqlPurchaseStore,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let response = handle_api_event(store, event.payload).await?;

    Ok(response)
}
