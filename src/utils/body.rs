/*---------- Imports ----------*/
use crate::error::PurchaseError;
use base64::{engine::general_purpose, Engine};
use serde_json::Value;

pub struct RequestBody;

impl RequestBody {
    /// Parses an API Gateway body as JSON, base64-decoding it first when the gateway
    /// flagged it as encoded.
    pub fn parse(body: Option<&str>, is_base64_encoded: bool) -> Result<Value, PurchaseError> {
        let raw_body = body.ok_or(PurchaseError::MissingBody)?;

        if !is_base64_encoded {
            return serde_json::from_str(raw_body)
                .map_err(|error| PurchaseError::InvalidBody(error.to_string()));
        }

        let decoded = general_purpose::STANDARD
            .decode(raw_body)
            .map_err(|error| PurchaseError::InvalidBody(error.to_string()))?;

        serde_json::from_slice(&decoded)
            .map_err(|error| PurchaseError::InvalidBody(error.to_string()))
    }
}
