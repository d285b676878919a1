/*---------- Imports ----------*/
use crate::{error::PurchaseError, utils::body::RequestBody};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/*---------- Structs ----------*/

/// The parts of an API Gateway proxy event the purchase endpoint reads.
///
/// Handlers keep the raw event around as well, since some responses echo it back.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    pub http_method: Option<String>,
    pub body: Option<String>,
    pub is_base64_encoded: Option<bool>,
}

/// Response of the direct-invocation purchase lambda.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventResponse {
    pub message: String,
}

impl ProxyEvent {
    pub fn from_event(event: &Value) -> Result<Self, PurchaseError> {
        serde_json::from_value(event.clone())
            .map_err(|error| PurchaseError::InvalidEvent(error.to_string()))
    }

    /// Looks only at `httpMethod`, so a pre-flight is recognized whatever the other
    /// fields hold.
    pub fn is_preflight(event: &Value) -> bool {
        event.get("httpMethod").and_then(Value::as_str) == Some("OPTIONS")
    }

    pub fn payload(&self) -> Result<Value, PurchaseError> {
        RequestBody::parse(
            self.body.as_deref(),
            self.is_base64_encoded.unwrap_or(false),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_event_reads_proxy_fields() {
        let event = json!({
            "resource": "/purchases",
            "httpMethod": "POST",
            "body": "{\"store\":\"A\"}",
            "isBase64Encoded": false,
            "headers": {"Content-Type": "application/json"}
        });

        let request = ProxyEvent::from_event(&event).unwrap();

        assert_eq!(request.http_method.as_deref(), Some("POST"));
        assert_eq!(request.body.as_deref(), Some("{\"store\":\"A\"}"));
        assert!(!ProxyEvent::is_preflight(&event));
        assert_eq!(request.payload().unwrap(), json!({"store": "A"}));
    }

    #[test]
    fn test_preflight_detection() {
        assert!(ProxyEvent::is_preflight(&json!({"httpMethod": "OPTIONS"})));
        assert!(ProxyEvent::is_preflight(&json!({
            "httpMethod": "OPTIONS",
            "body": {"a": 1},
            "isBase64Encoded": "no"
        })));
        assert!(!ProxyEvent::is_preflight(&json!({"httpMethod": 7})));
        assert!(!ProxyEvent::is_preflight(&json!("OPTIONS")));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let request = ProxyEvent::from_event(&json!({
            "httpMethod": null,
            "body": null,
            "isBase64Encoded": null
        }))
        .unwrap();

        assert_eq!(request, ProxyEvent::default());
        assert_eq!(request.payload(), Err(PurchaseError::MissingBody));
    }

    #[test]
    fn test_non_object_event_rejected() {
        let result = ProxyEvent::from_event(&json!("POST"));

        assert!(matches!(result, Err(PurchaseError::InvalidEvent(_))));
    }

    #[test]
    fn test_event_response_shape() {
        let response = EventResponse {
            message: "Total 5 items from RDS MySQL table".to_owned(),
        };

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"message":"Total 5 items from RDS MySQL table"}"#
        );
    }
}
