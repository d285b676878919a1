/*---------- Imports ----------*/
use crate::store::StoreError;
use thiserror::Error;

/// Everything that can stop a purchase from being recorded.
///
/// All variants except [`PurchaseError::Store`] describe a malformed request and are
/// answered as bad requests by the HTTP endpoint.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PurchaseError {
    #[error("Request body can't be empty")]
    MissingBody,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Purchase payload must be a JSON object")]
    InvalidPayload,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PurchaseError {
    pub fn is_bad_request(&self) -> bool {
        !matches!(self, PurchaseError::Store(_))
    }
}
