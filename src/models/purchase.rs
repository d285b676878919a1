/*---------- Imports ----------*/
use crate::error::PurchaseError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/*---------- Structs ----------*/

/// One row of the `Purchases` table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Purchase {
    pub store: String,
    pub product: String,
    pub datetime: String,
    pub cost: f64,
}

/// Outcome of recording a purchase: the table size right after the insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseSummary {
    pub total: i64,
}

fn text_field(fields: &Map<String, Value>, name: &'static str) -> Result<String, PurchaseError> {
    match fields.get(name) {
        Some(Value::String(value)) => Ok(value.to_owned()),
        None | Some(Value::Null) => Err(PurchaseError::MissingField(name)),
        Some(_) => Err(PurchaseError::InvalidField(name)),
    }
}

fn cost_field(fields: &Map<String, Value>) -> Result<f64, PurchaseError> {
    let cost = match fields.get("cost") {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        None | Some(Value::Null) => return Err(PurchaseError::MissingField("cost")),
        Some(_) => None,
    };

    cost.filter(|value| value.is_finite())
        .ok_or(PurchaseError::InvalidField("cost"))
}

impl Purchase {
    /// Extracts a purchase from a JSON object carrying `store`, `product`, `datetime`
    /// and `cost`. Extra keys are ignored.
    pub fn from_payload(payload: &Value) -> Result<Self, PurchaseError> {
        let fields = payload.as_object().ok_or(PurchaseError::InvalidPayload)?;

        Ok(Self {
            store: text_field(fields, "store")?,
            product: text_field(fields, "product")?,
            datetime: text_field(fields, "datetime")?,
            cost: cost_field(fields)?,
        })
    }
}

impl PurchaseSummary {
    pub fn message(&self) -> String {
        format!("Total {} items from RDS MySQL table", self.total)
    }
}
