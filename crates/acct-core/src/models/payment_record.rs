use crate::Result as CoreErrorResult;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of the payment history.
///
/// Decoding tolerates numeric ids, `null` fields and numbers sent as strings;
/// only an amount that is not a number at all is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(
        alias = "_id",
        alias = "orderId",
        alias = "order_id",
        deserialize_with = "lenient_string"
    )]
    pub id: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub currency: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "lenient_tokens")]
    pub tokens: Option<i64>,
    #[serde(alias = "created_at", alias = "date", deserialize_with = "optional_string")]
    pub created_at: Option<String>,
}

impl PaymentRecord {
    /// Decode the payment history list.
    ///
    /// Accepts a bare array or an object wrapping it under `payments`,
    /// `transactions`, `history` or `data`.
    pub fn list_from_value(body: &Value) -> CoreErrorResult<Vec<Self>> {
        let list = if body.is_array() {
            body
        } else {
            ["payments", "transactions", "history", "data"]
                .iter()
                .find_map(|key| body.get(*key).filter(|v| v.is_array()))
                .unwrap_or(&Value::Null)
        };

        match list {
            Value::Null => Ok(Vec::new()),
            other => Ok(serde_json::from_value(other.clone())?),
        }
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_string(deserializer)?.unwrap_or_default())
}

fn optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("amount {n} out of range"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid amount '{s}'"))),
        other => Err(D::Error::custom(format!("invalid amount {other}"))),
    }
}

fn lenient_tokens<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
