use crate::Result as CoreErrorResult;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Profile as reported by the server.
///
/// Every field is optional on the wire; the server is authoritative and the
/// client never checks these values beyond displaying them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    /// Set once at registration, no operation changes it
    pub email: String,
    #[serde(alias = "phone_number", alias = "phoneNumber")]
    pub phone: Option<String>,
    #[serde(alias = "avatar_url", alias = "image", alias = "profileImage")]
    pub avatar_url: Option<String>,
    #[serde(alias = "has_api_key", alias = "hasKey")]
    pub has_api_key: bool,
    #[serde(alias = "token_balance", alias = "tokens")]
    pub token_balance: i64,
    #[serde(alias = "tokens_used")]
    pub tokens_used: Option<i64>,
}

impl UserProfile {
    /// Decode a profile from a response body, unwrapping `user`/`data` envelopes.
    pub fn from_value(body: &Value) -> CoreErrorResult<Self> {
        let inner = body
            .get("user")
            .or_else(|| body.get("data"))
            .unwrap_or(body);
        Ok(serde_json::from_value(inner.clone())?)
    }

    /// Share of the purchased tokens already consumed, in percent.
    pub fn usage_percent(&self) -> Option<f64> {
        let used = self.tokens_used?;
        let total = used + self.token_balance;
        if total <= 0 {
            return None;
        }
        Some(used as f64 * 100.0 / total as f64)
    }
}
