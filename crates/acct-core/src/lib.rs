pub mod api_key_flow;
pub mod confirmation_gate;
pub mod error;
pub mod models;
pub mod notification_center;
pub mod response_fields;

#[cfg(test)]
mod tests;

pub use api_key_flow::ApiKeyFlow;
pub use confirmation_gate::{ConfirmationGate, DELETE_ACCOUNT_PHRASE, REGENERATE_API_KEY_PHRASE};
pub use error::{CoreError, Result};
pub use models::api_key_state::ApiKeyState;
pub use models::notification::Notification;
pub use models::notification_kind::NotificationKind;
pub use models::payment_record::PaymentRecord;
pub use models::user_profile::UserProfile;
pub use notification_center::NotificationCenter;
