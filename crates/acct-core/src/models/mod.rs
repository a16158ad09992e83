pub mod api_key_state;
pub mod notification;
pub mod notification_kind;
pub mod payment_record;
pub mod user_profile;
