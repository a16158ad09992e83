mod notification_kind;
mod payment_record;
mod user_profile;
