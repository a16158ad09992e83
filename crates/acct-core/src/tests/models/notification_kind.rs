use crate::NotificationKind;

use std::str::FromStr;

#[test]
fn test_notification_kind_as_str() {
    assert_eq!(NotificationKind::Warning.as_str(), "warning");
    assert_eq!(NotificationKind::Payment.as_str(), "payment");
    assert_eq!(NotificationKind::Security.as_str(), "security");
}

#[test]
fn test_notification_kind_from_str() {
    assert_eq!(
        NotificationKind::from_str("payment").unwrap(),
        NotificationKind::Payment
    );
    assert_eq!(
        NotificationKind::from_str("security").unwrap(),
        NotificationKind::Security
    );
    assert!(NotificationKind::from_str("Warning").is_err());
    assert!(NotificationKind::from_str("info").is_err());
}

#[test]
fn test_notification_kind_serde_snake_case() {
    let json = serde_json::to_string(&NotificationKind::Warning).unwrap();
    assert_eq!(json, "\"warning\"");
}
