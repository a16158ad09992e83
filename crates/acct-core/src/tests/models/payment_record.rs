use crate::PaymentRecord;

use serde_json::json;

#[test]
fn test_list_from_bare_array() {
    let body = json!([
        { "id": "ord_1", "amount": 9.99, "currency": "USD", "status": "paid", "tokens": 1000 },
        { "orderId": "ord_2", "amount": 19.0, "currency": "USD", "status": "failed" }
    ]);

    let records = PaymentRecord::list_from_value(&body).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "ord_1");
    assert_eq!(records[0].tokens, Some(1000));
    assert_eq!(records[1].id, "ord_2");
    assert_eq!(records[1].status, "failed");
}

#[test]
fn test_list_from_wrapped_object() {
    let body = json!({ "payments": [{ "id": "ord_9", "amount": 5.0, "created_at": "2026-01-02" }] });

    let records = PaymentRecord::list_from_value(&body).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].created_at.as_deref(), Some("2026-01-02"));
}

#[test]
fn test_list_from_unrecognised_body_is_empty() {
    let records = PaymentRecord::list_from_value(&json!({ "ok": true })).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_list_with_wrong_shape_is_error() {
    let body = json!([{ "amount": "not a number" }]);
    assert!(PaymentRecord::list_from_value(&body).is_err());
}

#[test]
fn test_list_tolerates_numeric_ids_and_nulls() {
    let body = json!({ "transactions": [
        { "id": 42, "amount": "12.50", "currency": null, "status": null, "tokens": "500", "date": null },
        { "_id": "ord_3", "amount": null, "status": "paid", "tokens": null }
    ]});

    let records = PaymentRecord::list_from_value(&body).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "42");
    assert_eq!(records[0].amount, 12.5);
    assert_eq!(records[0].currency, "");
    assert_eq!(records[0].status, "");
    assert_eq!(records[0].tokens, Some(500));
    assert_eq!(records[0].created_at, None);
    assert_eq!(records[1].id, "ord_3");
    assert_eq!(records[1].amount, 0.0);
    assert_eq!(records[1].tokens, None);
}

#[test]
fn test_numeric_timestamp_is_kept_as_text() {
    let body = json!([{ "id": "ord_4", "amount": 1, "createdAt": 1767225600 }]);

    let records = PaymentRecord::list_from_value(&body).unwrap();

    assert_eq!(records[0].created_at.as_deref(), Some("1767225600"));
    assert_eq!(records[0].amount, 1.0);
}
