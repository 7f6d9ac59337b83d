//! Leave requests: validation, admin decisions, terminal enforcement.

mod common;

use chrono::NaiveDate;
use pearl_engine::leave::LeaveService;
use shared::ErrorCode;
use shared::models::{LeaveDecision, LeaveStatus, Role};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn submission_validation() {
    let store = common::store().await;
    let leave = LeaveService::new(store.leave.clone());

    // Short reason is rejected inline, nothing is stored
    let err = leave
        .submit("Alex Kim", date(2026, 9, 1), date(2026, 9, 3), "trip")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);

    // End before start
    let err = leave
        .submit(
            "Alex Kim",
            date(2026, 9, 3),
            date(2026, 9, 1),
            "family visit out of town",
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidDateRange);

    // Empty staff name
    let err = leave
        .submit("  ", date(2026, 9, 1), date(2026, 9, 3), "family visit out of town")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);

    assert!(leave.all().await.unwrap().is_empty());

    // Single-day leave is fine (end == start)
    let request = leave
        .submit(
            "Alex Kim",
            date(2026, 9, 1),
            date(2026, 9, 1),
            "medical appointment downtown",
        )
        .await
        .unwrap();
    assert_eq!(request.status, LeaveStatus::Pending);
}

#[tokio::test]
async fn decisions_are_terminal() {
    let store = common::store().await;
    let leave = LeaveService::new(store.leave.clone());

    let request = leave
        .submit(
            "Alex Kim",
            date(2026, 9, 1),
            date(2026, 9, 5),
            "family visit out of town",
        )
        .await
        .unwrap();
    let key = request.key().unwrap();

    // Staff cannot decide
    let err = leave
        .decide(Role::Staff, &key, LeaveDecision::Approve)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PermissionDenied);

    // Admin approves
    let approved = leave
        .decide(Role::Admin, &key, LeaveDecision::Approve)
        .await
        .unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);

    // A later deny on the already-approved request is a state violation
    let err = leave
        .decide(Role::Admin, &key, LeaveDecision::Deny)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::LeaveAlreadyDecided);

    // The stored status is untouched
    let stored = store.leave.find_by_id(&key).await.unwrap().unwrap();
    assert_eq!(stored.status, LeaveStatus::Approved);
}

#[tokio::test]
async fn listings_are_ordered_and_scoped() {
    let store = common::store().await;
    let leave = LeaveService::new(store.leave.clone());

    leave
        .submit(
            "Alex Kim",
            date(2026, 8, 10),
            date(2026, 8, 12),
            "family visit out of town",
        )
        .await
        .unwrap();
    leave
        .submit(
            "Sam Rivera",
            date(2026, 9, 20),
            date(2026, 9, 22),
            "attending a wedding abroad",
        )
        .await
        .unwrap();
    leave
        .submit(
            "Alex Kim",
            date(2026, 10, 1),
            date(2026, 10, 2),
            "medical appointment downtown",
        )
        .await
        .unwrap();

    // Latest start date first
    let all = leave.all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].start_date, date(2026, 10, 1));
    assert_eq!(all[2].start_date, date(2026, 8, 10));

    let mine = leave.for_staff("Alex Kim").await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|r| r.staff_name == "Alex Kim"));
    assert_eq!(mine[0].start_date, date(2026, 10, 1));
}
