//! Full order lifecycle against the in-memory store:
//! place → prepare → deliver → review, plus the review gate's
//! compensation path and the dashboard aggregates.

mod common;

use pearl_engine::db::models::Order;
use pearl_engine::orders::{DashboardStats, OrderService};
use pearl_engine::reviews::ReviewService;
use shared::ErrorCode;
use shared::models::{OrderStatus, PaymentStatus, Role};
use surrealdb::RecordId;

#[tokio::test]
async fn full_lifecycle_with_review() {
    let store = common::store().await;
    let orders = OrderService::new(store.orders.clone());
    let reviews = ReviewService::new(store.reviews.clone(), store.orders.clone());

    let item = store.catalog.create(common::grilled_salmon()).await.unwrap();
    let order = orders.place_order("Jane Doe", &item).await.unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Unpaid);
    assert!(!order.reviewed);
    assert_eq!(order.items, vec!["Grilled Salmon".to_string()]);
    assert_eq!(order.total, 24.50);
    let key = order.key().expect("persisted order has an id");

    // Staff walk the standard flow; each persisted status is exactly
    // the requested target.
    for target in [
        OrderStatus::InProgress,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ] {
        let updated = orders.set_status(&key, target).await.unwrap();
        assert_eq!(updated.status, target);
        let stored = store.orders.find_by_id(&key).await.unwrap().unwrap();
        assert_eq!(stored.status, target);
    }

    // Customer reviews the delivered order
    let delivered = store.orders.find_by_id(&key).await.unwrap().unwrap();
    assert!(ReviewService::can_review(&delivered));
    let review = reviews.submit_review(&delivered, 5, "Great").await.unwrap();
    assert_eq!(review.rating, 5);
    assert_eq!(review.comment, "Great");
    assert_eq!(review.dish_name, "Grilled Salmon");
    assert_eq!(review.customer_name, "Jane Doe");

    let flagged = store.orders.find_by_id(&key).await.unwrap().unwrap();
    assert!(flagged.reviewed);

    // reviewed=true implies exactly one review references the order
    let linked = reviews.for_order(&key).await.unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].key(), review.key());

    // A second submission fails the gate
    let err = reviews.submit_review(&flagged, 4, "Again").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::OrderAlreadyReviewed);
    assert_eq!(reviews.for_order(&key).await.unwrap().len(), 1);
}

#[tokio::test]
async fn review_rejected_before_delivery_and_for_bad_rating() {
    let store = common::store().await;
    let orders = OrderService::new(store.orders.clone());
    let reviews = ReviewService::new(store.reviews.clone(), store.orders.clone());

    let item = store.catalog.create(common::grilled_salmon()).await.unwrap();
    let order = orders.place_order("Jane Doe", &item).await.unwrap();

    // Not delivered yet
    let err = reviews.submit_review(&order, 5, "too early").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ReviewNotAllowed);

    // Out-of-range rating is a validation error and writes nothing
    let key = order.key().unwrap();
    orders.set_status(&key, OrderStatus::Delivered).await.unwrap();
    let delivered = store.orders.find_by_id(&key).await.unwrap().unwrap();

    let err = reviews.submit_review(&delivered, 0, "no stars picked").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidRating);
    let err = reviews.submit_review(&delivered, 6, "six stars").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidRating);
    assert!(reviews.for_order(&key).await.unwrap().is_empty());

    let unchanged = store.orders.find_by_id(&key).await.unwrap().unwrap();
    assert!(!unchanged.reviewed);
}

#[tokio::test]
async fn failed_flag_update_removes_the_created_review() {
    let store = common::store().await;
    let orders = OrderService::new(store.orders.clone());
    let reviews = ReviewService::new(store.reviews.clone(), store.orders.clone());

    let item = store.catalog.create(common::grilled_salmon()).await.unwrap();
    let order = orders.place_order("Jane Doe", &item).await.unwrap();
    let key = order.key().unwrap();
    orders.set_status(&key, OrderStatus::Delivered).await.unwrap();
    let delivered = store.orders.find_by_id(&key).await.unwrap().unwrap();

    // Remove the order record out from under the service; the review
    // create succeeds but the flag update cannot.
    let record_id: RecordId = key.parse().unwrap();
    let _removed: Option<Order> = store.db.db.delete(record_id).await.unwrap();

    let err = reviews.submit_review(&delivered, 5, "Great").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);

    // Compensation: no orphan review is left behind
    assert!(store.reviews.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn permissive_status_jumps_are_persisted_verbatim() {
    let store = common::store().await;
    let orders = OrderService::new(store.orders.clone());

    let item = store.catalog.create(common::grilled_salmon()).await.unwrap();
    let order = orders.place_order("Jane Doe", &item).await.unwrap();
    let key = order.key().unwrap();

    // Outside the standard table, still accepted and persisted as-is
    let updated = orders.set_status(&key, OrderStatus::Delivered).await.unwrap();
    assert_eq!(updated.status, OrderStatus::Delivered);
    let stored = store.orders.find_by_id(&key).await.unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Delivered);
}

#[tokio::test]
async fn payment_role_rules() {
    let store = common::store().await;
    let orders = OrderService::new(store.orders.clone());

    let item = store.catalog.create(common::grilled_salmon()).await.unwrap();
    let order = orders.place_order("Jane Doe", &item).await.unwrap();
    let key = order.key().unwrap();

    // Customer pays an unpaid order
    let paid = orders.pay_now(&key).await.unwrap();
    assert_eq!(paid.payment_status, PaymentStatus::Paid);

    // Customer cannot pay twice or unpay
    let err = orders.pay_now(&key).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::PaymentNotAllowed);
    let err = orders
        .set_payment_status(Role::Customer, &key, PaymentStatus::Unpaid)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PaymentNotAllowed);

    // Admin corrects in either direction
    let unpaid = orders
        .set_payment_status(Role::Admin, &key, PaymentStatus::Unpaid)
        .await
        .unwrap();
    assert_eq!(unpaid.payment_status, PaymentStatus::Unpaid);

    // Payment is not coupled to order status: a cancelled order can be paid
    orders.set_status(&key, OrderStatus::Cancelled).await.unwrap();
    let paid_again = orders
        .set_payment_status(Role::Admin, &key, PaymentStatus::Paid)
        .await
        .unwrap();
    assert_eq!(paid_again.payment_status, PaymentStatus::Paid);
}

#[tokio::test]
async fn dashboard_aggregates_over_the_stored_order_set() {
    let store = common::store().await;
    let orders = OrderService::new(store.orders.clone());

    for (name, price, pay) in [
        ("Lobster Bisque", 45.50, true),
        ("House Salad", 12.00, false),
        ("Duck Confit", 32.75, true),
    ] {
        let item = store.catalog.create(common::priced_item(name, price)).await.unwrap();
        let order = orders.place_order("John Doe", &item).await.unwrap();
        if pay {
            let key = order.key().unwrap();
            orders
                .set_payment_status(Role::Admin, &key, PaymentStatus::Paid)
                .await
                .unwrap();
        }
    }

    let all = orders.all().await.unwrap();
    let stats = DashboardStats::compute(&all);
    assert_eq!(stats.revenue, 78.25);
    assert_eq!(stats.amount_due, 12.00);
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.pending_orders, 3);
}

#[tokio::test]
async fn customer_history_is_newest_first_and_scoped() {
    let store = common::store().await;
    let orders = OrderService::new(store.orders.clone());

    let item = store.catalog.create(common::grilled_salmon()).await.unwrap();
    orders.place_order("Jane Doe", &item).await.unwrap();
    orders.place_order("John Doe", &item).await.unwrap();
    orders.place_order("Jane Doe", &item).await.unwrap();

    let history = orders.history_for("Jane Doe").await.unwrap();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|o| o.customer_name == "Jane Doe"));
    assert!(history[0].created_at >= history[1].created_at);
}
