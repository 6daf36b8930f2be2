//! Tests for the revenue rollup

use chrono::{TimeZone, Utc};

use pulse_model::{CustomerId, LineItem, Order, OrderId, OrderStatus, ProductId, SupplierId};

use crate::rollup::{revenue_rollup, RevenueRollup};

fn supplier(id: &str) -> SupplierId {
    SupplierId::new(id).unwrap()
}

fn item(product: &str, price: f64, qty: u32, sup: &str) -> LineItem {
    LineItem::new(
        ProductId::new(product).unwrap(),
        product,
        price,
        qty,
        supplier(sup),
    )
    .unwrap()
}

fn order(id: &str, status: OrderStatus, items: Vec<LineItem>) -> Order {
    Order::new(
        OrderId::new(id).unwrap(),
        CustomerId::new("c1").unwrap(),
        Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap(),
        status,
        items,
    )
    .unwrap()
}

#[test]
fn test_empty_input_is_zero_rollup() {
    let rollup = revenue_rollup(&[], &supplier("s1"));
    assert_eq!(rollup, RevenueRollup::zero());
}

#[test]
fn test_basic_accumulation() {
    let orders = vec![
        order("o1", OrderStatus::Delivered, vec![item("p1", 100.0, 2, "s1")]),
        order("o2", OrderStatus::Delivered, vec![item("p1", 100.0, 1, "s1")]),
    ];

    let rollup = revenue_rollup(&orders, &supplier("s1"));
    assert_eq!(rollup.total_earnings, 300.0);
    assert_eq!(rollup.total_orders, 2);
    assert_eq!(rollup.total_units_sold, 3);
    assert_eq!(rollup.average_order_value, 150.0);
}

#[test]
fn test_multi_supplier_order_counts_once_per_supplier() {
    // One order split across two suppliers
    let orders = vec![order(
        "o1",
        OrderStatus::Delivered,
        vec![
            item("p1", 100.0, 2, "s1"),
            item("p2", 40.0, 5, "s2"),
            item("p3", 10.0, 1, "s1"),
        ],
    )];

    let s1 = revenue_rollup(&orders, &supplier("s1"));
    assert_eq!(s1.total_earnings, 210.0);
    assert_eq!(s1.total_orders, 1);
    assert_eq!(s1.total_units_sold, 3);

    let s2 = revenue_rollup(&orders, &supplier("s2"));
    assert_eq!(s2.total_earnings, 200.0);
    assert_eq!(s2.total_orders, 1);
    assert_eq!(s2.total_units_sold, 5);
}

#[test]
fn test_distinct_orders_not_line_items() {
    let orders = vec![order(
        "o1",
        OrderStatus::Delivered,
        vec![item("p1", 10.0, 1, "s1"), item("p2", 20.0, 1, "s1")],
    )];

    let rollup = revenue_rollup(&orders, &supplier("s1"));
    assert_eq!(rollup.total_orders, 1);
    assert_eq!(rollup.total_earnings, 30.0);
}

#[test]
fn test_non_delivered_orders_excluded() {
    for status in [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ] {
        let orders = vec![order("o1", status, vec![item("p1", 100.0, 2, "s1")])];
        let rollup = revenue_rollup(&orders, &supplier("s1"));
        assert_eq!(rollup, RevenueRollup::zero(), "status {:?}", status);
    }
}

#[test]
fn test_soft_deleted_orders_excluded() {
    let orders = vec![
        order("o1", OrderStatus::Delivered, vec![item("p1", 100.0, 2, "s1")]).with_deleted(true),
    ];
    let rollup = revenue_rollup(&orders, &supplier("s1"));
    assert_eq!(rollup, RevenueRollup::zero());
}

#[test]
fn test_order_without_matching_items_excluded() {
    // s2's rollup over an order that only involves s1
    let orders = vec![order("o1", OrderStatus::Delivered, vec![item("p1", 10.0, 1, "s1")])];
    let rollup = revenue_rollup(&orders, &supplier("s2"));
    assert_eq!(rollup.total_orders, 0);
    assert_eq!(rollup.average_order_value, 0.0);
}

#[test]
fn test_idempotent_over_same_input() {
    let orders = vec![
        order("o1", OrderStatus::Delivered, vec![item("p1", 19.99, 3, "s1")]),
        order("o2", OrderStatus::Delivered, vec![item("p2", 5.5, 7, "s1")]),
    ];
    let a = revenue_rollup(&orders, &supplier("s1"));
    let b = revenue_rollup(&orders, &supplier("s1"));
    assert_eq!(a, b);
}
