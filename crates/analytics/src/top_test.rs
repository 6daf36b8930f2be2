//! Tests for top-product ranking

use chrono::{TimeZone, Utc};

use pulse_model::{CustomerId, LineItem, Order, OrderId, OrderStatus, ProductId, SupplierId};

use crate::top::top_products;

fn supplier(id: &str) -> SupplierId {
    SupplierId::new(id).unwrap()
}

fn item(product: &str, price: f64, qty: u32) -> LineItem {
    LineItem::new(
        ProductId::new(product).unwrap(),
        product,
        price,
        qty,
        supplier("s1"),
    )
    .unwrap()
}

fn delivered(id: &str, items: Vec<LineItem>) -> Order {
    Order::new(
        OrderId::new(id).unwrap(),
        CustomerId::new("c1").unwrap(),
        Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap(),
        OrderStatus::Delivered,
        items,
    )
    .unwrap()
}

#[test]
fn test_empty_input_empty_ranking() {
    assert!(top_products(&[], &supplier("s1"), 5).is_empty());
}

#[test]
fn test_ranked_descending_by_revenue() {
    let orders = vec![
        delivered("o1", vec![item("p1", 10.0, 2)]),  // 20
        delivered("o2", vec![item("p2", 50.0, 3)]),  // 150
        delivered("o3", vec![item("p3", 30.0, 1)]),  // 30
    ];

    let top = top_products(&orders, &supplier("s1"), 5);
    let names: Vec<&str> = top.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["p2", "p3", "p1"]);
    assert!(top.windows(2).all(|w| w[0].revenue >= w[1].revenue));
}

#[test]
fn test_revenue_accumulates_across_orders() {
    let orders = vec![
        delivered("o1", vec![item("p1", 100.0, 2)]),
        delivered("o2", vec![item("p1", 100.0, 1)]),
    ];

    let top = top_products(&orders, &supplier("s1"), 5);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].revenue, 300.0);
    assert_eq!(top[0].units_sold, 3);
}

#[test]
fn test_truncates_to_limit() {
    let orders = vec![
        delivered("o1", vec![item("p1", 1.0, 1)]),
        delivered("o2", vec![item("p2", 2.0, 1)]),
        delivered("o3", vec![item("p3", 3.0, 1)]),
        delivered("o4", vec![item("p4", 4.0, 1)]),
    ];

    let top = top_products(&orders, &supplier("s1"), 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "p4");
    assert_eq!(top[1].name, "p3");
}

#[test]
fn test_never_pads_below_limit() {
    let orders = vec![delivered("o1", vec![item("p1", 5.0, 1)])];
    let top = top_products(&orders, &supplier("s1"), 5);
    assert_eq!(top.len(), 1);
}

#[test]
fn test_no_duplicate_product_ids() {
    let orders = vec![delivered(
        "o1",
        vec![item("p1", 10.0, 1), item("p1", 10.0, 2), item("p2", 1.0, 1)],
    )];

    let top = top_products(&orders, &supplier("s1"), 5);
    let mut ids: Vec<&str> = top.iter().map(|e| e.product_id.as_str()).collect();
    let total = ids.len();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_tie_breaks_by_product_id() {
    let orders = vec![
        delivered("o1", vec![item("p-b", 10.0, 1)]),
        delivered("o2", vec![item("p-a", 10.0, 1)]),
        delivered("o3", vec![item("p-c", 10.0, 1)]),
    ];

    // Equal revenue everywhere: order must be the stable id ordering
    let first = top_products(&orders, &supplier("s1"), 5);
    let names: Vec<&str> = first.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["p-a", "p-b", "p-c"]);

    // And identical across repeated calls
    let second = top_products(&orders, &supplier("s1"), 5);
    assert_eq!(first, second);
}

#[test]
fn test_other_suppliers_items_excluded() {
    let other = LineItem::new(
        ProductId::new("px").unwrap(),
        "px",
        1000.0,
        1,
        supplier("s2"),
    )
    .unwrap();
    let orders = vec![delivered("o1", vec![item("p1", 10.0, 1), other])];

    let top = top_products(&orders, &supplier("s1"), 5);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "p1");
}

#[test]
fn test_zero_revenue_products_omitted() {
    let orders = vec![delivered("o1", vec![item("p-free", 0.0, 3), item("p1", 2.0, 1)])];
    let top = top_products(&orders, &supplier("s1"), 5);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "p1");
}
