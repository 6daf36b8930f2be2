//! Top-product ranking
//!
//! Revenue math identical to the rollup, grouped by product instead of summed
//! globally. Ties on revenue break by ascending product id so repeated calls
//! on the same data render identically.

use std::collections::HashMap;

use serde::Serialize;

use pulse_model::{Order, OrderStatus, ProductId, SupplierId};

/// One ranked product
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProductEntry {
    pub product_id: ProductId,
    /// Name as snapshotted on the line item
    pub name: String,
    /// Cumulative delivered revenue
    pub revenue: f64,
    /// Cumulative units delivered
    pub units_sold: u64,
}

/// Rank the supplier's products by delivered revenue, truncated to `limit`
///
/// Products without revenue never appear; the result is not padded to
/// `limit`.
pub fn top_products(orders: &[Order], supplier: &SupplierId, limit: usize) -> Vec<TopProductEntry> {
    let mut by_product: HashMap<ProductId, TopProductEntry> = HashMap::new();

    for order in orders {
        if order.deleted || order.status != OrderStatus::Delivered {
            continue;
        }
        for item in order.items_for_supplier(supplier) {
            let entry = by_product
                .entry(item.product_id.clone())
                .or_insert_with(|| TopProductEntry {
                    product_id: item.product_id.clone(),
                    name: item.product_name.clone(),
                    revenue: 0.0,
                    units_sold: 0,
                });
            entry.revenue += item.line_total();
            entry.units_sold += u64::from(item.quantity);
        }
    }

    let mut ranked: Vec<TopProductEntry> = by_product
        .into_values()
        .filter(|e| e.revenue > 0.0)
        .collect();

    ranked.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    ranked.truncate(limit);
    ranked
}
