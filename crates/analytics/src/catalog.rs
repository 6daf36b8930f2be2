//! Catalog stats
//!
//! Product count and the review-count-weighted average rating. The weighting
//! means a product with 200 reviews moves the supplier's rating more than one
//! with 2, instead of each product counting equally.

use serde::Serialize;

use pulse_model::Product;

/// Catalog-level counters for one supplier
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Active (non-deleted) products
    pub total_products: u64,
    /// `Σ(rating × reviews) / Σ(reviews)`, 0 when nothing is rated.
    /// Unrounded; the dashboard rounds to one decimal at assembly.
    pub average_rating: f64,
}

/// Compute catalog stats over a supplier's products
pub fn catalog_stats(products: &[Product]) -> CatalogStats {
    let mut total_products = 0_u64;
    let mut weighted_sum = 0.0_f64;
    let mut review_total = 0_u64;

    for product in products {
        if product.deleted {
            continue;
        }
        total_products += 1;
        if product.review_count > 0 {
            weighted_sum += product.average_rating * f64::from(product.review_count);
            review_total += u64::from(product.review_count);
        }
    }

    let average_rating = if review_total > 0 {
        weighted_sum / review_total as f64
    } else {
        0.0
    };

    CatalogStats {
        total_products,
        average_rating,
    }
}

/// Round a rating to one decimal place
pub fn round_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_model::{ProductId, SupplierId};

    fn product(id: &str, rating: f64, reviews: u32) -> Product {
        Product::new(
            ProductId::new(id).unwrap(),
            SupplierId::new("s1").unwrap(),
            id,
            "steel",
            10.0,
            5,
        )
        .unwrap()
        .with_rating(rating, reviews)
    }

    #[test]
    fn test_weighted_average_rating() {
        // 4.0 over 10 reviews and 5.0 over 30 reviews -> 4.75, not 4.5
        let products = vec![product("p1", 4.0, 10), product("p2", 5.0, 30)];
        let stats = catalog_stats(&products);
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.average_rating, 4.75);
    }

    #[test]
    fn test_unrated_products_excluded_from_rating() {
        let products = vec![product("p1", 0.0, 0), product("p2", 3.0, 4)];
        let stats = catalog_stats(&products);
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.average_rating, 3.0);
    }

    #[test]
    fn test_no_reviews_defaults_to_zero() {
        let products = vec![product("p1", 0.0, 0)];
        let stats = catalog_stats(&products);
        assert_eq!(stats.average_rating, 0.0);
    }

    #[test]
    fn test_deleted_products_excluded() {
        let products = vec![product("p1", 5.0, 10).with_deleted(true)];
        let stats = catalog_stats(&products);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.average_rating, 0.0);
    }

    #[test]
    fn test_round_rating() {
        assert_eq!(round_rating(4.749), 4.7);
        assert_eq!(round_rating(4.75), 4.8);
        assert_eq!(round_rating(0.0), 0.0);
    }
}
