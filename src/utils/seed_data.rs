use crate::entities::{order_items, orders, products, reviews, users};
use crate::models::SeedCounts;
use chrono::{Duration, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Product categories, indexed by `product_id % 10`.
pub const CATEGORIES: [&str; 10] = [
    "Electronics",
    "Clothing",
    "Home",
    "Books",
    "Sports",
    "Toys",
    "Food",
    "Beauty",
    "Garden",
    "Office",
];

pub const ORDER_STATUSES: [&str; 4] = ["pending", "completed", "shipped", "delivered"];

const ORDER_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Highest id for a table of `count` rows. Ids are `i32`; larger counts
/// are rejected by [`SeedCounts::validate`].
fn max_id(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

pub fn category_for(product_id: i32) -> &'static str {
    CATEGORIES[product_id.rem_euclid(CATEGORIES.len() as i32) as usize]
}

/// A complete synthetic dataset. Row ids are 1-based and contiguous, so
/// every foreign key points at a row generated alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedDataset {
    pub users: Vec<users::Model>,
    pub products: Vec<products::Model>,
    pub orders: Vec<orders::Model>,
    pub order_items: Vec<order_items::Model>,
    pub reviews: Vec<reviews::Model>,
}

impl SeedDataset {
    /// Generates the dataset from a seeded PRNG. Equal inputs give equal output.
    ///
    /// Dependent rows are skipped when a referenced table is empty; callers
    /// should reject such counts with [`SeedCounts::validate`] first.
    pub fn generate(counts: SeedCounts, seed: u64, anchor: NaiveDateTime) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let users = (1..=max_id(counts.users))
            .map(|i| users::Model {
                id: i,
                name: format!("Customer {i}"),
                email: format!("customer{i}@example.com"),
                created_at: anchor,
            })
            .collect();

        let products = (1..=max_id(counts.products))
            .map(|i| products::Model {
                id: i,
                name: format!("Product {i}"),
                price: Decimal::new(rng.gen_range(1_000..51_000), 2),
                category: category_for(i).to_string(),
                description: Some(format!("Description for product {i}")),
            })
            .collect();

        let orders = if counts.users == 0 {
            Vec::new()
        } else {
            (1..=max_id(counts.orders))
                .map(|i| orders::Model {
                    id: i,
                    user_id: rng.gen_range(1..=max_id(counts.users)),
                    order_date: anchor - Duration::seconds(rng.gen_range(0..ORDER_WINDOW_SECS)),
                    status: ORDER_STATUSES[rng.gen_range(0..ORDER_STATUSES.len())].to_string(),
                })
                .collect()
        };

        let order_items = if counts.users == 0 || counts.orders == 0 || counts.products == 0 {
            Vec::new()
        } else {
            (1..=max_id(counts.order_items))
                .map(|i| order_items::Model {
                    id: i,
                    order_id: rng.gen_range(1..=max_id(counts.orders)),
                    product_id: rng.gen_range(1..=max_id(counts.products)),
                    quantity: rng.gen_range(1..=10),
                    discount: Decimal::new(rng.gen_range(0..2_000), 2),
                })
                .collect()
        };

        let reviews = if counts.users == 0 || counts.products == 0 {
            Vec::new()
        } else {
            (1..=max_id(counts.reviews))
                .map(|i| reviews::Model {
                    id: i,
                    user_id: rng.gen_range(1..=max_id(counts.users)),
                    product_id: rng.gen_range(1..=max_id(counts.products)),
                    rating: rng.gen_range(1..=5),
                    review_text: Some(format!("Review text for product {i}")),
                    created_at: anchor,
                })
                .collect()
        };

        Self {
            users,
            products,
            orders,
            order_items,
            reviews,
        }
    }

    pub fn counts(&self) -> SeedCounts {
        SeedCounts {
            users: self.users.len() as u32,
            products: self.products.len() as u32,
            orders: self.orders.len() as u32,
            order_items: self.order_items.len() as u32,
            reviews: self.reviews.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn anchor() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn small_counts() -> SeedCounts {
        SeedCounts {
            users: 50,
            products: 40,
            orders: 200,
            order_items: 400,
            reviews: 80,
        }
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = SeedDataset::generate(small_counts(), 42, anchor());
        let b = SeedDataset::generate(small_counts(), 42, anchor());
        assert_eq!(a, b);

        let c = SeedDataset::generate(small_counts(), 43, anchor());
        assert_ne!(a.order_items, c.order_items);
    }

    #[test]
    fn test_max_id_saturates() {
        assert_eq!(max_id(0), 0);
        assert_eq!(max_id(1_000), 1_000);
        assert_eq!(max_id(u32::MAX), i32::MAX);
    }

    #[test]
    fn test_counts_match_request() {
        let dataset = SeedDataset::generate(small_counts(), 7, anchor());
        assert_eq!(dataset.counts(), small_counts());
    }

    #[test]
    fn test_categories_follow_product_id() {
        assert_eq!(category_for(10), "Electronics");
        assert_eq!(category_for(1), "Clothing");
        assert_eq!(category_for(23), "Books");
        assert_eq!(category_for(999), "Office");

        let dataset = SeedDataset::generate(small_counts(), 7, anchor());
        for product in &dataset.products {
            assert_eq!(product.category, category_for(product.id));
        }
    }

    #[test]
    fn test_values_within_ranges() {
        let dataset = SeedDataset::generate(small_counts(), 99, anchor());
        let window_start = anchor() - Duration::days(365);

        for product in &dataset.products {
            assert!(product.price >= Decimal::new(1_000, 2));
            assert!(product.price < Decimal::new(51_000, 2));
        }
        for order in &dataset.orders {
            assert!((1..=50).contains(&order.user_id));
            assert!(order.order_date <= anchor() && order.order_date > window_start);
            assert!(ORDER_STATUSES.contains(&order.status.as_str()));
        }
        for item in &dataset.order_items {
            assert!((1..=200).contains(&item.order_id));
            assert!((1..=40).contains(&item.product_id));
            assert!((1..=10).contains(&item.quantity));
            assert!(item.discount >= Decimal::ZERO && item.discount < Decimal::new(2_000, 2));
        }
        for review in &dataset.reviews {
            assert!((1..=5).contains(&review.rating));
            assert!((1..=50).contains(&review.user_id));
        }
    }

    #[test]
    fn test_dependents_skipped_without_parents() {
        let counts = SeedCounts {
            users: 0,
            ..small_counts()
        };
        let dataset = SeedDataset::generate(counts, 1, anchor());
        assert!(dataset.orders.is_empty());
        assert!(dataset.order_items.is_empty());
        assert!(dataset.reviews.is_empty());
        assert_eq!(dataset.products.len(), 40);
    }
}
