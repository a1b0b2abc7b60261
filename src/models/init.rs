use crate::config::SeedConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of rows per table in a seeded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedCounts {
    pub users: u32,
    pub products: u32,
    pub orders: u32,
    pub order_items: u32,
    pub reviews: u32,
}

impl SeedCounts {
    /// Rejects counts that would leave child rows without a parent to reference,
    /// or that would not fit in an `INTEGER` id.
    pub fn validate(&self) -> Result<(), String> {
        let tables = [
            ("users", self.users),
            ("products", self.products),
            ("orders", self.orders),
            ("order_items", self.order_items),
            ("reviews", self.reviews),
        ];
        if let Some((table, count)) = tables.iter().find(|(_, n)| i32::try_from(*n).is_err()) {
            return Err(format!("{table} count {count} exceeds the maximum id {}", i32::MAX));
        }
        if self.users == 0 && (self.orders > 0 || self.reviews > 0) {
            return Err("orders and reviews require at least one user".to_string());
        }
        if self.products == 0 && (self.order_items > 0 || self.reviews > 0) {
            return Err("order items and reviews require at least one product".to_string());
        }
        if self.orders == 0 && self.order_items > 0 {
            return Err("order items require at least one order".to_string());
        }
        Ok(())
    }
}

impl From<&SeedConfig> for SeedCounts {
    fn from(config: &SeedConfig) -> Self {
        Self {
            users: config.users,
            products: config.products,
            orders: config.orders,
            order_items: config.order_items,
            reviews: config.reviews,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    AlreadyInitialized { tables: i64 },
    Initialized { tables_created: usize, sample_data: SeedCounts },
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum InitResponse {
    Created {
        message: String,
        tables_created: usize,
        sample_data: SeedCounts,
        #[schema(example = "success")]
        status: String,
    },
    AlreadyExists {
        message: String,
        tables: i64,
        #[schema(example = "already_exists")]
        status: String,
    },
}

impl From<InitOutcome> for InitResponse {
    fn from(outcome: InitOutcome) -> Self {
        match outcome {
            InitOutcome::AlreadyInitialized { tables } => InitResponse::AlreadyExists {
                message: "Database already initialized".to_string(),
                tables,
                status: "already_exists".to_string(),
            },
            InitOutcome::Initialized {
                tables_created,
                sample_data,
            } => InitResponse::Created {
                message: "Database initialized successfully".to_string(),
                tables_created,
                sample_data,
                status: "success".to_string(),
            },
        }
    }
}
