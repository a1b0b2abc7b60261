use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifetime metrics for one customer. Aggregates with no underlying rows
/// are `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromQueryResult, ToSchema)]
pub struct CustomerInsight {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub total_orders: i64,
    /// Σ quantity × price × (1 − discount/100), rounded to cents.
    #[schema(value_type = Option<String>, example = "1523.40")]
    pub lifetime_value: Option<Decimal>,
    #[schema(value_type = Option<String>, example = "210.75")]
    pub avg_order_value: Option<Decimal>,
    pub categories_shopped: Option<i64>,
    pub first_purchase: Option<NaiveDateTime>,
    pub last_purchase: Option<NaiveDateTime>,
    #[schema(example = "Books, Electronics, Toys")]
    pub all_categories: Option<String>,
    pub review_count: Option<i64>,
    pub avg_rating: Option<f64>,
    pub products_reviewed: Option<i64>,
    pub avg_days_between_orders: Option<f64>,
    pub active_months: Option<i64>,
    pub top_category: Option<String>,
    #[schema(value_type = Option<String>)]
    pub top_category_spend: Option<Decimal>,
    pub second_category: Option<String>,
    #[schema(value_type = Option<String>)]
    pub second_category_spend: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomersResponse {
    pub message: String,
    /// Always equal to `data.len()`.
    pub count: usize,
    pub data: Vec<CustomerInsight>,
    #[schema(example = "1532ms")]
    pub query_time: String,
}

impl CustomersResponse {
    pub fn new(data: Vec<CustomerInsight>, query_time: String) -> Self {
        Self {
            message: "Customer analytics completed".to_string(),
            count: data.len(),
            data,
            query_time,
        }
    }
}
