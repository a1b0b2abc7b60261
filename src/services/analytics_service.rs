use crate::config::AnalyticsConfig;
use crate::database::DbPool;
use crate::error::AppResult;
use crate::models::CustomerInsight;
use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, FromQueryResult, Statement};

/// Per-customer lifetime metrics.
///
/// `$1` is the signup cutoff (exclusive), `$2` the row limit. Each metric
/// family is aggregated in its own CTE and joined back per user, so joins
/// never multiply rows across families. Category spend is ranked per user
/// by spend descending, then category name ascending, so ties resolve to
/// the lexicographically lowest name.
pub const CUSTOMER_INSIGHTS_SQL: &str = r#"
WITH eligible_users AS (
    SELECT u.id, u.name, u.email
    FROM users u
    WHERE u.created_at > $1
),
order_stats AS (
    SELECT
        o.user_id,
        COUNT(DISTINCT o.id)::bigint AS total_orders,
        MIN(o.order_date) AS first_purchase,
        MAX(o.order_date) AS last_purchase,
        COUNT(DISTINCT date_trunc('month', o.order_date))::bigint AS active_months
    FROM orders o
    JOIN eligible_users eu ON eu.id = o.user_id
    GROUP BY o.user_id
),
line_items AS (
    SELECT
        o.user_id,
        p.category,
        oi.quantity * p.price AS gross_amount,
        oi.quantity * p.price * (1 - oi.discount / 100.0) AS net_amount
    FROM orders o
    JOIN eligible_users eu ON eu.id = o.user_id
    JOIN order_items oi ON oi.order_id = o.id
    JOIN products p ON p.id = oi.product_id
),
spend_stats AS (
    SELECT
        li.user_id,
        ROUND(SUM(li.net_amount), 2) AS lifetime_value,
        ROUND(AVG(li.gross_amount), 2) AS avg_order_value,
        COUNT(DISTINCT li.category)::bigint AS categories_shopped,
        string_agg(DISTINCT li.category::text, ', ' ORDER BY li.category::text) AS all_categories
    FROM line_items li
    GROUP BY li.user_id
),
category_spend AS (
    SELECT
        li.user_id,
        li.category,
        SUM(li.net_amount) AS category_total
    FROM line_items li
    GROUP BY li.user_id, li.category
),
ranked_categories AS (
    SELECT
        cs.user_id,
        cs.category,
        ROUND(cs.category_total, 2) AS category_total,
        ROW_NUMBER() OVER (
            PARTITION BY cs.user_id
            ORDER BY cs.category_total DESC, cs.category ASC
        ) AS category_rank
    FROM category_spend cs
),
review_stats AS (
    SELECT
        r.user_id,
        COUNT(*)::bigint AS review_count,
        AVG(r.rating)::float8 AS avg_rating,
        COUNT(DISTINCT r.product_id)::bigint AS products_reviewed
    FROM reviews r
    JOIN eligible_users eu ON eu.id = r.user_id
    GROUP BY r.user_id
),
order_gaps AS (
    SELECT
        later.user_id,
        AVG(EXTRACT(DAY FROM (later.order_date - earlier.order_date)))::float8
            AS avg_days_between_orders
    FROM orders earlier
    JOIN orders later
        ON later.user_id = earlier.user_id
       AND earlier.order_date < later.order_date
    JOIN eligible_users eu ON eu.id = later.user_id
    GROUP BY later.user_id
)
SELECT
    eu.id,
    eu.name,
    eu.email,
    os.total_orders,
    ss.lifetime_value,
    ss.avg_order_value,
    ss.categories_shopped,
    os.first_purchase,
    os.last_purchase,
    ss.all_categories,
    rs.review_count,
    rs.avg_rating,
    rs.products_reviewed,
    og.avg_days_between_orders,
    os.active_months,
    top_cat.category AS top_category,
    top_cat.category_total AS top_category_spend,
    next_cat.category AS second_category,
    next_cat.category_total AS second_category_spend
FROM eligible_users eu
JOIN order_stats os ON os.user_id = eu.id
LEFT JOIN spend_stats ss ON ss.user_id = eu.id
LEFT JOIN ranked_categories top_cat
    ON top_cat.user_id = eu.id AND top_cat.category_rank = 1
LEFT JOIN ranked_categories next_cat
    ON next_cat.user_id = eu.id AND next_cat.category_rank = 2
LEFT JOIN review_stats rs ON rs.user_id = eu.id
LEFT JOIN order_gaps og ON og.user_id = eu.id
WHERE os.total_orders > 0
ORDER BY ss.lifetime_value DESC NULLS LAST, os.total_orders DESC, eu.id ASC
LIMIT $2
"#;

#[derive(Clone)]
pub struct AnalyticsService {
    pool: DbPool,
    created_after: NaiveDate,
    limit: u64,
}

impl AnalyticsService {
    pub fn new(pool: DbPool, config: &AnalyticsConfig) -> Self {
        Self {
            pool,
            created_after: config.created_after,
            limit: config.limit,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Runs the customer analytics query. Execution time is deliberately
    /// unbounded.
    pub async fn customer_insights(&self) -> AppResult<Vec<CustomerInsight>> {
        let insights = CustomerInsight::find_by_statement(self.statement())
            .all(self.pool.as_ref())
            .await?;
        Ok(insights)
    }

    fn statement(&self) -> Statement {
        let cutoff = self.created_after.and_hms_opt(0, 0, 0).unwrap_or_default();
        // Postgres LIMIT is a signed bigint.
        let limit = i64::try_from(self.limit).unwrap_or(i64::MAX);
        Statement::from_sql_and_values(
            self.pool.get_database_backend(),
            CUSTOMER_INSIGHTS_SQL,
            [cutoff.into(), limit.into()],
        )
    }
}
