use crate::entities::{order_items, orders, products, reviews, users};
use sea_orm::sea_query::{Index, IndexCreateStatement, TableCreateStatement};
use sea_orm::{DbBackend, Schema};

/// Tables owned by the portal, in foreign-key dependency order.
pub const TABLE_NAMES: [&str; 5] = ["users", "products", "orders", "order_items", "reviews"];

pub const COUNT_EXISTING_TABLES_SQL: &str = r#"
    SELECT COUNT(*)::bigint AS count
    FROM information_schema.tables
    WHERE table_schema = 'public'
      AND table_name IN ('users', 'products', 'orders', 'order_items', 'reviews')
"#;

/// `CREATE TABLE IF NOT EXISTS` for every entity, foreign keys included.
pub fn create_table_statements(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);
    let mut statements = vec![
        schema.create_table_from_entity(users::Entity),
        schema.create_table_from_entity(products::Entity),
        schema.create_table_from_entity(orders::Entity),
        schema.create_table_from_entity(order_items::Entity),
        schema.create_table_from_entity(reviews::Entity),
    ];
    for statement in statements.iter_mut() {
        statement.if_not_exists();
    }
    statements
}

/// Secondary indexes supporting the analytics query.
pub fn create_index_statements() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .if_not_exists()
            .name("idx_users_created_at")
            .table(users::Entity)
            .col(users::Column::CreatedAt)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_orders_user_id")
            .table(orders::Entity)
            .col(orders::Column::UserId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_orders_order_date")
            .table(orders::Entity)
            .col(orders::Column::OrderDate)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_order_items_order_id")
            .table(order_items::Entity)
            .col(order_items::Column::OrderId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_order_items_product_id")
            .table(order_items::Entity)
            .col(order_items::Column::ProductId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_reviews_user_id")
            .table(reviews::Entity)
            .col(reviews::Column::UserId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_products_category")
            .table(products::Entity)
            .col(products::Column::Category)
            .to_owned(),
    ]
}

/// Moves a SERIAL sequence past explicitly inserted ids.
pub fn sequence_reset_sql(table: &str) -> String {
    format!(
        "SELECT setval(pg_get_serial_sequence('{table}', 'id'), COALESCE(MAX(id), 1), MAX(id) IS NOT NULL) FROM {table}"
    )
}
