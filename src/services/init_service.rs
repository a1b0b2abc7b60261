use crate::config::SeedConfig;
use crate::database::DbPool;
use crate::database::schema::{
    COUNT_EXISTING_TABLES_SQL, TABLE_NAMES, create_index_statements, create_table_statements,
    sequence_reset_sql,
};
use crate::entities::{order_items, orders, products, reviews, users};
use crate::error::{AppError, AppResult};
use crate::models::{InitOutcome, SeedCounts};
use crate::utils::SeedDataset;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait,
    FromQueryResult, IntoActiveModel, Set, Statement, TransactionTrait,
};

/// Rows per multi-row INSERT, well under the Postgres bind parameter limit.
const INSERT_CHUNK_SIZE: usize = 1_000;

#[derive(Clone)]
pub struct InitService {
    pool: DbPool,
    seed: SeedConfig,
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

impl InitService {
    pub fn new(pool: DbPool, seed: SeedConfig) -> Self {
        Self { pool, seed }
    }

    /// How many of the portal tables exist in the `public` schema.
    pub async fn tables_present(&self) -> AppResult<i64> {
        let row = CountRow::find_by_statement(Statement::from_string(
            self.pool.get_database_backend(),
            COUNT_EXISTING_TABLES_SQL,
        ))
        .one(self.pool.as_ref())
        .await?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Creates and seeds the schema unless every table already exists.
    ///
    /// Everything runs in a single transaction: a failure at any step leaves
    /// the database exactly as it was.
    pub async fn initialize(&self) -> AppResult<InitOutcome> {
        let tables = self.tables_present().await?;
        if tables == TABLE_NAMES.len() as i64 {
            log::info!("Database already initialized ({tables} tables present)");
            return Ok(InitOutcome::AlreadyInitialized { tables });
        }

        let counts = SeedCounts::from(&self.seed);
        counts.validate().map_err(AppError::ConfigError)?;

        let seed = self.seed.rng_seed.unwrap_or_else(rand::random);
        log::info!("Generating sample data with seed {seed}");
        let dataset = SeedDataset::generate(counts, seed, Utc::now().naive_utc());

        let txn = self.pool.begin().await?;

        log::info!("Creating database tables...");
        create_schema(&txn, self.seed.create_indexes).await?;

        log::info!("Inserting test data...");
        let sample_data = insert_dataset(&txn, dataset).await?;

        txn.commit().await?;
        log::info!("Database initialization completed successfully");

        Ok(InitOutcome::Initialized {
            tables_created: TABLE_NAMES.len(),
            sample_data,
        })
    }
}

async fn create_schema(txn: &DatabaseTransaction, with_indexes: bool) -> AppResult<()> {
    let backend = txn.get_database_backend();
    for statement in create_table_statements(backend) {
        txn.execute(backend.build(&statement)).await?;
    }
    if with_indexes {
        for statement in create_index_statements() {
            txn.execute(backend.build(&statement)).await?;
        }
    } else {
        log::warn!("Skipping secondary indexes; analytics queries will scan full tables");
    }
    Ok(())
}

async fn insert_dataset(txn: &DatabaseTransaction, dataset: SeedDataset) -> AppResult<SeedCounts> {
    let counts = dataset.counts();

    insert_in_chunks(txn, dataset.users.into_iter().map(user_row).collect()).await?;
    insert_in_chunks(txn, dataset.products.into_iter().map(product_row).collect()).await?;
    insert_in_chunks(txn, dataset.orders.into_iter().map(order_row).collect()).await?;
    insert_in_chunks(
        txn,
        dataset.order_items.into_iter().map(order_item_row).collect(),
    )
    .await?;
    insert_in_chunks(txn, dataset.reviews.into_iter().map(review_row).collect()).await?;

    // Ids were inserted explicitly; later SERIAL defaults must not collide.
    let backend = txn.get_database_backend();
    for table in TABLE_NAMES {
        txn.query_one(Statement::from_string(backend, sequence_reset_sql(table)))
            .await?;
    }

    Ok(counts)
}

async fn insert_in_chunks<A>(txn: &DatabaseTransaction, rows: Vec<A>) -> AppResult<u64>
where
    A: ActiveModelTrait + Clone + Send + 'static,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let mut inserted = 0;
    for chunk in rows.chunks(INSERT_CHUNK_SIZE) {
        inserted += <A::Entity as EntityTrait>::insert_many(chunk.to_vec())
            .exec_without_returning(txn)
            .await?;
    }
    Ok(inserted)
}

fn user_row(m: users::Model) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(m.id),
        name: Set(m.name),
        email: Set(m.email),
        created_at: Set(m.created_at),
    }
}

fn product_row(m: products::Model) -> products::ActiveModel {
    products::ActiveModel {
        id: Set(m.id),
        name: Set(m.name),
        price: Set(m.price),
        category: Set(m.category),
        description: Set(m.description),
    }
}

fn order_row(m: orders::Model) -> orders::ActiveModel {
    orders::ActiveModel {
        id: Set(m.id),
        user_id: Set(m.user_id),
        order_date: Set(m.order_date),
        status: Set(m.status),
    }
}

fn order_item_row(m: order_items::Model) -> order_items::ActiveModel {
    order_items::ActiveModel {
        id: Set(m.id),
        order_id: Set(m.order_id),
        product_id: Set(m.product_id),
        quantity: Set(m.quantity),
        discount: Set(m.discount),
    }
}

fn review_row(m: reviews::Model) -> reviews::ActiveModel {
    reviews::ActiveModel {
        id: Set(m.id),
        user_id: Set(m.user_id),
        product_id: Set(m.product_id),
        rating: Set(m.rating),
        review_text: Set(m.review_text),
        created_at: Set(m.created_at),
    }
}
