pub mod customers;
pub mod health;
pub mod init_db;

pub use customers::customers_config;
pub use health::health_config;
pub use init_db::init_db_config;
