pub mod connection;
pub mod schema;

pub use connection::{DbPool, create_pool, ping};
