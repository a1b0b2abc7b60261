pub mod order_items;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod users;
