pub mod common;
pub mod customer;
pub mod health;
pub mod init;

pub use common::*;
pub use customer::*;
pub use health::*;
pub use init::*;
