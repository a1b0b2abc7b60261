pub mod analytics_service;
pub mod init_service;

pub use analytics_service::*;
pub use init_service::*;
