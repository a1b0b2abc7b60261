use sea_orm::DbErr;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// The underlying failure text, passed through to clients verbatim.
    pub fn detail(&self) -> String {
        match self {
            AppError::DatabaseError(err) => err.to_string(),
            AppError::ConfigError(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_message_is_verbatim() {
        let err = AppError::from(DbErr::Custom("relation \"orders\" does not exist".into()));
        assert!(err.detail().contains("relation \"orders\" does not exist"));
        assert!(err.to_string().starts_with("Database error: "));
    }

    #[test]
    fn test_config_error_detail() {
        let err = AppError::ConfigError("order items require at least one order".into());
        assert_eq!(err.detail(), "order items require at least one order");
    }
}
