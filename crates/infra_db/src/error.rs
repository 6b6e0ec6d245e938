//! Database layer errors

use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not establish the connection pool
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A stored JSON column could not be decoded
    #[error("Stored document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The requested entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Seed data could not be constructed
    #[error("Seed data invalid: {0}")]
    Seed(String),
}

impl DatabaseError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        DatabaseError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// True if this error is a NotFound
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound { .. })
    }
}
