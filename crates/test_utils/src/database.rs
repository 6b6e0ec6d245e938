//! Database Test Utilities
//!
//! In-memory SQLite helpers for repository and API integration tests.

use infra_db::{create_pool, init_schema, seed_database, DatabaseConfig, DatabaseError, DatabasePool};

/// Creates an in-memory SQLite pool with the schema initialized.
///
/// The pool is capped at a single connection: each connection to
/// `sqlite::memory:` gets its own database, so a larger pool would hand
/// out empty databases.
pub async fn memory_pool() -> Result<DatabasePool, DatabaseError> {
    let pool = create_pool(DatabaseConfig::new("sqlite::memory:").max_connections(1)).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Creates an in-memory pool with the schema initialized and the standard
/// demo policies and sample cases seeded.
pub async fn seeded_pool() -> Result<DatabasePool, DatabaseError> {
    let pool = memory_pool().await?;
    seed_database(&pool).await?;
    Ok(pool)
}
