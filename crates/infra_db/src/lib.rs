//! Infrastructure Database Layer
//!
//! SQLite persistence for the PA co-pilot using SQLx. The crate follows the
//! repository pattern: domain aggregates go in and come out whole, with the
//! nested JSON payloads (extracted data, evaluations, recommendation)
//! stored as TEXT columns and decoded on read.
//!
//! Queries are runtime-checked; the schema is created programmatically at
//! startup so a fresh database file or an in-memory connection works
//! without external migration tooling.

pub mod error;
pub mod pool;
pub mod repositories;
pub mod schema;
pub mod seed;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use schema::init_schema;
pub use seed::seed_database;
