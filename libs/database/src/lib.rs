//! Database library providing connection, migration and health utilities
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "users_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
