//! Infrastructure layer: relational storage for the catalog and its configuration.

pub mod config;
pub mod db;

pub use config::{ConfigError, DatabaseConfig};
pub use db::{PostgresProductRepository, SqliteProductRepository};
