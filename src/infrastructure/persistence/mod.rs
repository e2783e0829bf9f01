//! PostgreSQL repository implementations and schema provisioning.
//!
//! - [`schema`] - startup database/table provisioning
//! - [`PgCustomerRepository`] - customer storage and lookup
//! - [`PgUsageRepository`] - reading storage and lookup

pub mod pg_customer_repository;
pub mod pg_usage_repository;
pub mod schema;

pub use pg_customer_repository::PgCustomerRepository;
pub use pg_usage_repository::PgUsageRepository;
