//! Storage layer for hubstats
//!
//! Read-only PostgreSQL collector behind per-entity async traits. The
//! service layer talks to [`traits::AnalyticsStore`] only; `PgStore` is the
//! production implementation.

mod error;
mod migrations;
mod pg;
pub mod traits;
mod types;

pub use error::StoreError;
pub use migrations::run_migrations;
pub use pg::PgStore;
pub use traits::AnalyticsStore;
pub use types::TimeRange;
