//! Service layer for hubstats
//!
//! Centralizes the aggregation logic between the HTTP handlers and the
//! storage traits. Everything here is stateless: each call recomputes its
//! aggregate from the store, and nothing is cached between requests.

mod dashboard_service;
mod error;


pub use dashboard_service::DashboardService;
pub use error::ServiceError;
