//! service-core: shared HTTP infrastructure for the order service.
pub mod error;
pub mod middleware;
pub mod observability;
