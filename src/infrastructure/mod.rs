//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - PostgreSQL connection pool and transactions
//! - Database repositories
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
