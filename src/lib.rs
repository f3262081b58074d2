//! Sponsorship dashboard state library crate.
//!
//! # Purpose
//! Exposes the domain model, storage implementations, seed data, CSV import,
//! and configuration for use by the demo binary and tests.
//!
//! # Notes
//! Module boundaries mirror the dashboard's data collections for clarity.
pub mod config;
pub mod import;
pub mod model;
pub mod observability;
pub mod seed;
pub mod store;
