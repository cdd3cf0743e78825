//! Parsing services.

pub mod query;
