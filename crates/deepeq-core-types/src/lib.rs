//! Core types shared across deepeq facilities
//!
//! This crate provides the canonical vocabulary used by the logging
//! facility and by anything that consumes its events:
//!
//! - **Schema constants**: canonical field keys, operation names and event names

pub mod schema;
