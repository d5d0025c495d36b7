//! # ins-core
//!
//! Core types, ID generation, and error types for the insight engine.
//!
//! This crate provides the foundational types shared across all `ins-*` crates:
//! - Entity structs (insights, occurrences, status log entries, dependencies)
//! - Status enums with the lifecycle transition table
//! - ID prefix constants and generation helpers
//! - Cross-cutting error types
//! - Response types returned by the service layer

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
