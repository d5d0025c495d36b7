//! # ins-store
//!
//! In-memory implementation of the insight engine's collaborator ports.
//!
//! The store is seeded from a JSON [`Dataset`] and keeps all state behind one
//! `tokio::sync::RwLock`, so "set status + append log entry" is atomic per
//! insight. Written log entries can be appended to a per-insight JSONL trail
//! and replayed over the dataset on the next start.

pub mod dataset;
pub mod error;
pub mod memory;
pub mod trail;

pub use dataset::Dataset;
pub use error::StoreError;
pub use memory::MemoryStore;
