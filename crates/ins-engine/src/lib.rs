//! # ins-engine
//!
//! The insight lifecycle and diagnostics engine.
//!
//! Four pure, synchronous components do the reasoning:
//! - [`guard`] decides the outcome of a requested status change
//! - [`history`] derives "previously resolved / ignored" analytics from the status log
//! - [`timeline`] turns occurrences into fixed-granularity faulty / not-faulty spans
//! - [`diagnostics`] walks the dependency graph and builds per-dependent timelines
//!
//! [`service::InsightService`] resolves collaborator facts through the async
//! [`ports`], invokes the components, and persists the single derived status
//! log entry.

pub mod diagnostics;
pub mod guard;
pub mod history;
pub mod interval;
pub mod ports;
pub mod service;
pub mod timeline;

pub use diagnostics::{DependencyGraph, WalkLimits};
pub use guard::{Decision, TransitionInput};
pub use ports::{InsightStore, TicketStatistics, WorkOrderLookup};
pub use service::{InsightService, ServiceOptions};
pub use timeline::OccurrenceTimeline;
