//! # purifier-adapter-registry-json
//!
//! Registry adapter reading a host snapshot from JSON.
//!
//! ## Responsibilities
//! - Decode the host's wire format (`devices`, `areas`, `states`) into domain
//!   records, skipping rows that fail validation
//! - Implement the `Registry` port over the decoded snapshot
//! - Provide a `LoggingDispatcher` that records service calls instead of
//!   sending them
//!
//! ## Dependency rule
//! Depends on `purifier-app` (for port traits) and `purifier-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod dispatcher;
mod error;
mod registry;
mod wire;

pub use dispatcher::LoggingDispatcher;
pub use error::SnapshotError;
pub use registry::JsonSnapshotRegistry;
