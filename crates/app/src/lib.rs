//! # purifier-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Registry`: list devices, areas and entity states
//!   - `CommandDispatcher`: send service calls to the host
//! - Define **driving/inbound** use-cases:
//!   - `DiscoveryService`: load a consistent [`snapshot::RegistrySnapshot`]
//!   - `CardEditor`: draft config, device selection, visibility toggles
//!   - `CardService`: power, preset-mode and child-lock commands
//! - Build the render-ready [`view::CardView`]
//!
//! ## Dependency rule
//! Depends on `purifier-domain` only. Never imports adapter crates. Adapters
//! depend on *this* crate, not the reverse.

pub mod ports;
pub mod request;
pub mod services;
pub mod snapshot;
pub mod view;
