//! # purifier-domain
//!
//! Pure domain model for the purifier dashboard card.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Read-only registry records: **Entities**, **Devices**, **Areas**
//! - **Roles** and the entity classifier that assigns them
//! - The candidate filter that narrows the device picker
//! - **Visibility sets** for sensors and preset modes
//! - The persisted **card configuration** and outgoing **service calls**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod area;
pub mod candidate;
pub mod card_config;
pub mod classifier;
pub mod device;
pub mod entity;
pub mod preset;
pub mod role;
pub mod sensor;
pub mod service;
pub mod visibility;
