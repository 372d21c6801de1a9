//! Entity: a read-only row of the host's entity state list.
//!
//! An entity represents a single observable/controllable aspect of a device
//! (the purifier fan, its PM2.5 sensor, its child-lock switch, …). The core
//! never owns or mutates entities; it only reads snapshots of them.

mod attribute_value;
mod state;

pub use attribute_value::AttributeValue;
pub use state::EntityState;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PurifierError, ValidationError};
use crate::id::{DeviceId, EntityId};
use crate::time::{Timestamp, epoch};

/// Snapshot of one entity and its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_id: EntityId,
    pub device_id: Option<DeviceId>,
    pub state: EntityState,
    pub attributes: HashMap<String, AttributeValue>,
    pub last_changed: Timestamp,
    pub last_updated: Timestamp,
}

impl Entity {
    /// Create a builder for constructing an [`Entity`].
    #[must_use]
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PurifierError::Validation`] when `entity_id` is empty.
    pub fn validate(&self) -> Result<(), PurifierError> {
        if self.entity_id.as_str().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        Ok(())
    }

    /// Domain prefix of the entity id.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.entity_id.domain()
    }

    #[must_use]
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }

    /// String attribute lookup.
    #[must_use]
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.get_attribute(key).and_then(AttributeValue::as_str)
    }

    /// Human name from `friendly_name`.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.attribute_str("friendly_name")
    }

    /// Whether the entity belongs to `device_id`.
    #[must_use]
    pub fn belongs_to(&self, device_id: &DeviceId) -> bool {
        self.device_id.as_ref() == Some(device_id)
    }
}

/// Step-by-step builder for [`Entity`].
#[derive(Debug, Default)]
pub struct EntityBuilder {
    entity_id: Option<EntityId>,
    device_id: Option<DeviceId>,
    state: EntityState,
    attributes: HashMap<String, AttributeValue>,
    last_changed: Option<Timestamp>,
    last_updated: Option<Timestamp>,
}

impl EntityBuilder {
    #[must_use]
    pub fn entity_id(mut self, entity_id: impl Into<EntityId>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    #[must_use]
    pub fn device_id(mut self, device_id: impl Into<DeviceId>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<EntityState>) -> Self {
        self.state = state.into();
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn friendly_name(self, name: impl Into<String>) -> Self {
        self.attribute("friendly_name", AttributeValue::String(name.into()))
    }

    #[must_use]
    pub fn last_changed(mut self, ts: Timestamp) -> Self {
        self.last_changed = Some(ts);
        self
    }

    #[must_use]
    pub fn last_updated(mut self, ts: Timestamp) -> Self {
        self.last_updated = Some(ts);
        self
    }

    /// Consume the builder, validate, and return an [`Entity`].
    ///
    /// Missing timestamps default to the epoch; `last_updated` defaults to
    /// `last_changed` when only the latter is given.
    ///
    /// # Errors
    ///
    /// Returns [`PurifierError::Validation`] if `entity_id` is missing or empty.
    pub fn build(self) -> Result<Entity, PurifierError> {
        let last_changed = self.last_changed.unwrap_or_else(epoch);
        let entity = Entity {
            entity_id: self.entity_id.unwrap_or_else(|| EntityId::new("")),
            device_id: self.device_id,
            state: self.state,
            attributes: self.attributes,
            last_changed,
            last_updated: self.last_updated.unwrap_or(last_changed),
        };
        entity.validate()?;
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_entity_with_attributes() {
        let entity = Entity::builder()
            .entity_id("fan.bedroom")
            .device_id("dev1")
            .state("on")
            .friendly_name("Bedroom Purifier")
            .build()
            .unwrap();

        assert_eq!(entity.domain(), "fan");
        assert_eq!(entity.friendly_name(), Some("Bedroom Purifier"));
        assert!(entity.state.is_on());
        assert!(entity.belongs_to(&DeviceId::new("dev1")));
    }

    #[test]
    fn should_return_validation_error_when_id_missing() {
        let result = Entity::builder().build();
        assert!(matches!(
            result,
            Err(PurifierError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_not_belong_to_any_device_without_device_id() {
        let entity = Entity::builder().entity_id("sensor.x").build().unwrap();
        assert!(!entity.belongs_to(&DeviceId::new("dev1")));
    }

    #[test]
    fn should_default_last_updated_to_last_changed() {
        let ts = crate::time::now();
        let entity = Entity::builder()
            .entity_id("fan.x")
            .last_changed(ts)
            .build()
            .unwrap();
        assert_eq!(entity.last_updated, ts);
    }
}
