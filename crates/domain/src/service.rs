//! Service: a named command sent to the host for an entity.
//!
//! Examples: `fan.toggle`, `fan.set_preset_mode`, `switch.toggle`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::EntityId;

/// A fire-and-forget command targeting one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub entity_id: EntityId,
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl ServiceCall {
    #[must_use]
    pub fn new(
        domain: impl Into<String>,
        service: impl Into<String>,
        entity_id: EntityId,
    ) -> Self {
        Self {
            domain: domain.into(),
            service: service.into(),
            entity_id,
            data: Map::new(),
        }
    }

    /// Attach a service parameter.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// `fan.toggle`
    #[must_use]
    pub fn toggle_fan(entity_id: EntityId) -> Self {
        Self::new("fan", "toggle", entity_id)
    }

    /// `fan.set_preset_mode` with `preset_mode`.
    #[must_use]
    pub fn set_preset_mode(entity_id: EntityId, mode: &str) -> Self {
        Self::new("fan", "set_preset_mode", entity_id).with("preset_mode", mode)
    }

    /// `switch.toggle`
    #[must_use]
    pub fn toggle_switch(entity_id: EntityId) -> Self {
        Self::new("switch", "toggle", entity_id)
    }

    /// `domain.service`
    #[must_use]
    pub fn name(&self) -> String {
        format!("{}.{}", self.domain, self.service)
    }

    /// Service data as sent on the wire: the parameters plus `entity_id`.
    #[must_use]
    pub fn payload(&self) -> Value {
        let mut data = self.data.clone();
        data.insert(
            "entity_id".to_string(),
            Value::String(self.entity_id.to_string()),
        );
        Value::Object(data)
    }
}
