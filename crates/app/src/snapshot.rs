//! Registry snapshot: one resolved view of devices, areas and states.
//!
//! Everything downstream of the registry (picker, classifier, editor, card)
//! works on a snapshot so that a single render sees consistent data.

use serde::Serialize;

use purifier_domain::area::{Area, area_name};
use purifier_domain::candidate::CandidatePolicy;
use purifier_domain::card_config::{PurifierConfig, Target};
use purifier_domain::classifier::classify;
use purifier_domain::device::Device;
use purifier_domain::entity::Entity;
use purifier_domain::error::{NotFoundError, PurifierError};
use purifier_domain::id::{DeviceId, EntityId};
use purifier_domain::role::RoleMap;

/// Devices, areas and entity states as listed by the registry.
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    pub devices: Vec<Device>,
    pub areas: Vec<Area>,
    pub entities: Vec<Entity>,
}

/// One row of the device picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceOption {
    pub id: DeviceId,
    pub name: String,
    pub model: Option<String>,
    pub area: Option<String>,
}

impl DeviceOption {
    /// Secondary line: `model • area`, either part omitted when unknown.
    #[must_use]
    pub fn detail(&self) -> String {
        match (&self.model, &self.area) {
            (Some(model), Some(area)) => format!("{model} • {area}"),
            (Some(model), None) => model.clone(),
            (None, Some(area)) => area.clone(),
            (None, None) => String::new(),
        }
    }
}

impl RegistrySnapshot {
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.entity_id == id)
    }

    #[must_use]
    pub fn device(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| &d.id == id)
    }

    /// Picker rows for the devices accepted by `policy`, in registry order.
    #[must_use]
    pub fn device_options(&self, policy: &CandidatePolicy) -> Vec<DeviceOption> {
        policy
            .filter_candidates(&self.devices)
            .into_iter()
            .map(|device| DeviceOption {
                id: device.id.clone(),
                name: device.display_name().to_string(),
                model: device.model.clone(),
                area: device
                    .area_id
                    .as_ref()
                    .map(|id| area_name(&self.areas, id).to_string()),
            })
            .collect()
    }

    /// The device the card is bound to.
    ///
    /// Uses `device_id` when set; otherwise resolves the owning device of the
    /// legacy `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`PurifierError::Config`] when neither is configured and
    /// [`PurifierError::NotFound`] when the legacy entity is unknown or has
    /// no device.
    pub fn resolve_device(&self, config: &PurifierConfig) -> Result<DeviceId, PurifierError> {
        match config.target()? {
            Target::Device(id) => Ok(id.clone()),
            Target::Entity(entity_id) => self
                .entity(entity_id)
                .and_then(|entity| entity.device_id.clone())
                .ok_or_else(|| {
                    NotFoundError {
                        entity: "Device of entity",
                        id: entity_id.to_string(),
                    }
                    .into()
                }),
        }
    }

    /// Classify the entities of the configured device.
    ///
    /// # Errors
    ///
    /// Propagates [`resolve_device`](Self::resolve_device) failures.
    pub fn detect(&self, config: &PurifierConfig) -> Result<(DeviceId, RoleMap), PurifierError> {
        let device = self.resolve_device(config)?;
        let roles = classify(&device, &self.entities);
        tracing::debug!(device = %device, roles = roles.len(), "classified device entities");
        Ok((device, roles))
    }
}
