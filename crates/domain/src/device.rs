//! Device: a physical thing that exposes one or more entities.

use serde::{Deserialize, Serialize};

use crate::error::{PurifierError, ValidationError};
use crate::id::{AreaId, DeviceId};

/// A device-registry row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: Option<String>,
    pub name_by_user: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub area_id: Option<AreaId>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PurifierError::Validation`] when `id` is empty.
    pub fn validate(&self) -> Result<(), PurifierError> {
        if self.id.as_str().is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        Ok(())
    }

    /// User-assigned name, falling back to the integration-provided one.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name_by_user
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    name_by_user: Option<String>,
    manufacturer: Option<String>,
    model: Option<String>,
    area_id: Option<AreaId>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn name_by_user(mut self, name: impl Into<String>) -> Self {
        self.name_by_user = Some(name.into());
        self
    }

    #[must_use]
    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn area_id(mut self, area_id: impl Into<AreaId>) -> Self {
        self.area_id = Some(area_id.into());
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`PurifierError::Validation`] if `id` is missing or empty.
    pub fn build(self) -> Result<Device, PurifierError> {
        let device = Device {
            id: self.id.unwrap_or_else(|| DeviceId::new("")),
            name: self.name,
            name_by_user: self.name_by_user,
            manufacturer: self.manufacturer,
            model: self.model,
            area_id: self.area_id,
        };
        device.validate()?;
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_user_name_for_display() {
        let device = Device::builder()
            .id("d1")
            .name("AC3033")
            .name_by_user("Bedroom Purifier")
            .build()
            .unwrap();
        assert_eq!(device.display_name(), "Bedroom Purifier");
    }

    #[test]
    fn should_fall_back_to_integration_name() {
        let device = Device::builder().id("d1").name("AC3033").build().unwrap();
        assert_eq!(device.display_name(), "AC3033");
    }

    #[test]
    fn should_display_empty_name_when_none_known() {
        let device = Device::builder().id("d1").build().unwrap();
        assert_eq!(device.display_name(), "");
    }

    #[test]
    fn should_return_validation_error_when_id_missing() {
        let result = Device::builder().name("x").build();
        assert!(matches!(
            result,
            Err(PurifierError::Validation(ValidationError::EmptyId))
        ));
    }
}
