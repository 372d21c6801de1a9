//! JSON implementation of [`Registry`].

use std::future::Future;
use std::path::Path;

use purifier_app::ports::Registry;
use purifier_domain::area::Area;
use purifier_domain::device::Device;
use purifier_domain::entity::Entity;
use purifier_domain::error::PurifierError;

use crate::error::SnapshotError;
use crate::wire::{SnapshotDocument, convert_all};

/// Registry backed by a snapshot decoded once from JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonSnapshotRegistry {
    devices: Vec<Device>,
    areas: Vec<Area>,
    entities: Vec<Entity>,
}

impl JsonSnapshotRegistry {
    /// Decode a snapshot document.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Parse`] if `input` is not a snapshot document.
    pub fn from_json(input: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_str(input)?;
        Ok(Self {
            devices: convert_all("device", document.devices),
            areas: convert_all("area", document.areas),
            entities: convert_all("state", document.states),
        })
    }

    /// Read and decode a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be read and
    /// [`SnapshotError::Parse`] if it cannot be decoded.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = tokio::fs::read_to_string(path).await?;
        let registry = Self::from_json(&content)?;
        tracing::debug!(
            devices = registry.devices.len(),
            areas = registry.areas.len(),
            states = registry.entities.len(),
            "snapshot file loaded"
        );
        Ok(registry)
    }
}

impl Registry for JsonSnapshotRegistry {
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, PurifierError>> + Send {
        let devices = self.devices.clone();
        async move { Ok(devices) }
    }

    fn list_areas(&self) -> impl Future<Output = Result<Vec<Area>, PurifierError>> + Send {
        let areas = self.areas.clone();
        async move { Ok(areas) }
    }

    fn list_states(&self) -> impl Future<Output = Result<Vec<Entity>, PurifierError>> + Send {
        let entities = self.entities.clone();
        async move { Ok(entities) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use purifier_domain::id::DeviceId;

    const SNAPSHOT: &str = r#"{
        "devices": [
            {"id": "d1", "manufacturer": "Philips", "model": "AC3033/11", "name": "AC3033", "area_id": "bedroom"},
            {"id": "", "name": "broken"}
        ],
        "areas": [{"area_id": "bedroom", "name": "Bedroom"}],
        "states": [
            {"entity_id": "fan.bedroom", "state": "off", "attributes": {"device_id": "d1"}},
            {"entity_id": "sensor.bedroom_pm25", "state": "4", "attributes": {"device_id": "d1", "unit_of_measurement": "µg/m³"}}
        ]
    }"#;

    #[tokio::test]
    async fn should_list_decoded_records() {
        let registry = JsonSnapshotRegistry::from_json(SNAPSHOT).unwrap();

        let devices = registry.list_devices().await.unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, DeviceId::new("d1"));

        assert_eq!(registry.list_areas().await.unwrap().len(), 1);

        let states = registry.list_states().await.unwrap();
        assert_eq!(states.len(), 2);
        assert!(states.iter().all(|e| e.belongs_to(&DeviceId::new("d1"))));
    }

    #[test]
    fn should_accept_document_with_missing_sections() {
        let registry = JsonSnapshotRegistry::from_json(r#"{"states": []}"#).unwrap();
        assert!(registry.devices.is_empty());
    }

    #[test]
    fn should_report_parse_error() {
        let result = JsonSnapshotRegistry::from_json("not json");
        assert!(matches!(result, Err(SnapshotError::Parse(_))));
    }

    #[tokio::test]
    async fn should_report_io_error_for_missing_file() {
        let result = JsonSnapshotRegistry::load(Path::new("does-not-exist.json")).await;
        let err = result.unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
        assert!(matches!(
            PurifierError::from(err),
            PurifierError::Registry(_)
        ));
    }
}
