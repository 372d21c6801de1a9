//! Card editor: the draft configuration behind the visual editor.
//!
//! The editor owns its draft [`PurifierConfig`]; every mutating call returns
//! the updated config, which the host persists as the new card config.

use serde::Serialize;

use purifier_domain::card_config::PurifierConfig;
use purifier_domain::id::DeviceId;
use purifier_domain::preset::preset_modes;
use purifier_domain::sensor::SensorKind;
use purifier_domain::visibility::{VisibilitySpec, preset_mode_universe, sensor_universe};

use crate::snapshot::RegistrySnapshot;

/// One switch of a visibility list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityOption {
    pub key: String,
    pub label: String,
    pub checked: bool,
}

/// Editing state for a single card.
#[derive(Debug, Clone, Default)]
pub struct CardEditor {
    config: PurifierConfig,
}

impl CardEditor {
    /// Load `config` and classify its device against `snapshot`.
    ///
    /// A legacy config bound only to an entity gains the owning `device_id`.
    /// The detected fan becomes the primary entity unless one is set.
    #[must_use]
    pub fn open(config: PurifierConfig, snapshot: &RegistrySnapshot) -> Self {
        let mut editor = Self { config };
        editor.detect(snapshot, false);
        editor
    }

    #[must_use]
    pub fn config(&self) -> &PurifierConfig {
        &self.config
    }

    #[must_use]
    pub fn into_config(self) -> PurifierConfig {
        self.config
    }

    /// Re-run detection when a device is set but no fan was found yet.
    ///
    /// Registry data can arrive after the editor opened; calling this on
    /// every new snapshot is safe. Returns whether detection ran.
    pub fn refresh(&mut self, snapshot: &RegistrySnapshot) -> bool {
        if self.config.device_id.is_none() || self.config.detected_entities.fan().is_some() {
            return false;
        }
        self.detect(snapshot, true);
        true
    }

    /// Bind the card to another device.
    pub fn select_device(
        &mut self,
        device_id: DeviceId,
        snapshot: &RegistrySnapshot,
    ) -> &PurifierConfig {
        tracing::debug!(device = %device_id, "device selected");
        self.config.device_id = Some(device_id);
        self.detect(snapshot, true);
        &self.config
    }

    /// Sensor switches for the detected sensors.
    #[must_use]
    pub fn sensor_options(&self) -> Vec<VisibilityOption> {
        let universe = sensor_universe(&self.config.detected_entities);
        let visibility = VisibilitySpec::new(&universe, &self.config.visible_sensors);
        universe
            .iter()
            .filter_map(|key| SensorKind::from_key(key))
            .map(|kind| VisibilityOption {
                key: kind.key().to_string(),
                label: kind.label().to_string(),
                checked: visibility.is_visible(kind.key()),
            })
            .collect()
    }

    /// Preset-mode switches for the fan's modes.
    #[must_use]
    pub fn preset_mode_options(&self, snapshot: &RegistrySnapshot) -> Vec<VisibilityOption> {
        let modes = self.fan_preset_modes(snapshot);
        let universe = preset_mode_universe(&modes);
        let visibility = VisibilitySpec::new(&universe, &self.config.visible_preset_modes);
        let mut options: Vec<VisibilityOption> = Vec::new();
        for mode in &modes {
            let key = mode.to_lowercase();
            if options.iter().any(|o| o.key == key) {
                continue;
            }
            options.push(VisibilityOption {
                checked: visibility.is_visible(&key),
                key,
                label: mode.clone(),
            });
        }
        options
    }

    /// Show or hide a sensor.
    pub fn toggle_sensor(&mut self, key: &str, visible: bool) -> &PurifierConfig {
        let universe = sensor_universe(&self.config.detected_entities);
        self.config.visible_sensors =
            VisibilitySpec::new(&universe, &self.config.visible_sensors).toggle(key, visible);
        tracing::debug!(key, visible, list = ?self.config.visible_sensors, "sensor visibility changed");
        &self.config
    }

    /// Show or hide a preset mode. Without a known fan the config is unchanged.
    pub fn toggle_preset_mode(
        &mut self,
        key: &str,
        visible: bool,
        snapshot: &RegistrySnapshot,
    ) -> &PurifierConfig {
        let modes = self.fan_preset_modes(snapshot);
        if modes.is_empty() {
            return &self.config;
        }
        let universe = preset_mode_universe(&modes);
        self.config.visible_preset_modes =
            VisibilitySpec::new(&universe, &self.config.visible_preset_modes).toggle(key, visible);
        tracing::debug!(key, visible, list = ?self.config.visible_preset_modes, "preset mode visibility changed");
        &self.config
    }

    fn fan_preset_modes(&self, snapshot: &RegistrySnapshot) -> Vec<String> {
        self.config
            .primary_entity()
            .and_then(|id| snapshot.entity(id))
            .map(preset_modes)
            .unwrap_or_default()
    }

    /// Classify the bound device and store the result in the draft.
    ///
    /// With `reset_entity` the primary entity follows the detected fan;
    /// otherwise an existing entity is kept.
    fn detect(&mut self, snapshot: &RegistrySnapshot, reset_entity: bool) {
        match snapshot.detect(&self.config) {
            Ok((device, roles)) => {
                if reset_entity || self.config.entity.is_none() {
                    self.config.entity = roles.fan().cloned();
                }
                self.config.device_id = Some(device);
                self.config.detected_entities = roles;
            }
            Err(err) => {
                tracing::debug!(error = %err, "skipping entity detection");
            }
        }
    }
}
