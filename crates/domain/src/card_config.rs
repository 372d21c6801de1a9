//! Card configuration: the persisted object the host stores for a card.
//!
//! Every field is optional on input and filled with its default, so partial
//! objects written by older versions keep working. An explicit `null` counts
//! as missing. Keys this crate does not know about are carried through
//! unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::id::{DeviceId, EntityId};
use crate::role::RoleMap;

/// Card type registered with the host.
pub const CARD_TYPE: &str = "custom:philips-purifier-card";

/// Legacy layout switch, kept for old configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Vertical,
    Horizontal,
}

/// What the card is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Device(&'a DeviceId),
    /// Legacy binding to the fan entity; the device is resolved from it.
    Entity(&'a EntityId),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PurifierConfig {
    #[serde(rename = "type", deserialize_with = "null_as_card_type")]
    pub card_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<DeviceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityId>,

    // display
    #[serde(deserialize_with = "null_as_true")]
    pub show_name: bool,
    #[serde(deserialize_with = "null_as_true")]
    pub show_state: bool,
    #[serde(deserialize_with = "null_as_true")]
    pub show_icon: bool,
    #[serde(deserialize_with = "null_as_true")]
    pub icon_animation: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fill_container: bool,

    // preset modes
    #[serde(deserialize_with = "null_as_true")]
    pub show_preset_modes: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collapsible_preset_modes: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub visible_preset_modes: Vec<String>,

    // sensors
    #[serde(deserialize_with = "null_as_true")]
    pub show_sensors: bool,
    #[serde(deserialize_with = "null_as_true")]
    pub sensors_in_separate_card: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub visible_sensors: Vec<String>,

    // controls
    #[serde(deserialize_with = "null_as_true")]
    pub show_child_lock: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub collapse_controls_when_off: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_sensors_when_off: bool,

    // legacy
    #[serde(deserialize_with = "null_as_true")]
    pub show_toolbar: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_power_button: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub compact_view: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsible_controls: Option<bool>,

    /// Cached classification of the configured device.
    #[serde(deserialize_with = "null_as_default")]
    pub detected_entities: RoleMap,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for PurifierConfig {
    fn default() -> Self {
        Self {
            card_type: CARD_TYPE.to_string(),
            device_id: None,
            entity: None,
            show_name: true,
            show_state: true,
            show_icon: true,
            icon_animation: true,
            fill_container: false,
            show_preset_modes: true,
            collapsible_preset_modes: false,
            visible_preset_modes: Vec::new(),
            show_sensors: true,
            sensors_in_separate_card: true,
            visible_sensors: Vec::new(),
            show_child_lock: true,
            collapse_controls_when_off: false,
            hide_sensors_when_off: false,
            show_toolbar: true,
            show_power_button: None,
            compact_view: false,
            layout: Layout::Vertical,
            collapsible_controls: None,
            detected_entities: RoleMap::new(),
            extra: Map::new(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn null_as_card_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(|| CARD_TYPE.to_string()))
}

impl PurifierConfig {
    /// Decode a configuration object, filling defaults.
    ///
    /// A config without device or entity is accepted here so the card picker
    /// can preview it; [`target`](Self::target) reports the problem later.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `value` is not an object or a
    /// field has the wrong type.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(ConfigError::Invalid)
    }

    /// Starter configuration bound to the first fan among `entity_ids`.
    #[must_use]
    pub fn stub(entity_ids: &[EntityId]) -> Self {
        Self {
            entity: entity_ids.iter().find(|id| id.domain() == "fan").cloned(),
            ..Self::default()
        }
    }

    /// Grid rows requested from the host.
    #[must_use]
    pub fn card_size(&self) -> u8 {
        if self.compact_view { 1 } else { 3 }
    }

    /// The configured device, or the legacy entity when no device is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingTarget`] when neither is configured.
    pub fn target(&self) -> Result<Target<'_>, ConfigError> {
        match (&self.device_id, &self.entity) {
            (Some(device), _) => Ok(Target::Device(device)),
            (None, Some(entity)) => Ok(Target::Entity(entity)),
            (None, None) => Err(ConfigError::MissingTarget),
        }
    }

    /// The fan entity the card controls: explicit `entity` first, then the
    /// detected fan.
    #[must_use]
    pub fn primary_entity(&self) -> Option<&EntityId> {
        self.entity.as_ref().or_else(|| self.detected_entities.fan())
    }

    /// Whether controls are hidden for a fan in the given power state.
    #[must_use]
    pub fn controls_collapsed(&self, fan_off: bool) -> bool {
        fan_off && (self.collapse_controls_when_off || self.collapsible_controls == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[test]
    fn should_fill_defaults_for_empty_object() {
        let config = PurifierConfig::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config, PurifierConfig::default());
        assert_eq!(config.card_type, CARD_TYPE);
        assert!(config.show_name);
        assert!(config.sensors_in_separate_card);
        assert!(!config.fill_container);
        assert!(config.visible_sensors.is_empty());
        assert_eq!(config.layout, Layout::Vertical);
    }

    #[test]
    fn should_fill_defaults_for_null_fields() {
        let config = PurifierConfig::from_value(serde_json::json!({
            "type": null,
            "device_id": "d",
            "show_name": null,
            "fill_container": null,
            "visible_sensors": null,
            "visible_preset_modes": null,
            "layout": null,
            "detected_entities": null,
            "show_power_button": null
        }))
        .unwrap();

        let expected = PurifierConfig {
            device_id: Some(DeviceId::new("d")),
            ..PurifierConfig::default()
        };
        assert_eq!(config, expected);
        assert!(config.show_name);
        assert!(!config.fill_container);
        assert!(config.extra.is_empty());
    }

    #[test]
    fn should_still_reject_wrongly_typed_fields() {
        let result = PurifierConfig::from_value(serde_json::json!({"show_name": "yes"}));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn should_skip_unknown_detected_roles() {
        let config = PurifierConfig::from_value(serde_json::json!({
            "device_id": "d",
            "detected_entities": {"fan": "fan.x", "air_quality": "sensor.aq"}
        }))
        .unwrap();
        assert_eq!(config.detected_entities.fan(), Some(&EntityId::new("fan.x")));
        assert_eq!(config.detected_entities.len(), 1);
    }

    #[test]
    fn should_reject_missing_config() {
        let result = PurifierConfig::from_value(Value::Null);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn should_keep_explicit_values_and_unknown_keys() {
        let config = PurifierConfig::from_value(serde_json::json!({
            "type": "custom:philips-purifier-card",
            "device_id": "abc",
            "show_name": false,
            "visible_sensors": ["pm25"],
            "layout": "horizontal",
            "detected_entities": {"fan": "fan.x"},
            "card_mod": {"style": "x"}
        }))
        .unwrap();

        assert_eq!(config.device_id, Some(DeviceId::new("abc")));
        assert!(!config.show_name);
        assert_eq!(config.visible_sensors, vec!["pm25".to_string()]);
        assert_eq!(config.layout, Layout::Horizontal);
        assert_eq!(
            config.detected_entities.get(Role::Fan),
            Some(&EntityId::new("fan.x"))
        );

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["card_mod"], serde_json::json!({"style": "x"}));
        assert!(back.get("entity").is_none());
    }

    #[test]
    fn should_report_missing_target() {
        let config = PurifierConfig::default();
        assert!(matches!(config.target(), Err(ConfigError::MissingTarget)));
    }

    #[test]
    fn should_prefer_device_over_legacy_entity() {
        let config = PurifierConfig {
            device_id: Some(DeviceId::new("d")),
            entity: Some(EntityId::new("fan.x")),
            ..PurifierConfig::default()
        };
        assert_eq!(config.target().unwrap(), Target::Device(&DeviceId::new("d")));

        let legacy = PurifierConfig {
            entity: Some(EntityId::new("fan.x")),
            ..PurifierConfig::default()
        };
        assert_eq!(
            legacy.target().unwrap(),
            Target::Entity(&EntityId::new("fan.x"))
        );
    }

    #[test]
    fn should_stub_with_first_fan() {
        let ids = vec![
            EntityId::new("light.kitchen"),
            EntityId::new("fan.purifier"),
            EntityId::new("fan.other"),
        ];
        let config = PurifierConfig::stub(&ids);
        assert_eq!(config.entity, Some(EntityId::new("fan.purifier")));
        assert!(PurifierConfig::stub(&[]).entity.is_none());
    }

    #[test]
    fn should_size_card_by_compact_view() {
        let mut config = PurifierConfig::default();
        assert_eq!(config.card_size(), 3);
        config.compact_view = true;
        assert_eq!(config.card_size(), 1);
    }

    #[test]
    fn should_fall_back_to_detected_fan_as_primary_entity() {
        let mut config = PurifierConfig::default();
        config
            .detected_entities
            .insert(Role::Fan, EntityId::new("fan.detected"));
        assert_eq!(config.primary_entity(), Some(&EntityId::new("fan.detected")));
        config.entity = Some(EntityId::new("fan.explicit"));
        assert_eq!(config.primary_entity(), Some(&EntityId::new("fan.explicit")));
    }

    #[test]
    fn should_collapse_controls_only_when_off_and_enabled() {
        let mut config = PurifierConfig::default();
        assert!(!config.controls_collapsed(true));
        config.collapsible_controls = Some(true);
        assert!(config.controls_collapsed(true));
        assert!(!config.controls_collapsed(false));
        config.collapsible_controls = None;
        config.collapse_controls_when_off = true;
        assert!(config.controls_collapsed(true));
    }
}
