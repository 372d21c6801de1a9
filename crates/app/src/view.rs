//! Card view model: render-ready data for the dashboard tile.
//!
//! Building a view is pure: it reads a config, a snapshot and the request
//! tracker and decides what the tile shows. Painting it is up to the host.

use serde::Serialize;

use purifier_domain::card_config::{Layout, PurifierConfig};
use purifier_domain::entity::Entity;
use purifier_domain::id::EntityId;
use purifier_domain::preset::{
    current_preset_mode, preset_icon, preset_modes, supports_preset_mode,
};
use purifier_domain::role::{Role, RoleMap};
use purifier_domain::sensor::SensorKind;
use purifier_domain::visibility::{VisibilitySpec, preset_mode_universe, sensor_universe};

use crate::request::RequestTracker;
use crate::snapshot::RegistrySnapshot;

/// Name shown when the fan has no `friendly_name`.
pub const DEFAULT_NAME: &str = "Air Purifier";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CardView {
    /// No fan entity is configured or it is missing from the snapshot.
    Unavailable,
    Ready(Box<CardContent>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardContent {
    pub header: Header,
    pub preset_modes: Vec<PresetModeButton>,
    pub sensors: Vec<SensorReading>,
    pub sensors_in_separate_card: bool,
    pub toolbar: Option<Toolbar>,
    pub compact: bool,
    pub horizontal: bool,
    pub fill_container: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub entity_id: EntityId,
    pub name: Option<String>,
    pub state: Option<String>,
    pub is_on: bool,
    pub show_icon: bool,
    pub animate_icon: bool,
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetModeButton {
    pub mode: String,
    pub active: bool,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensorReading {
    pub kind: SensorKind,
    pub label: &'static str,
    pub value: String,
    pub unit: String,
    pub icon: &'static str,
    pub entity_id: EntityId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolbar {
    pub power: bool,
    pub child_lock: Option<EntityId>,
}

impl CardView {
    /// Build the view of `config` against `snapshot`.
    ///
    /// Roles come from the cached `detected_entities`, or are classified on
    /// the fly when the cache is empty.
    #[must_use]
    pub fn build(
        config: &PurifierConfig,
        snapshot: &RegistrySnapshot,
        tracker: &RequestTracker,
    ) -> Self {
        let roles = roles_for(config, snapshot);
        let Some(fan) = config
            .entity
            .as_ref()
            .or_else(|| roles.fan())
            .and_then(|id| snapshot.entity(id))
        else {
            return Self::Unavailable;
        };

        let fan_off = fan.state.is_off();
        let collapsed = config.controls_collapsed(fan_off);

        Self::Ready(Box::new(CardContent {
            header: header(config, fan, tracker),
            preset_modes: if collapsed {
                Vec::new()
            } else {
                preset_buttons(config, fan)
            },
            sensors: if collapsed || (config.hide_sensors_when_off && fan_off) {
                Vec::new()
            } else {
                sensor_readings(config, &roles, snapshot)
            },
            sensors_in_separate_card: config.sensors_in_separate_card,
            toolbar: (!collapsed && config.show_toolbar).then(|| Toolbar {
                power: config.show_power_button.unwrap_or(true),
                child_lock: roles
                    .get(Role::ChildLock)
                    .filter(|_| config.show_child_lock)
                    .cloned(),
            }),
            compact: config.compact_view,
            horizontal: config.layout == Layout::Horizontal,
            fill_container: config.fill_container,
        }))
    }
}

/// Cached roles, or a fresh classification when nothing is cached.
#[must_use]
pub fn roles_for(config: &PurifierConfig, snapshot: &RegistrySnapshot) -> RoleMap {
    if !config.detected_entities.is_empty() {
        return config.detected_entities.clone();
    }
    snapshot
        .detect(config)
        .map(|(_, roles)| roles)
        .unwrap_or_default()
}

fn header(config: &PurifierConfig, fan: &Entity, tracker: &RequestTracker) -> Header {
    let is_on = fan.state.is_on();
    Header {
        entity_id: fan.entity_id.clone(),
        name: config
            .show_name
            .then(|| fan.friendly_name().unwrap_or(DEFAULT_NAME).to_string()),
        state: config.show_state.then(|| fan.state.to_string()),
        is_on,
        show_icon: config.show_icon,
        animate_icon: config.icon_animation && is_on,
        pending: tracker.is_pending(Some(fan)),
    }
}

fn preset_buttons(config: &PurifierConfig, fan: &Entity) -> Vec<PresetModeButton> {
    if !config.show_preset_modes || !supports_preset_mode(fan) {
        return Vec::new();
    }
    let Some(current) = current_preset_mode(fan) else {
        return Vec::new();
    };
    let modes = preset_modes(fan);
    let universe = preset_mode_universe(&modes);
    let visibility = VisibilitySpec::new(&universe, &config.visible_preset_modes);
    modes
        .iter()
        .filter(|mode| visibility.is_visible(&mode.to_lowercase()))
        .map(|mode| PresetModeButton {
            active: mode == current,
            icon: preset_icon(mode),
            mode: mode.clone(),
        })
        .collect()
}

fn sensor_readings(
    config: &PurifierConfig,
    roles: &RoleMap,
    snapshot: &RegistrySnapshot,
) -> Vec<SensorReading> {
    if !config.show_sensors {
        return Vec::new();
    }
    let universe = sensor_universe(roles);
    let visibility = VisibilitySpec::new(&universe, &config.visible_sensors);
    SensorKind::ALL
        .into_iter()
        .filter(|kind| visibility.is_visible(kind.key()))
        .filter_map(|kind| {
            let entity = snapshot.entity(roles.get(kind.role())?)?;
            Some(SensorReading {
                kind,
                label: kind.label(),
                value: entity.state.to_string(),
                unit: entity
                    .attribute_str("unit_of_measurement")
                    .unwrap_or(kind.default_unit())
                    .to_string(),
                icon: kind.icon(),
                entity_id: entity.entity_id.clone(),
            })
        })
        .collect()
}
