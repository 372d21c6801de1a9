//! Preset modes exposed by the purifier's fan entity.

use crate::entity::Entity;

/// `supported_features` bit advertising preset-mode support.
pub const SUPPORT_PRESET_MODE: i64 = 8;

/// Icon for a preset mode; unknown modes get the generic speed icon.
#[must_use]
pub fn preset_icon(mode: &str) -> &'static str {
    match mode.to_lowercase().as_str() {
        "auto" => "pap:auto_mode",
        "sleep" => "pap:sleep_mode",
        "turbo" | "speed_3" => "pap:speed_3",
        "speed_1" => "pap:speed_1",
        "speed_2" => "pap:speed_2",
        "allergen" => "pap:allergen_mode",
        "bacteria" => "pap:bacteria_virus_mode",
        _ => "pap:fan_speed_button",
    }
}

/// Whether the fan advertises preset modes in `supported_features`.
#[must_use]
pub fn supports_preset_mode(fan: &Entity) -> bool {
    fan.get_attribute("supported_features")
        .and_then(crate::entity::AttributeValue::as_i64)
        .is_some_and(|features| features & SUPPORT_PRESET_MODE != 0)
}

/// The fan's `preset_modes` attribute, as reported.
#[must_use]
pub fn preset_modes(fan: &Entity) -> Vec<String> {
    fan.get_attribute("preset_modes")
        .and_then(crate::entity::AttributeValue::as_string_list)
        .unwrap_or_default()
}

/// The fan's active preset mode.
#[must_use]
pub fn current_preset_mode(fan: &Entity) -> Option<&str> {
    fan.attribute_str("preset_mode")
}
