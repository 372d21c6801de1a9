//! Entity classifier: assigns roles to a device's entities.
//!
//! Classification is a data-driven walk over [`RULES`]: for each entity of
//! the device, the first rule whose domain matches and whose needle occurs
//! in the lowercased object id decides the role. Entities that match no
//! rule are dropped. The result is a pure function of the snapshot.

use crate::entity::Entity;
use crate::id::{DeviceId, EntityId};
use crate::role::{Role, RoleMap};

/// What happens when a rule fires for a role that is already filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assign {
    /// Keep the entity seen first.
    FirstWins,
    /// Overwrite with the entity seen last.
    LastWins,
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub domain: &'static str,
    /// Substrings searched in the lowercased object id; empty matches anything.
    pub needles: &'static [&'static str],
    pub role: Role,
    pub assign: Assign,
}

impl Rule {
    const fn new(domain: &'static str, needles: &'static [&'static str], role: Role) -> Self {
        Self {
            domain,
            needles,
            role,
            assign: Assign::FirstWins,
        }
    }

    fn matches(&self, domain: &str, name: &str) -> bool {
        self.domain == domain
            && (self.needles.is_empty() || self.needles.iter().any(|n| name.contains(n)))
    }
}

/// Ordered rule table, evaluated top to bottom.
pub const RULES: &[Rule] = &[
    // A device has no defined primary fan, so the last one seen is kept.
    Rule {
        domain: "fan",
        needles: &[],
        role: Role::Fan,
        assign: Assign::LastWins,
    },
    Rule::new("sensor", &["pm2", "pm25"], Role::Pm25),
    Rule::new("sensor", &["humidity"], Role::Humidity),
    Rule::new("sensor", &["temperature"], Role::Temperature),
    Rule::new("sensor", &["allergen", "iai"], Role::AllergenIndex),
    Rule::new("sensor", &["pre_filter", "prefilter"], Role::FilterPre),
    Rule::new("sensor", &["hepa"], Role::FilterHepa),
    Rule::new("sensor", &["carbon", "active_carbon"], Role::FilterCarbon),
    Rule::new("switch", &["child_lock", "childlock"], Role::ChildLock),
    Rule::new("light", &["display", "light"], Role::DisplayLight),
];

/// The first rule matching `entity_id`, if any.
#[must_use]
pub fn rule_for(entity_id: &EntityId) -> Option<&'static Rule> {
    let (domain, name) = entity_id.split();
    let name = name.to_lowercase();
    RULES.iter().find(|rule| rule.matches(domain, &name))
}

/// Build the [`RoleMap`] of `device_id` from a snapshot of all entities.
///
/// Entities of other devices are ignored; an unknown device yields an
/// empty map.
#[must_use]
pub fn classify(device_id: &DeviceId, entities: &[Entity]) -> RoleMap {
    let mut roles = RoleMap::new();
    for entity in entities.iter().filter(|e| e.belongs_to(device_id)) {
        let Some(rule) = rule_for(&entity.entity_id) else {
            continue;
        };
        match rule.assign {
            Assign::LastWins => roles.insert(rule.role, entity.entity_id.clone()),
            Assign::FirstWins => {
                roles.insert_if_vacant(rule.role, entity.entity_id.clone());
            }
        }
    }
    roles
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn entity(id: &str, device: &str) -> Entity {
        Entity::builder()
            .entity_id(id)
            .device_id(device)
            .build()
            .unwrap()
    }

    fn ids(map: &RoleMap) -> Vec<(Role, &str)> {
        map.iter().map(|(role, id)| (role, id.as_str())).collect()
    }

    #[test]
    fn should_classify_fan_and_sensors_of_device() {
        let entities = vec![
            entity("fan.x", "D"),
            entity("sensor.pm25_x", "D"),
            entity("sensor.humidity_x", "D"),
        ];

        let roles = classify(&DeviceId::new("D"), &entities);

        assert_eq!(
            ids(&roles),
            vec![
                (Role::Fan, "fan.x"),
                (Role::Pm25, "sensor.pm25_x"),
                (Role::Humidity, "sensor.humidity_x"),
            ]
        );
    }

    #[test]
    fn should_return_empty_map_for_unknown_device() {
        let entities = vec![entity("fan.x", "D")];
        assert!(classify(&DeviceId::new("other"), &entities).is_empty());
        assert!(classify(&DeviceId::new("D"), &[]).is_empty());
    }

    #[test]
    fn should_ignore_entities_without_device() {
        let entities = vec![Entity::builder().entity_id("fan.orphan").build().unwrap()];
        assert!(classify(&DeviceId::new("D"), &entities).is_empty());
    }

    #[test]
    fn should_keep_last_fan_seen() {
        let entities = vec![entity("fan.first", "D"), entity("fan.second", "D")];
        let roles = classify(&DeviceId::new("D"), &entities);
        assert_eq!(roles.fan(), Some(&EntityId::new("fan.second")));
    }

    #[test]
    fn should_keep_first_sensor_for_filled_role() {
        let entities = vec![entity("sensor.pm25_a", "D"), entity("sensor.pm2_5_b", "D")];
        let roles = classify(&DeviceId::new("D"), &entities);
        assert_eq!(roles.get(Role::Pm25), Some(&EntityId::new("sensor.pm25_a")));
    }

    #[test]
    fn should_match_case_insensitively() {
        let entities = vec![entity("sensor.Purifier_HEPA_Filter", "D")];
        let roles = classify(&DeviceId::new("D"), &entities);
        assert_eq!(
            roles.get(Role::FilterHepa),
            Some(&EntityId::new("sensor.Purifier_HEPA_Filter"))
        );
    }

    #[test]
    fn should_apply_sensor_rules_in_priority_order() {
        // "pm2" outranks "temperature"
        let rule = rule_for(&EntityId::new("sensor.pm2_temperature")).unwrap();
        assert_eq!(rule.role, Role::Pm25);
        let rule = rule_for(&EntityId::new("sensor.iai_carbon")).unwrap();
        assert_eq!(rule.role, Role::AllergenIndex);
    }

    #[test]
    fn should_not_fall_through_when_role_already_filled() {
        let entities = vec![
            entity("sensor.pm25", "D"),
            entity("sensor.pm25_humidity", "D"),
        ];
        let roles = classify(&DeviceId::new("D"), &entities);
        assert!(!roles.contains(Role::Humidity));
    }

    #[test]
    fn should_classify_filters_lock_and_light() {
        let entities = vec![
            entity("sensor.pre_filter_life", "D"),
            entity("sensor.active_carbon_filter", "D"),
            entity("switch.child_lock", "D"),
            entity("light.display_backlight", "D"),
        ];
        let roles = classify(&DeviceId::new("D"), &entities);
        assert_eq!(ids(&roles).len(), 4);
        assert!(roles.contains(Role::FilterPre));
        assert!(roles.contains(Role::FilterCarbon));
        assert!(roles.contains(Role::ChildLock));
        assert!(roles.contains(Role::DisplayLight));
    }

    #[test]
    fn should_drop_unmatched_entities_and_other_domains() {
        let entities = vec![
            entity("sensor.wifi_signal", "D"),
            entity("switch.power", "D"),
            entity("select.fan_speed", "D"),
            entity("binary_sensor.humidity_alert", "D"),
        ];
        assert!(classify(&DeviceId::new("D"), &entities).is_empty());
    }

    #[test]
    fn should_never_assign_two_roles_to_one_entity() {
        let entities = vec![
            entity("fan.a", "D"),
            entity("sensor.pm25_humidity_temperature", "D"),
            entity("sensor.humidity", "D"),
            entity("sensor.iai_hepa", "D"),
            entity("switch.childlock_light", "D"),
            entity("light.light", "D"),
            entity("fan.b", "D"),
        ];
        let roles = classify(&DeviceId::new("D"), &entities);

        let assigned: Vec<&EntityId> = roles.iter().map(|(_, id)| id).collect();
        let unique: HashSet<&EntityId> = assigned.iter().copied().collect();
        assert_eq!(assigned.len(), unique.len());

        let known: HashSet<&EntityId> = entities.iter().map(|e| &e.entity_id).collect();
        assert!(assigned.iter().all(|id| known.contains(id)));
    }

    #[test]
    fn should_be_idempotent_for_unchanged_snapshot() {
        let entities = vec![
            entity("fan.x", "D"),
            entity("sensor.temperature", "D"),
            entity("switch.child_lock", "D"),
        ];
        let device = DeviceId::new("D");
        assert_eq!(classify(&device, &entities), classify(&device, &entities));
    }
}
