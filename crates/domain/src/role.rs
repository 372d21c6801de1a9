//! Roles: the logical functions a purifier's entities can fill.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::EntityId;

/// A logical function assigned to a discovered entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Fan,
    Pm25,
    Humidity,
    Temperature,
    AllergenIndex,
    FilterPre,
    FilterHepa,
    FilterCarbon,
    ChildLock,
    DisplayLight,
}

impl Role {
    pub const ALL: [Self; 10] = [
        Self::Fan,
        Self::Pm25,
        Self::Humidity,
        Self::Temperature,
        Self::AllergenIndex,
        Self::FilterPre,
        Self::FilterHepa,
        Self::FilterCarbon,
        Self::ChildLock,
        Self::DisplayLight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fan => "fan",
            Self::Pm25 => "pm25",
            Self::Humidity => "humidity",
            Self::Temperature => "temperature",
            Self::AllergenIndex => "allergen_index",
            Self::FilterPre => "filter_pre",
            Self::FilterHepa => "filter_hepa",
            Self::FilterCarbon => "filter_carbon",
            Self::ChildLock => "child_lock",
            Self::DisplayLight => "display_light",
        }
    }

    /// Role for a snake_case key, `None` for keys outside the ten roles.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == key)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role → entity id, at most one entity per role.
///
/// Serialized as a JSON object keyed by the snake_case role name, which is
/// the `detected_entities` shape cached in the card configuration. Decoding
/// skips keys that name no role and entries whose entity is `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoleMap(BTreeMap<Role, EntityId>);

impl<'de> Deserialize<'de> for RoleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Option<EntityId>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(key, id)| Some((Role::from_key(&key)?, id?)))
                .collect(),
        ))
    }
}

impl RoleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, role: Role) -> Option<&EntityId> {
        self.0.get(&role)
    }

    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains_key(&role)
    }

    /// Assign `role`, replacing any previous entity.
    pub fn insert(&mut self, role: Role, entity_id: EntityId) {
        self.0.insert(role, entity_id);
    }

    /// Assign `role` only if it is still empty. Returns whether it was assigned.
    pub fn insert_if_vacant(&mut self, role: Role, entity_id: EntityId) -> bool {
        if self.0.contains_key(&role) {
            return false;
        }
        self.0.insert(role, entity_id);
        true
    }

    /// The detected fan entity, the card's primary entity.
    #[must_use]
    pub fn fan(&self) -> Option<&EntityId> {
        self.get(Role::Fan)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &EntityId)> {
        self.0.iter().map(|(role, id)| (*role, id))
    }
}
