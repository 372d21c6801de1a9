//! Visibility sets: which sensors and preset modes the card shows.
//!
//! A persisted list is either empty, meaning every key of the universe is
//! visible, or an explicit subset. Toggling never leaves a list that spells
//! out the whole universe: reaching full coverage collapses back to empty.
//!
//! Removing the last key of an explicit list also yields an empty list. That
//! literal then reads as "all visible" again; the codec keeps no history to
//! tell the two apart.

use crate::role::RoleMap;
use crate::sensor::SensorKind;

/// A universe of selectable keys paired with the persisted visible list.
#[derive(Debug, Clone, Copy)]
pub struct VisibilitySpec<'a> {
    pub universe: &'a [String],
    pub persisted: &'a [String],
}

impl<'a> VisibilitySpec<'a> {
    #[must_use]
    pub fn new(universe: &'a [String], persisted: &'a [String]) -> Self {
        Self {
            universe,
            persisted,
        }
    }

    /// Empty persisted list shows everything; otherwise membership decides.
    #[must_use]
    pub fn is_visible(&self, key: &str) -> bool {
        self.persisted.is_empty() || self.persisted.iter().any(|k| k == key)
    }

    /// The persisted list after showing (`turning_on`) or hiding `key`.
    ///
    /// A key outside the universe changes no membership. In every case the
    /// result is deduplicated, restricted to the universe, and never equal
    /// to the full universe.
    #[must_use]
    pub fn toggle(&self, key: &str, turning_on: bool) -> Vec<String> {
        if !self.in_universe(key) {
            return self.collapse(self.retain(self.persisted.iter(), |_| true));
        }

        match (self.persisted.is_empty(), turning_on) {
            (true, true) => Vec::new(),
            (true, false) => self.retain(self.universe.iter(), |k| k != key),
            (false, true) => {
                let mut list = self.retain(self.persisted.iter(), |_| true);
                if !list.iter().any(|k| k == key) {
                    list.push(key.to_string());
                }
                self.collapse(list)
            }
            (false, false) => self.retain(self.persisted.iter(), |k| k != key),
        }
    }

    /// Full coverage is spelled as the empty list.
    fn collapse(&self, mut list: Vec<String>) -> Vec<String> {
        if self.universe.iter().all(|k| list.contains(k)) {
            list.clear();
        }
        list
    }

    fn in_universe(&self, key: &str) -> bool {
        self.universe.iter().any(|k| k == key)
    }

    /// Deduplicated universe members of `keys` that pass `keep`.
    fn retain<'k>(
        &self,
        keys: impl Iterator<Item = &'k String>,
        keep: impl Fn(&str) -> bool,
    ) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for key in keys {
            if keep(key.as_str()) && self.in_universe(key) && !out.contains(key) {
                out.push(key.clone());
            }
        }
        out
    }
}

/// Sensor keys available for a classified device, in display order.
#[must_use]
pub fn sensor_universe(roles: &RoleMap) -> Vec<String> {
    SensorKind::ALL
        .into_iter()
        .filter(|kind| roles.contains(kind.role()))
        .map(|kind| kind.key().to_string())
        .collect()
}

/// Preset-mode keys of a fan: lowercased, first occurrence kept.
#[must_use]
pub fn preset_mode_universe<S: AsRef<str>>(preset_modes: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for mode in preset_modes {
        let key = mode.as_ref().to_lowercase();
        if !out.contains(&key) {
            out.push(key);
        }
    }
    out
}
