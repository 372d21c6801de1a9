//! Sensor kinds shown on the card and their visibility keys.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A sensor reading the card can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorKind {
    Pm25,
    Iai,
    Humidity,
    Temperature,
}

impl SensorKind {
    /// Display order on the card and in the editor.
    pub const ALL: [Self; 4] = [Self::Pm25, Self::Iai, Self::Humidity, Self::Temperature];

    /// Key stored in `visible_sensors`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Pm25 => "pm25",
            Self::Iai => "iai",
            Self::Humidity => "humidity",
            Self::Temperature => "temperature",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Role whose entity provides the reading.
    #[must_use]
    pub fn role(self) -> Role {
        match self {
            Self::Pm25 => Role::Pm25,
            Self::Iai => Role::AllergenIndex,
            Self::Humidity => Role::Humidity,
            Self::Temperature => Role::Temperature,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Iai => "IAI",
            Self::Humidity => "Humidity",
            Self::Temperature => "Temperature",
        }
    }

    /// Unit used when the entity does not report `unit_of_measurement`.
    #[must_use]
    pub fn default_unit(self) -> &'static str {
        match self {
            Self::Pm25 => "μg/m³",
            Self::Iai => "",
            Self::Humidity => "%",
            Self::Temperature => "°C",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pm25 => "pap:pm25",
            Self::Iai => "pap:iai",
            Self::Humidity => "mdi:water-percent",
            Self::Temperature => "mdi:thermometer",
        }
    }
}
