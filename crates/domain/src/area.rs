//! Area: a logical grouping (room, floor, zone) used to label devices.

use serde::{Deserialize, Serialize};

use crate::error::{PurifierError, ValidationError};
use crate::id::AreaId;

/// Fallback label for a device whose area is not in the registry.
pub const UNKNOWN_AREA: &str = "Unknown";

/// An area-registry row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: AreaId,
    pub name: String,
}

impl Area {
    /// Create a builder for constructing an [`Area`].
    #[must_use]
    pub fn builder() -> AreaBuilder {
        AreaBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PurifierError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), PurifierError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Name of the area with `id`, or [`UNKNOWN_AREA`].
#[must_use]
pub fn area_name<'a>(areas: &'a [Area], id: &AreaId) -> &'a str {
    areas
        .iter()
        .find(|area| &area.id == id)
        .map_or(UNKNOWN_AREA, |area| area.name.as_str())
}

/// Step-by-step builder for [`Area`].
#[derive(Debug, Default)]
pub struct AreaBuilder {
    id: Option<AreaId>,
    name: Option<String>,
}

impl AreaBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<AreaId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return an [`Area`].
    ///
    /// # Errors
    ///
    /// Returns [`PurifierError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Area, PurifierError> {
        let area = Area {
            id: self.id.unwrap_or_else(|| AreaId::new("")),
            name: self.name.unwrap_or_default(),
        };
        area.validate()?;
        Ok(area)
    }
}
