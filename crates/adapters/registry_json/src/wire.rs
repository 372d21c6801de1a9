//! Host wire format for registry snapshots.
//!
//! Wire rows stay separate from domain records so field naming and optional
//! columns of the host never leak into the domain crate.

use std::collections::HashMap;

use serde::Deserialize;

use purifier_domain::area::Area;
use purifier_domain::device::Device;
use purifier_domain::entity::{AttributeValue, Entity};
use purifier_domain::error::PurifierError;
use purifier_domain::id::{AreaId, DeviceId, EntityId};
use purifier_domain::time::Timestamp;

/// Whole snapshot document: `{ "devices": [...], "areas": [...], "states": [...] }`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SnapshotDocument {
    pub devices: Vec<DeviceRow>,
    pub areas: Vec<AreaRow>,
    pub states: Vec<StateRow>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceRow {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    name_by_user: Option<String>,
    #[serde(default)]
    manufacturer: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    area_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AreaRow {
    area_id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StateRow {
    entity_id: String,
    /// Some hosts join the entity registry into the state row.
    #[serde(default)]
    device_id: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    attributes: HashMap<String, AttributeValue>,
    #[serde(default)]
    last_changed: Option<Timestamp>,
    #[serde(default)]
    last_updated: Option<Timestamp>,
}

impl TryFrom<DeviceRow> for Device {
    type Error = PurifierError;

    fn try_from(row: DeviceRow) -> Result<Self, Self::Error> {
        let device = Device {
            id: DeviceId::new(row.id),
            name: row.name,
            name_by_user: row.name_by_user,
            manufacturer: row.manufacturer,
            model: row.model,
            area_id: row.area_id.map(AreaId::new),
        };
        device.validate()?;
        Ok(device)
    }
}

impl TryFrom<AreaRow> for Area {
    type Error = PurifierError;

    fn try_from(row: AreaRow) -> Result<Self, Self::Error> {
        let area = Area {
            id: AreaId::new(row.area_id),
            name: row.name,
        };
        area.validate()?;
        Ok(area)
    }
}

impl TryFrom<StateRow> for Entity {
    type Error = PurifierError;

    fn try_from(row: StateRow) -> Result<Self, Self::Error> {
        let device_id = row.device_id.map(DeviceId::new).or_else(|| {
            row.attributes
                .get("device_id")
                .and_then(AttributeValue::as_str)
                .map(DeviceId::from)
        });
        let mut builder = Entity::builder().entity_id(EntityId::new(row.entity_id));
        if let Some(state) = row.state {
            builder = builder.state(state);
        }
        if let Some(device_id) = device_id {
            builder = builder.device_id(device_id);
        }
        if let Some(ts) = row.last_changed {
            builder = builder.last_changed(ts);
        }
        if let Some(ts) = row.last_updated {
            builder = builder.last_updated(ts);
        }
        for (key, value) in row.attributes {
            builder = builder.attribute(key, value);
        }
        builder.build()
    }
}

/// Convert every row, dropping (and logging) the ones that fail validation.
pub(crate) fn convert_all<R, T>(kind: &'static str, rows: Vec<R>) -> Vec<T>
where
    T: TryFrom<R, Error = PurifierError>,
{
    rows.into_iter()
        .filter_map(|row| match T::try_from(row) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(kind, error = %err, "skipping invalid snapshot row");
                None
            }
        })
        .collect()
}
