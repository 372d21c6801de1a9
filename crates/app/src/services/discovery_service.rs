//! Discovery service: loads registry snapshots.

use purifier_domain::error::PurifierError;

use crate::ports::Registry;
use crate::snapshot::RegistrySnapshot;

/// Application service that turns registry listings into a
/// [`RegistrySnapshot`].
pub struct DiscoveryService<R> {
    registry: R,
}

impl<R: Registry> DiscoveryService<R> {
    /// Create a new service backed by the given registry.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Fetch devices, areas and states.
    ///
    /// A failing listing never fails the load: it is logged and replaced by
    /// an empty list, so callers degrade to an empty picker or an
    /// unavailable card until the registry answers.
    #[tracing::instrument(skip(self))]
    pub async fn load_snapshot(&self) -> RegistrySnapshot {
        let devices = or_empty("devices", self.registry.list_devices().await);
        let areas = or_empty("areas", self.registry.list_areas().await);
        let entities = or_empty("states", self.registry.list_states().await);
        tracing::debug!(
            devices = devices.len(),
            areas = areas.len(),
            entities = entities.len(),
            "loaded registry snapshot"
        );
        RegistrySnapshot {
            devices,
            areas,
            entities,
        }
    }
}

fn or_empty<T>(listing: &'static str, result: Result<Vec<T>, PurifierError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        tracing::error!(listing, error = %err, "registry listing failed");
        Vec::new()
    })
}
