//! Registry port: read-only access to the host's registries and state store.

use std::future::Future;

use purifier_domain::area::Area;
use purifier_domain::device::Device;
use purifier_domain::entity::Entity;
use purifier_domain::error::PurifierError;

/// Listing calls against the host.
///
/// Each call returns a full snapshot; the core never writes back.
pub trait Registry {
    /// All devices of the device registry.
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, PurifierError>> + Send;

    /// All areas of the area registry.
    fn list_areas(&self) -> impl Future<Output = Result<Vec<Area>, PurifierError>> + Send;

    /// Current state of every entity.
    fn list_states(&self) -> impl Future<Output = Result<Vec<Entity>, PurifierError>> + Send;
}

impl<T: Registry + Send + Sync> Registry for std::sync::Arc<T> {
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, PurifierError>> + Send {
        (**self).list_devices()
    }

    fn list_areas(&self) -> impl Future<Output = Result<Vec<Area>, PurifierError>> + Send {
        (**self).list_areas()
    }

    fn list_states(&self) -> impl Future<Output = Result<Vec<Entity>, PurifierError>> + Send {
        (**self).list_states()
    }
}
