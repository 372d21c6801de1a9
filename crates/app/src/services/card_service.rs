//! Card service: commands issued from the card's controls.

use purifier_domain::card_config::PurifierConfig;
use purifier_domain::error::{ConfigError, NotFoundError, PurifierError};
use purifier_domain::id::EntityId;
use purifier_domain::role::Role;
use purifier_domain::service::ServiceCall;
use purifier_domain::time::now;

use crate::ports::CommandDispatcher;
use crate::request::RequestTracker;
use crate::snapshot::RegistrySnapshot;
use crate::view::roles_for;

/// Application service that turns button presses into service calls.
pub struct CardService<D> {
    dispatcher: D,
}

impl<D: CommandDispatcher> CardService<D> {
    /// Create a new service backed by the given dispatcher.
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    /// Toggle the fan on or off.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingTarget`] when the card has no fan, or
    /// the dispatcher error.
    #[tracing::instrument(skip(self, config, tracker))]
    pub async fn toggle_power(
        &self,
        config: &PurifierConfig,
        tracker: &mut RequestTracker,
    ) -> Result<(), PurifierError> {
        let fan = fan_of(config)?;
        self.dispatch(ServiceCall::toggle_fan(fan)).await?;
        tracker.mark(now());
        Ok(())
    }

    /// Switch the fan to `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingTarget`] when the card has no fan, or
    /// the dispatcher error.
    #[tracing::instrument(skip(self, config, tracker))]
    pub async fn set_preset_mode(
        &self,
        config: &PurifierConfig,
        mode: &str,
        tracker: &mut RequestTracker,
    ) -> Result<(), PurifierError> {
        let fan = fan_of(config)?;
        self.dispatch(ServiceCall::set_preset_mode(fan, mode)).await?;
        tracker.mark(now());
        Ok(())
    }

    /// Toggle the child-lock switch of the bound device.
    ///
    /// # Errors
    ///
    /// Returns [`PurifierError::NotFound`] when no child-lock switch was
    /// detected, or the dispatcher error.
    #[tracing::instrument(skip(self, config, snapshot))]
    pub async fn toggle_child_lock(
        &self,
        config: &PurifierConfig,
        snapshot: &RegistrySnapshot,
    ) -> Result<(), PurifierError> {
        let roles = roles_for(config, snapshot);
        let switch = roles.get(Role::ChildLock).cloned().ok_or_else(|| NotFoundError {
            entity: "Child lock",
            id: config
                .device_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        })?;
        self.dispatch(ServiceCall::toggle_switch(switch)).await
    }

    async fn dispatch(&self, call: ServiceCall) -> Result<(), PurifierError> {
        tracing::info!(service = %call.name(), entity_id = %call.entity_id, "calling service");
        self.dispatcher.call_service(call).await
    }
}

fn fan_of(config: &PurifierConfig) -> Result<EntityId, PurifierError> {
    config
        .primary_entity()
        .cloned()
        .ok_or_else(|| ConfigError::MissingTarget.into())
}
