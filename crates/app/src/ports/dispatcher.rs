//! Command dispatcher port: fire-and-forget service calls to the host.

use std::future::Future;

use purifier_domain::error::PurifierError;
use purifier_domain::service::ServiceCall;

/// Sends service calls to the host.
///
/// Success only means the call was handed over; the resulting state change
/// shows up in a later registry snapshot.
pub trait CommandDispatcher {
    fn call_service(&self, call: ServiceCall)
    -> impl Future<Output = Result<(), PurifierError>> + Send;
}

impl<T: CommandDispatcher + Send + Sync> CommandDispatcher for std::sync::Arc<T> {
    fn call_service(
        &self,
        call: ServiceCall,
    ) -> impl Future<Output = Result<(), PurifierError>> + Send {
        (**self).call_service(call)
    }
}
