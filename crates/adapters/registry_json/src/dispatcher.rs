//! Dry-run implementation of [`CommandDispatcher`].

use std::future::Future;
use std::sync::Mutex;

use purifier_app::ports::CommandDispatcher;
use purifier_domain::error::PurifierError;
use purifier_domain::service::ServiceCall;

/// Dispatcher that logs each call and keeps it instead of contacting a host.
#[derive(Debug, Default)]
pub struct LoggingDispatcher {
    calls: Mutex<Vec<ServiceCall>>,
}

impl LoggingDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl CommandDispatcher for LoggingDispatcher {
    fn call_service(
        &self,
        call: ServiceCall,
    ) -> impl Future<Output = Result<(), PurifierError>> + Send {
        tracing::info!(service = %call.name(), payload = %call.payload(), "dry-run service call");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        async { Ok(()) }
    }
}
