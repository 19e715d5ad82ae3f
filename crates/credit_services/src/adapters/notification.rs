//! Log-based notification adapter

use async_trait::async_trait;
use tracing::info;

use core_kernel::{DomainPort, PortError};
use domain_client::Client;
use domain_credit::{CreditApplication, NotificationPort};

/// Emits one `tracing` event per notification
#[derive(Debug, Clone, Copy)]
pub struct LogNotifier {
    enabled: bool,
}

impl LogNotifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DomainPort for LogNotifier {}

#[async_trait]
impl NotificationPort for LogNotifier {
    async fn notify_approval(
        &self,
        client: &Client,
        application: &CreditApplication,
    ) -> Result<(), PortError> {
        if !self.enabled {
            return Ok(());
        }

        info!(
            client_id = %client.id(),
            email = client.email().value(),
            application_id = %application.id(),
            "Credit approved for {}, application {}",
            client.name(),
            application.id()
        );
        Ok(())
    }

    async fn notify_rejection(
        &self,
        client: &Client,
        application: &CreditApplication,
    ) -> Result<(), PortError> {
        if !self.enabled {
            return Ok(());
        }

        info!(
            client_id = %client.id(),
            email = client.email().value(),
            application_id = %application.id(),
            "Credit rejected for {}: {}, application {}",
            client.name(),
            application.reasons().join(", "),
            application.id()
        );
        Ok(())
    }
}
