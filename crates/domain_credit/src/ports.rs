//! Credit Domain Ports
//!
//! Storage and notification collaborators of the credit domain. The
//! approval engine itself never calls these; the application layer loads
//! entities through them, runs the engine, and stores the outcome.

use async_trait::async_trait;

use core_kernel::{ApplicationId, ClientId, CreditId, DomainPort, PortError};
use domain_client::Client;

use crate::application::CreditApplication;
use crate::credit::Credit;

/// Storage port for the credit product catalog
#[async_trait]
pub trait CreditRepository: DomainPort {
    /// Retrieves a credit product by ID
    async fn find_by_id(&self, id: &CreditId) -> Result<Option<Credit>, PortError>;

    /// Lists every product in the catalog
    async fn find_all(&self) -> Result<Vec<Credit>, PortError>;

    /// Inserts or replaces a product
    async fn save(&self, credit: &Credit) -> Result<(), PortError>;
}

/// Storage port for credit applications
///
/// Contract: `save` followed by `find_by_id` returns an equal application.
#[async_trait]
pub trait ApplicationRepository: DomainPort {
    /// Retrieves an application by ID
    async fn find_by_id(&self, id: ApplicationId) -> Result<Option<CreditApplication>, PortError>;

    /// Lists a client's applications, oldest first
    async fn find_by_client_id(&self, client_id: ClientId) -> Result<Vec<CreditApplication>, PortError>;

    /// Inserts or replaces an application
    async fn save(&self, application: &CreditApplication) -> Result<(), PortError>;
}

/// Outbound notifications about decided applications
///
/// Fire-and-forget: callers log a failure and keep the recorded decision.
#[async_trait]
pub trait NotificationPort: DomainPort {
    async fn notify_approval(
        &self,
        client: &Client,
        application: &CreditApplication,
    ) -> Result<(), PortError>;

    async fn notify_rejection(
        &self,
        client: &Client,
        application: &CreditApplication,
    ) -> Result<(), PortError>;
}
