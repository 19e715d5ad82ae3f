//! Credit Services - application layer of the credit approval engine
//!
//! Wires the domain crates to concrete collaborators and exposes the
//! use cases:
//!
//! - [`ClientService`]: onboarding and lookup
//! - [`CreditCatalogService`]: product listing
//! - [`ApplicationService`]: eligibility checks, application processing,
//!   and application queries
//!
//! [`CreditEngine`] assembles all three over the in-memory adapters.

pub mod adapters;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod use_cases;

use std::sync::Arc;

use domain_credit::{CreditApprovalService, RandomSource};

pub use adapters::{InMemoryApplicationRepository, InMemoryClientRepository, InMemoryCreditRepository, LogNotifier};
pub use config::AppConfig;
pub use error::{ServiceError, ServiceResult};
pub use use_cases::{ApplicationService, ClientService, CreditCatalogService};

/// Fully assembled set of use cases
#[derive(Clone)]
pub struct CreditEngine {
    pub clients: ClientService,
    pub catalog: CreditCatalogService,
    pub applications: ApplicationService,
}

impl CreditEngine {
    /// Builds the engine over in-memory storage seeded with the default catalog
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if `config` is inconsistent
    pub async fn in_memory(config: &AppConfig, random: Arc<dyn RandomSource>) -> ServiceResult<Self> {
        config.validate()?;

        let clients = Arc::new(InMemoryClientRepository::new());
        let credits = Arc::new(InMemoryCreditRepository::with_credits(catalog::default_credits()?).await);
        let applications = Arc::new(InMemoryApplicationRepository::new());
        let notifier = Arc::new(LogNotifier::new(config.notifications_enabled));
        let approval = Arc::new(CreditApprovalService::with_default_rules(&config.rule_config(), random));

        tracing::debug!(rules = ?approval.rule_names(), "Approval service assembled");

        Ok(Self {
            clients: ClientService::new(clients.clone()),
            catalog: CreditCatalogService::new(credits.clone()),
            applications: ApplicationService::new(clients, credits, applications, notifier, approval),
        })
    }
}
