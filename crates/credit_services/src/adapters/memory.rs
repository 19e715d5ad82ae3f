//! In-memory repositories
//!
//! Each repository keeps its entities in a `HashMap` behind a Tokio
//! `RwLock` and hands out clones.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use core_kernel::{ApplicationId, ClientId, CreditId, DomainPort, PortError};
use domain_client::{Client, ClientPin, ClientRepository};
use domain_credit::{ApplicationRepository, Credit, CreditApplication, CreditRepository};

#[derive(Debug, Default)]
struct ClientStore {
    clients: HashMap<ClientId, Client>,
    /// PIN to owning client
    pins: HashMap<String, ClientId>,
}

/// Client storage with a PIN index
#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    store: RwLock<ClientStore>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.clients.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl DomainPort for InMemoryClientRepository {}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PortError> {
        Ok(self.store.read().await.clients.get(&id).cloned())
    }

    async fn find_by_pin(&self, pin: &ClientPin) -> Result<Option<Client>, PortError> {
        let store = self.store.read().await;
        Ok(store
            .pins
            .get(pin.value())
            .and_then(|id| store.clients.get(id))
            .cloned())
    }

    async fn save(&self, client: &Client) -> Result<(), PortError> {
        let mut store = self.store.write().await;

        if let Some(owner) = store.pins.get(client.pin().value()) {
            if *owner != client.id() {
                return Err(PortError::conflict(format!(
                    "PIN already registered to {}",
                    owner
                )));
            }
        }

        // A re-saved client may have changed its PIN
        if let Some(previous) = store.clients.get(&client.id()) {
            let previous_pin = previous.pin().value().to_string();
            store.pins.remove(&previous_pin);
        }

        store.pins.insert(client.pin().value().to_string(), client.id());
        store.clients.insert(client.id(), client.clone());
        Ok(())
    }
}

/// Credit product catalog
#[derive(Debug, Default)]
pub struct InMemoryCreditRepository {
    credits: RwLock<HashMap<CreditId, Credit>>,
}

impl InMemoryCreditRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the catalog
    pub async fn with_credits(credits: impl IntoIterator<Item = Credit>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.credits.write().await;
            for credit in credits {
                map.insert(credit.id().clone(), credit);
            }
        }
        repository
    }
}

impl DomainPort for InMemoryCreditRepository {}

#[async_trait]
impl CreditRepository for InMemoryCreditRepository {
    async fn find_by_id(&self, id: &CreditId) -> Result<Option<Credit>, PortError> {
        Ok(self.credits.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Credit>, PortError> {
        let mut credits: Vec<Credit> = self.credits.read().await.values().cloned().collect();
        credits.sort_by(|a, b| a.id().as_str().cmp(b.id().as_str()));
        Ok(credits)
    }

    async fn save(&self, credit: &Credit) -> Result<(), PortError> {
        self.credits
            .write()
            .await
            .insert(credit.id().clone(), credit.clone());
        Ok(())
    }
}

/// Application storage
#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    applications: RwLock<HashMap<ApplicationId, CreditApplication>>,
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DomainPort for InMemoryApplicationRepository {}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn find_by_id(&self, id: ApplicationId) -> Result<Option<CreditApplication>, PortError> {
        Ok(self.applications.read().await.get(&id).cloned())
    }

    async fn find_by_client_id(&self, client_id: ClientId) -> Result<Vec<CreditApplication>, PortError> {
        let mut applications: Vec<CreditApplication> = self
            .applications
            .read()
            .await
            .values()
            .filter(|a| a.client_id() == client_id)
            .cloned()
            .collect();
        applications.sort_by_key(|a| (a.applied_at(), *a.id().as_uuid()));
        Ok(applications)
    }

    async fn save(&self, application: &CreditApplication) -> Result<(), PortError> {
        self.applications
            .write()
            .await
            .insert(application.id(), application.clone());
        Ok(())
    }
}
