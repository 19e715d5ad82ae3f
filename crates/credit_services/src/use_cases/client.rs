//! Client onboarding and lookup

use std::sync::Arc;
use tracing::{info, instrument};

use core_kernel::{ClientId, PortError};
use domain_client::{Client, ClientPin, ClientRepository, CreditScore, Email, Income, Phone, Region};

use crate::dto::client::{ClientResponse, CreateClientCommand};
use crate::error::{ServiceError, ServiceResult};

/// Client use cases
#[derive(Clone)]
pub struct ClientService {
    clients: Arc<dyn ClientRepository>,
}

impl ClientService {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    /// Registers a new client and returns its identifier
    ///
    /// # Errors
    ///
    /// * `DuplicatePin` if the PIN is already registered
    /// * `Validation` if any field violates its invariant
    #[instrument(skip_all, fields(region = %command.region))]
    pub async fn create_client(&self, command: CreateClientCommand) -> ServiceResult<ClientId> {
        let pin = ClientPin::new(command.pin)?;
        if self.clients.find_by_pin(&pin).await?.is_some() {
            return Err(ServiceError::DuplicatePin);
        }

        let client = Client::new(
            ClientId::new(),
            command.name,
            command.age,
            Region::new(command.region)?,
            Income::new(command.income)?,
            CreditScore::new(command.score)?,
            pin,
            Email::new(command.email)?,
            Phone::new(command.phone)?,
        );

        // The store may have registered the PIN since the lookup
        self.clients.save(&client).await.map_err(|err| match err {
            PortError::Conflict { .. } => ServiceError::DuplicatePin,
            other => ServiceError::Port(other),
        })?;

        info!(client_id = %client.id(), "Client created");
        Ok(client.id())
    }

    pub async fn get_client(&self, id: ClientId) -> ServiceResult<ClientResponse> {
        let client = self
            .clients
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Client not found"))?;
        Ok(ClientResponse::from(&client))
    }
}
