//! Client Domain Ports
//!
//! The `ClientRepository` trait is everything the application layer needs
//! from client storage. Adapters (in-memory, database, external CRM) are
//! wired at startup and handed to use cases as `Arc<dyn ClientRepository>`.
//!
//! ```rust,ignore
//! let clients: Arc<dyn ClientRepository> = Arc::new(InMemoryClientRepository::new());
//! if clients.find_by_pin(&pin).await?.is_some() {
//!     return Err(ServiceError::DuplicatePin);
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{ClientId, DomainPort, PortError};

use crate::client::Client;
use crate::value_objects::ClientPin;

/// Storage port for clients
///
/// Contract: `save` followed by `find_by_id` returns an equal client.
/// A missing client is `Ok(None)`; `PortError` means the adapter failed.
#[async_trait]
pub trait ClientRepository: DomainPort {
    /// Retrieves a client by ID
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PortError>;

    /// Retrieves the client holding the given PIN
    async fn find_by_pin(&self, pin: &ClientPin) -> Result<Option<Client>, PortError>;

    /// Inserts or replaces a client
    async fn save(&self, client: &Client) -> Result<(), PortError>;
}
