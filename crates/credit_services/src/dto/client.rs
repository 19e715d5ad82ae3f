//! Client DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_client::Client;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClientCommand {
    pub name: String,
    pub age: u32,
    pub region: String,
    pub income: i64,
    pub score: i64,
    pub pin: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientResponse {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub region: String,
    pub income: u64,
    pub score: u32,
    pub pin: String,
    pub email: String,
    pub phone: String,
}

impl From<&Client> for ClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            id: *client.id().as_uuid(),
            name: client.name().to_string(),
            age: client.age(),
            region: client.region().code().to_string(),
            income: client.income().amount(),
            score: client.score().value(),
            pin: client.pin().value().to_string(),
            email: client.email().value().to_string(),
            phone: client.phone().value().to_string(),
        }
    }
}
