//! Credit Engine - batch runner
//!
//! Onboards clients and processes one credit application per request,
//! printing each outcome as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin credit-engine -- requests.json
//!
//! CREDIT_RANDOM_REJECTION=false CREDIT_LOG_LEVEL=debug cargo run --bin credit-engine -- requests.json
//! ```
//!
//! The input file holds a JSON array of requests:
//!
//! ```json
//! [{ "client": { "name": "Petr Novak", "age": 30, "region": "PR", "income": 1500,
//!                "score": 600, "pin": "850101/1234", "email": "petr@example.com",
//!                "phone": "+420 600 000 000" },
//!    "credit_id": "personal-loan" }]
//! ```
//!
//! # Environment Variables
//!
//! * `CREDIT_MIN_AGE` / `CREDIT_MAX_AGE` - Eligible age range (default: 18..=60)
//! * `CREDIT_MIN_SCORE` - Score to exceed (default: 500)
//! * `CREDIT_MIN_INCOME` - Minimum monthly income (default: 1000)
//! * `CREDIT_ALLOWED_REGIONS` - Comma-separated region codes (default: PR,BR,OS)
//! * `CREDIT_RANDOM_REJECTION` - Random rejection in Prague (default: true);
//!   also read as `CREDIT_PRAGUE_RANDOM_REJECTION`
//! * `CREDIT_NOTIFICATIONS_ENABLED` - Log notifications (default: true)
//! * `CREDIT_SURCHARGE_RATE` - Ostrava surcharge in points (default: 5.0);
//!   also read as `CREDIT_OSTRAVA_RATE_INCREASE`
//! * `CREDIT_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::CreditId;
use credit_services::dto::application::ProcessApplicationResponse;
use credit_services::dto::client::CreateClientCommand;
use credit_services::{AppConfig, CreditEngine};
use domain_credit::ThreadRandom;

/// One line of the input batch
#[derive(Debug, Deserialize)]
struct ApplicationRequest {
    client: CreateClientCommand,
    credit_id: String,
}

/// Per-request output; failures are reported inline
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Outcome {
    Processed(ProcessApplicationResponse),
    Failed { pin: String, error: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.log_level);

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: credit-engine <requests.json>");
    };

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path))?;
    let requests: Vec<ApplicationRequest> =
        serde_json::from_str(&raw).with_context(|| format!("Invalid request file {}", path))?;

    tracing::info!(requests = requests.len(), "Starting Credit Engine");

    let engine = CreditEngine::in_memory(&config, Arc::new(ThreadRandom)).await?;

    for request in requests {
        let pin = request.client.pin.clone();
        let outcome = match process(&engine, request).await {
            Ok(response) => Outcome::Processed(response),
            Err(err) => {
                tracing::warn!(%pin, error = %err, "Request failed");
                Outcome::Failed {
                    pin,
                    error: err.to_string(),
                }
            }
        };
        println!("{}", serde_json::to_string(&outcome)?);
    }

    Ok(())
}

async fn process(
    engine: &CreditEngine,
    request: ApplicationRequest,
) -> anyhow::Result<ProcessApplicationResponse> {
    let credit_id = CreditId::new(request.credit_id)?;
    let client_id = engine.clients.create_client(request.client).await?;
    let response = engine
        .applications
        .process_application(client_id, &credit_id)
        .await?;
    Ok(response)
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
