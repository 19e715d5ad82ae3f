//! Eligibility checks and credit applications

use std::sync::Arc;
use tracing::{info, instrument, warn};

use core_kernel::{ApplicationId, ClientId, CreditId};
use domain_client::{Client, ClientRepository};
use domain_credit::{
    ApplicationRepository, CreditApplication, CreditApprovalService, CreditRepository, Credit,
    NotificationPort,
};

use crate::dto::application::{ApplicationResponse, ProcessApplicationResponse};
use crate::dto::credit::{CreditResponse, EligibilityResponse};
use crate::error::{ServiceError, ServiceResult};

/// Application use cases
///
/// Holds the assembled approval service; the rule set is fixed for the
/// lifetime of this value.
#[derive(Clone)]
pub struct ApplicationService {
    clients: Arc<dyn ClientRepository>,
    credits: Arc<dyn CreditRepository>,
    applications: Arc<dyn ApplicationRepository>,
    notifier: Arc<dyn NotificationPort>,
    approval: Arc<CreditApprovalService>,
}

impl ApplicationService {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        credits: Arc<dyn CreditRepository>,
        applications: Arc<dyn ApplicationRepository>,
        notifier: Arc<dyn NotificationPort>,
        approval: Arc<CreditApprovalService>,
    ) -> Self {
        Self {
            clients,
            credits,
            applications,
            notifier,
            approval,
        }
    }

    async fn load(&self, client_id: ClientId, credit_id: &CreditId) -> ServiceResult<(Client, Credit)> {
        let client = self
            .clients
            .find_by_id(client_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Client not found"))?;
        let credit = self
            .credits
            .find_by_id(credit_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Credit product not found"))?;
        Ok((client, credit))
    }

    /// Evaluates a client against a product without recording anything
    #[instrument(skip_all, fields(client_id = %client_id, credit_id = %credit_id))]
    pub async fn check_eligibility(
        &self,
        client_id: ClientId,
        credit_id: &CreditId,
    ) -> ServiceResult<EligibilityResponse> {
        let (client, credit) = self.load(client_id, credit_id).await?;
        let result = self.approval.evaluate(&client, &credit);

        Ok(EligibilityResponse {
            eligible: result.approved,
            final_credit: result.final_credit.as_ref().map(CreditResponse::from),
            reasons: result.reasons,
        })
    }

    /// Evaluates, records and stores one application, then notifies the client
    ///
    /// A notification failure is logged and does not undo the decision.
    #[instrument(skip_all, fields(client_id = %client_id, credit_id = %credit_id))]
    pub async fn process_application(
        &self,
        client_id: ClientId,
        credit_id: &CreditId,
    ) -> ServiceResult<ProcessApplicationResponse> {
        let (client, credit) = self.load(client_id, credit_id).await?;

        let mut application =
            CreditApplication::new(ApplicationId::new_v7(), client.id(), credit_id.clone());
        let result = self.approval.evaluate(&client, &credit);
        application.record_decision(result)?;

        let notified = if application.is_approved() {
            self.notifier.notify_approval(&client, &application).await
        } else {
            self.notifier.notify_rejection(&client, &application).await
        };
        if let Err(err) = notified {
            warn!(application_id = %application.id(), error = %err, "Notification failed");
        }

        self.applications.save(&application).await?;

        info!(
            application_id = %application.id(),
            status = %application.status(),
            "Credit application processed"
        );
        Ok(ProcessApplicationResponse::from(&application))
    }

    pub async fn get_application(&self, id: ApplicationId) -> ServiceResult<ApplicationResponse> {
        let application = self
            .applications
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Application not found"))?;
        Ok(ApplicationResponse::from(&application))
    }

    /// Lists a client's applications, oldest first
    ///
    /// An unknown client simply has no applications.
    pub async fn get_client_applications(
        &self,
        client_id: ClientId,
    ) -> ServiceResult<Vec<ApplicationResponse>> {
        let applications = self.applications.find_by_client_id(client_id).await?;
        Ok(applications.iter().map(ApplicationResponse::from).collect())
    }
}
