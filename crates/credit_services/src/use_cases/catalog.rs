//! Credit product listing

use std::sync::Arc;

use domain_credit::CreditRepository;

use crate::dto::credit::CreditResponse;
use crate::error::ServiceResult;

/// Catalog use cases
#[derive(Clone)]
pub struct CreditCatalogService {
    credits: Arc<dyn CreditRepository>,
}

impl CreditCatalogService {
    pub fn new(credits: Arc<dyn CreditRepository>) -> Self {
        Self { credits }
    }

    /// Lists every product on offer
    pub async fn available_credits(&self) -> ServiceResult<Vec<CreditResponse>> {
        let credits = self.credits.find_all().await?;
        Ok(credits.iter().map(CreditResponse::from).collect())
    }
}
