use crate::{errors::RepositoryError, model::payment::PaymentModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentQueryRepository = Arc<dyn PaymentQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PaymentQueryRepositoryTrait {
    async fn find_by_id(&self, id: &str) -> Result<PaymentModel, RepositoryError>;
}
