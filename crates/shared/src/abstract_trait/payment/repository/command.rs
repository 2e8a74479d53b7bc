use crate::{errors::RepositoryError, model::payment::PaymentModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentCommandRepository = Arc<dyn PaymentCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PaymentCommandRepositoryTrait {
    async fn create(&self, payment: &PaymentModel) -> Result<PaymentModel, RepositoryError>;

    /// Stores `cancellation` and flips the payment named by its `origin_id`
    /// from PAID to CANCELLED as one unit. Fails with
    /// `RepositoryError::Conflict` and writes nothing when that payment is
    /// no longer PAID.
    async fn create_cancellation(
        &self,
        cancellation: &PaymentModel,
    ) -> Result<PaymentModel, RepositoryError>;
}
