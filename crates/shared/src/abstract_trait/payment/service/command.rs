use crate::{
    domain::{
        requests::{CancelRequest, PaymentRequest},
        responses::{ApiResponse, PaymentResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentCommandService = Arc<dyn PaymentCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait PaymentCommandServiceTrait {
    async fn pay(&self, req: &PaymentRequest)
    -> Result<ApiResponse<PaymentResponse>, ServiceError>;
    async fn cancel(
        &self,
        req: &CancelRequest,
    ) -> Result<ApiResponse<PaymentResponse>, ServiceError>;
}
