use crate::{
    domain::responses::{ApiResponse, PaymentDetailResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentQueryService = Arc<dyn PaymentQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait PaymentQueryServiceTrait {
    async fn find_by_id(&self, id: &str)
    -> Result<ApiResponse<PaymentDetailResponse>, ServiceError>;
}
