use crate::{
    abstract_trait::{
        cipher::DynCardCipher,
        payment::{
            repository::query::DynPaymentQueryRepository,
            service::query::PaymentQueryServiceTrait,
        },
    },
    codec::decrypt_card_data,
    domain::responses::{ApiResponse, PaymentDetailResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct PaymentQueryService {
    query: DynPaymentQueryRepository,
    cipher: DynCardCipher,
    encryption_key: String,
}

impl PaymentQueryService {
    pub fn new(
        query: DynPaymentQueryRepository,
        cipher: DynCardCipher,
        encryption_key: String,
    ) -> Self {
        Self {
            query,
            cipher,
            encryption_key,
        }
    }
}

#[async_trait]
impl PaymentQueryServiceTrait for PaymentQueryService {
    async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<ApiResponse<PaymentDetailResponse>, ServiceError> {
        info!("🔍 Finding payment id={id}");

        let payment = self.query.find_by_id(id).await.map_err(|e| {
            error!("❌ Failed to find payment {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let card = decrypt_card_data(
            &payment.card_data,
            &self.encryption_key,
            self.cipher.as_ref(),
        )
        .map_err(|e| {
            error!("🔐 Failed to decrypt card data of payment {id}: {e}");
            ServiceError::Payment(e)
        })?;

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Payment retrieved successfully!".into(),
            data: PaymentDetailResponse::new(payment, card),
        })
    }
}
