use crate::{
    abstract_trait::{
        cipher::DynCardCipher,
        payment::{
            repository::{command::DynPaymentCommandRepository, query::DynPaymentQueryRepository},
            service::command::PaymentCommandServiceTrait,
        },
    },
    codec::{
        CardData, WireRecord, decrypt_card_data, encode_cancel_record, encode_payment_record,
        encrypt_card_data,
    },
    domain::{
        requests::{CancelRequest, PaymentRequest, validate_cancel, validate_payment},
        responses::{ApiResponse, PaymentResponse},
    },
    errors::{PaymentError, RepositoryError, ServiceError, format_validation_errors},
    model::payment::{PaymentKind, PaymentModel, PaymentStatus},
    utils::{Masked, compute_vat, generate_unique_id},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct PaymentCommandService {
    query: DynPaymentQueryRepository,
    command: DynPaymentCommandRepository,
    cipher: DynCardCipher,
    encryption_key: String,
}

impl PaymentCommandService {
    pub fn new(
        query: DynPaymentQueryRepository,
        command: DynPaymentCommandRepository,
        cipher: DynCardCipher,
        encryption_key: String,
    ) -> Self {
        Self {
            query,
            command,
            cipher,
            encryption_key,
        }
    }

    fn seal(&self, record: &WireRecord) -> Result<String, PaymentError> {
        Ok(self.cipher.encrypt(record.as_str(), &self.encryption_key)?)
    }
}

fn check_format<T: Validate>(req: &T) -> Result<(), ServiceError> {
    if let Err(validation_errors) = req.validate() {
        let error_msg = format_validation_errors(&validation_errors);
        error!("Validation failed: {error_msg}");
        return Err(ServiceError::Validation(error_msg));
    }
    Ok(())
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

#[async_trait]
impl PaymentCommandServiceTrait for PaymentCommandService {
    async fn pay(
        &self,
        req: &PaymentRequest,
    ) -> Result<ApiResponse<PaymentResponse>, ServiceError> {
        info!(
            "💳 Starting payment for card={}",
            Masked(text(&req.card_number))
        );

        if let Err(e) = validate_payment(req) {
            error!("Validation failed: {e}");
            return Err(e.into());
        }
        check_format(req)?;

        let price = req
            .payment_price
            .ok_or(PaymentError::MissingField("payment_price"))?;
        let card = CardData::new(
            text(&req.card_number),
            text(&req.expiration_date),
            text(&req.cvc),
        );

        let id = generate_unique_id();
        let vat = compute_vat(price, req.vat.as_deref())?;

        let card_data = encrypt_card_data(
            &card.card_number,
            &card.expiration_date,
            &card.cvc,
            &self.encryption_key,
            self.cipher.as_ref(),
        )
        .map_err(|e| {
            error!("🔐 Failed to encrypt card data for payment {id}: {e}");
            e
        })?;

        let encrypted_record = encode_payment_record(req, &id, vat, &card_data)
            .and_then(|record| self.seal(&record))
            .map_err(|e| {
                error!("🧾 Failed to build payment record {id}: {e}");
                e
            })?;

        let payment = PaymentModel {
            id,
            kind: PaymentKind::Payment.to_string(),
            status: PaymentStatus::Paid.to_string(),
            installment_months: text(&req.installment_months).to_string(),
            price,
            vat,
            card_data,
            origin_id: None,
            encrypted_record,
            created_at: None,
            updated_at: None,
        };

        let saved = self.command.create(&payment).await.map_err(|e| {
            error!("💥 Failed to store payment {}: {e:?}", payment.id);
            ServiceError::Repo(e)
        })?;

        info!(
            "✅ Payment {} recorded: price={} vat={}",
            saved.id, saved.price, saved.vat
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Payment processed successfully!".into(),
            data: PaymentResponse::new(saved, &card),
        })
    }

    async fn cancel(
        &self,
        req: &CancelRequest,
    ) -> Result<ApiResponse<PaymentResponse>, ServiceError> {
        info!("↩️ Starting cancellation of payment id={}", text(&req.id));

        if let Err(e) = validate_cancel(req) {
            error!("Validation failed: {e}");
            return Err(e.into());
        }
        check_format(req)?;

        let origin_id = text(&req.id);
        let cancel_price = req
            .cancel_price
            .ok_or(PaymentError::MissingField("cancel_price"))?;

        let payment = self.query.find_by_id(origin_id).await.map_err(|e| {
            error!("🔍 Failed to find payment {origin_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if payment.kind() != Some(PaymentKind::Payment) {
            warn!(
                "Transaction {origin_id} is a {} and cannot be cancelled",
                payment.kind
            );
            return Err(ServiceError::NotCancellable(origin_id.to_string()));
        }
        if payment.status() == Some(PaymentStatus::Cancelled) {
            warn!("Payment {origin_id} was already cancelled");
            return Err(ServiceError::AlreadyCancelled(origin_id.to_string()));
        }
        if cancel_price != payment.price {
            warn!(
                "Cancel price {cancel_price} does not match payment {origin_id} price {}",
                payment.price
            );
            return Err(ServiceError::CancelAmountMismatch {
                expected: payment.price,
                actual: cancel_price,
            });
        }

        let card = decrypt_card_data(
            &payment.card_data,
            &self.encryption_key,
            self.cipher.as_ref(),
        )
        .map_err(|e| {
            error!("🔐 Failed to recover card data of payment {origin_id}: {e}");
            e
        })?;

        let id = generate_unique_id();
        let encrypted_record = encode_cancel_record(&payment, &id, &card)
            .and_then(|record| self.seal(&record))
            .map_err(|e| {
                error!("🧾 Failed to build cancel record {id}: {e}");
                e
            })?;

        let cancellation = PaymentModel {
            id,
            kind: PaymentKind::Cancel.to_string(),
            status: PaymentStatus::Cancelled.to_string(),
            installment_months: payment.installment_months.clone(),
            price: payment.price,
            vat: payment.vat,
            card_data: payment.card_data.clone(),
            origin_id: Some(payment.id.clone()),
            encrypted_record,
            created_at: None,
            updated_at: None,
        };

        let saved = self
            .command
            .create_cancellation(&cancellation)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(reason) => {
                    warn!("Cancellation of {} lost a race: {reason}", payment.id);
                    ServiceError::AlreadyCancelled(payment.id.clone())
                }
                e => {
                    error!("💥 Failed to store cancellation {}: {e:?}", cancellation.id);
                    ServiceError::Repo(e)
                }
            })?;

        info!(
            "✅ Payment {} cancelled by {} for card={}",
            payment.id,
            saved.id,
            Masked(&card.card_number)
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Payment cancelled successfully!".into(),
            data: PaymentResponse::new(saved, &card),
        })
    }
}
