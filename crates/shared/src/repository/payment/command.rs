use crate::{
    abstract_trait::payment::repository::command::PaymentCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::payment::{PaymentModel, PaymentStatus},
};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::{error, warn};

pub struct PaymentCommandRepository {
    db: ConnectionPool,
}

impl PaymentCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

async fn insert(
    conn: &mut PgConnection,
    payment: &PaymentModel,
) -> Result<PaymentModel, RepositoryError> {
    sqlx::query_as::<_, PaymentModel>(
        r#"
        INSERT INTO payments (
            id,
            kind,
            status,
            installment_months,
            price,
            vat,
            card_data,
            origin_id,
            encrypted_record,
            created_at,
            updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        RETURNING
            id,
            kind,
            status,
            installment_months,
            price,
            vat,
            card_data,
            origin_id,
            encrypted_record,
            created_at,
            updated_at
        "#,
    )
    .bind(&payment.id)
    .bind(&payment.kind)
    .bind(&payment.status)
    .bind(&payment.installment_months)
    .bind(payment.price)
    .bind(payment.vat)
    .bind(&payment.card_data)
    .bind(&payment.origin_id)
    .bind(&payment.encrypted_record)
    .fetch_one(conn)
    .await
    .map_err(|e| {
        let unique_violation = e
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());
        if unique_violation {
            warn!("Payment {} collides with an existing row", payment.id);
            return RepositoryError::Conflict(format!("duplicate payment {}", payment.id));
        }
        error!("❌ Database error during payment creation: {e:?}");
        RepositoryError::Sqlx(e)
    })
}

#[async_trait]
impl PaymentCommandRepositoryTrait for PaymentCommandRepository {
    async fn create(&self, payment: &PaymentModel) -> Result<PaymentModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        insert(&mut conn, payment).await
    }

    async fn create_cancellation(
        &self,
        cancellation: &PaymentModel,
    ) -> Result<PaymentModel, RepositoryError> {
        let origin_id = cancellation
            .origin_id
            .as_deref()
            .ok_or_else(|| RepositoryError::Custom("cancellation without origin".into()))?;

        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to open transaction for cancellation of {origin_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        let flipped = sqlx::query(
            r#"
            UPDATE payments
            SET status = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
              AND status = $3
            "#,
        )
        .bind(origin_id)
        .bind(PaymentStatus::Cancelled.as_str())
        .bind(PaymentStatus::Paid.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Database error while cancelling payment {origin_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        if flipped.rows_affected() == 0 {
            warn!("Payment {origin_id} is no longer PAID, cancellation rolled back");
            return Err(RepositoryError::Conflict(format!(
                "payment {origin_id} is not PAID"
            )));
        }

        let saved = insert(&mut tx, cancellation).await?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit cancellation of {origin_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(saved)
    }
}
