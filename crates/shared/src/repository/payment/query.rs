use crate::{
    abstract_trait::payment::repository::query::PaymentQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::payment::PaymentModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct PaymentQueryRepository {
    db: ConnectionPool,
}

impl PaymentQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentQueryRepositoryTrait for PaymentQueryRepository {
    async fn find_by_id(&self, id: &str) -> Result<PaymentModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })?;

        let record = sqlx::query_as::<_, PaymentModel>(
            r#"
            SELECT
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
            FROM payments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error while fetching payment {id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        record.ok_or(RepositoryError::NotFound)
    }
}
