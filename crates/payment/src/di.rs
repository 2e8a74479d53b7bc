use std::sync::Arc;

use anyhow::Result;
use shared::{
    abstract_trait::{
        cipher::DynCardCipher,
        payment::{
            repository::{command::DynPaymentCommandRepository, query::DynPaymentQueryRepository},
            service::{command::DynPaymentCommandService, query::DynPaymentQueryService},
        },
    },
    cipher::AesGcmCardCipher,
    config::ConnectionPool,
    repository::payment::{command::PaymentCommandRepository, query::PaymentQueryRepository},
    service::payment::{PaymentCommandService, PaymentQueryService},
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub payment_command: DynPaymentCommandService,
    pub payment_query: DynPaymentQueryService,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool, encryption_key: String) -> Result<Self> {
        let query_repo =
            Arc::new(PaymentQueryRepository::new(db.clone())) as DynPaymentQueryRepository;
        let command_repo =
            Arc::new(PaymentCommandRepository::new(db.clone())) as DynPaymentCommandRepository;
        let cipher = Arc::new(AesGcmCardCipher::new()) as DynCardCipher;

        let payment_command = Arc::new(PaymentCommandService::new(
            query_repo.clone(),
            command_repo,
            cipher.clone(),
            encryption_key.clone(),
        )) as DynPaymentCommandService;

        let payment_query = Arc::new(PaymentQueryService::new(query_repo, cipher, encryption_key))
            as DynPaymentQueryService;

        Ok(Self {
            payment_command,
            payment_query,
        })
    }
}
