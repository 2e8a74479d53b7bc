use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{
    abstract_trait::payment::service::{
        command::DynPaymentCommandService, query::DynPaymentQueryService,
    },
    domain::requests::{CancelRequest, PaymentRequest},
    errors::{ErrorResponse, ServiceError},
};
use tracing::{error, info};

/// One line of driver input.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PaymentCommand {
    Payment(PaymentRequest),
    Cancel(CancelRequest),
    Find { id: String },
}

#[derive(Clone)]
pub struct CommandHandler {
    command: DynPaymentCommandService,
    query: DynPaymentQueryService,
}

impl CommandHandler {
    pub fn new(command: DynPaymentCommandService, query: DynPaymentQueryService) -> Self {
        Self { command, query }
    }

    /// Runs one JSON command and renders the outcome as one JSON line.
    pub async fn handle_line(&self, line: &str) -> String {
        let outcome = match serde_json::from_str::<PaymentCommand>(line) {
            Ok(command) => self.dispatch(command).await,
            Err(e) => {
                error!("❌ Rejected malformed command: {e}");
                Err(ServiceError::Validation(format!("Invalid command: {e}")))
            }
        };

        match outcome {
            Ok(value) => value.to_string(),
            Err(err) => match serde_json::to_string(&ErrorResponse::from(&err)) {
                Ok(body) => body,
                Err(e) => format!(r#"{{"status":"error","message":"{e}"}}"#),
            },
        }
    }

    async fn dispatch(&self, command: PaymentCommand) -> Result<Value, ServiceError> {
        match command {
            PaymentCommand::Payment(req) => {
                info!("📥 Payment command received");
                to_value(self.command.pay(&req).await?)
            }
            PaymentCommand::Cancel(req) => {
                info!("📥 Cancel command received");
                to_value(self.command.cancel(&req).await?)
            }
            PaymentCommand::Find { id } => {
                info!("📥 Find command received for id={id}");
                to_value(self.query.find_by_id(&id).await?)
            }
        }
    }
}

fn to_value<T: Serialize>(response: T) -> Result<Value, ServiceError> {
    serde_json::to_value(response).map_err(|e| ServiceError::Internal(e.to_string()))
}
