use anyhow::{Context, Result};
use payment::{command::CommandHandler, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let logger = Logger::new("payment-service", is_dev);

    let config = Config::init().context("Failed to load configuration")?;

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.max_connections,
        config.run_migrations,
    )
    .await
    .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool, &config)
        .await
        .context("Failed to create AppState")?;

    let handler = CommandHandler::new(
        state.di_container.payment_command.clone(),
        state.di_container.payment_query.clone(),
    );

    info!("🚀 Payment service ready, reading commands from stdin");

    let result = tokio::select! {
        result = serve(handler) => result,
        signal = tokio::signal::ctrl_c() => {
            match signal {
                Ok(()) => info!("🛑 Shutdown signal received."),
                Err(e) => warn!("Failed to listen for shutdown signal: {e}"),
            }
            Ok(())
        }
    };

    if let Err(e) = &result {
        error!("❌ Payment service stopped with an error: {e:?}");
    }

    info!("✅ Payment service shutdown complete.");
    logger.shutdown();

    result
}

async fn serve(handler: CommandHandler) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let mut response = handler.handle_line(&line).await;
        response.push('\n');

        stdout
            .write_all(response.as_bytes())
            .await
            .context("Failed to write response")?;
        stdout.flush().await.context("Failed to flush stdout")?;
    }

    info!("📭 Input closed");
    Ok(())
}
