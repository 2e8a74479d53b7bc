use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_sdk::logs::SdkLoggerProvider;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub struct Logger {
    _guard: non_blocking::WorkerGuard,
    provider: Option<SdkLoggerProvider>,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Self {
        let log_dir = if is_dev { "./logs" } else { "/var/log/payment" };
        let file_name = format!("payment_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        // stdout carries the command responses, so the console layer writes to stderr
        let console_layer = fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = if !is_dev {
            Some(SdkLoggerProvider::builder().build())
        } else {
            None
        };

        if let Some(provider) = &provider {
            let otel_filter = EnvFilter::new("info")
                .add_directive("opentelemetry=off".parse().expect("static directive"))
                .add_directive("sqlx=off".parse().expect("static directive"));

            registry
                .with(OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter))
                .init();
        } else {
            registry.init();
        }

        Self {
            _guard: guard,
            provider,
        }
    }

    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to shut down log provider: {e}");
            }
        }
    }
}
