// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use tracing_subscriber::{fmt, EnvFilter};

use string_analyzer::config::{load_and_validate_config, validate_config, Config};
use string_analyzer::server::Server;
use string_analyzer::storage::StoreFactory;

/// Load the config file named on the command line, or defaults, then apply
/// environment overrides and validate the result.
fn load_settings(args: &[String]) -> anyhow::Result<Config> {
    let mut config = match args.get(1) {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("failed to load config {}", path))?,
        None => Config::default(),
    };

    config.apply_env_overrides()?;
    validate_config(&config)?;
    Ok(config)
}

/// Exit status when usage should be printed instead of starting: 0 for an
/// explicit help request, 1 for too many arguments.
fn usage_exit_code(args: &[String]) -> Option<i32> {
    if args.get(1).is_some_and(|a| a == "--help" || a == "-h") {
        Some(0)
    } else if args.len() > 2 {
        Some(1)
    } else {
        None
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C; shutting down");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if let Some(code) = usage_exit_code(&args) {
        let program = args.first().map(String::as_str).unwrap_or("string-analyzer");
        eprintln!("Usage: {} [config.yaml]", program);
        eprintln!("Environment overrides: STRING_ANALYZER_HOST, STRING_ANALYZER_PORT,");
        eprintln!("  STRING_ANALYZER_STORAGE_PATH, STRING_ANALYZER_LOG_LEVEL");
        std::process::exit(code);
    }

    let config = load_settings(&args)?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.get_level()));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        storage_backend = config.storage.backend.as_str(),
        "string analyzer starting"
    );

    let store = StoreFactory::from_config(&config.storage)
        .await
        .context("failed to open storage")?;

    let server = Server::start(&config.server, store)
        .await
        .with_context(|| {
            format!(
                "failed to bind {}:{}",
                config.server.get_host(),
                config.server.get_port()
            )
        })?;

    shutdown_signal().await;
    server.shutdown().await.context("server terminated with an error")?;

    tracing::info!("string analyzer stopped");
    Ok(())
}
