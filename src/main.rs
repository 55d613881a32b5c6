use clap::Parser;
use std::sync::Arc;
use tarot_relay::adapters::http;
use tarot_relay::core::ConfigProvider;
use tarot_relay::utils::validation::{validate_credential, Validate};
use tarot_relay::utils::logger;
use tarot_relay::{GeminiClient, ReadingHandler, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tarot-relay");
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    let upstream = match config.upstream.resolve().and_then(|u| u.validate().map(|_| u)) {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 憑證於每次請求檢查，這裡只提醒
    if let Err(e) = validate_credential(upstream.api_key()) {
        tracing::warn!("⚠️ {} Every reading request will be answered with 401.", e);
    }

    let candidates = upstream
        .candidates()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");
    tracing::info!(
        "Model candidates: {} (timeout {:?} each)",
        candidates,
        upstream.request_timeout()
    );

    let client = GeminiClient::from_config(&upstream)?;
    let handler = Arc::new(ReadingHandler::new(client, upstream));

    tracing::info!("Listening on http://{}", config.bind);
    http::serve(config.bind, handler).await?;

    Ok(())
}
