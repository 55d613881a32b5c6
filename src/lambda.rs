#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use std::sync::Arc;
#[cfg(feature = "lambda")]
use tarot_relay::adapters::gateway::{handle_event, GatewayRequest, GatewayResponse};
#[cfg(feature = "lambda")]
use tarot_relay::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use tarot_relay::{GeminiClient, LambdaConfig, ReadingHandler};

#[cfg(feature = "lambda")]
type Handler = ReadingHandler<GeminiClient, LambdaConfig>;

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &Handler,
    event: LambdaEvent<GatewayRequest>,
) -> Result<GatewayResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Handling reading request");
    Ok(handle_event(handler, event.payload).await)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入一次，之後所有呼叫共用
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let client = GeminiClient::from_config(&config)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let handler = Arc::new(ReadingHandler::new(client, config));

    run(service_fn(move |event: LambdaEvent<GatewayRequest>| {
        let handler = Arc::clone(&handler);
        async move { function_handler(&handler, event).await }
    }))
    .await
}
