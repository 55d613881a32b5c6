use crate::core::handler::{HandlerResponse, ReadingHandler};
use crate::domain::ports::{ConfigProvider, Generator};
use crate::utils::error::Result;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Every path and method is routed to the reading handler, which does its own dispatch.
pub fn router<G, C>(handler: Arc<ReadingHandler<G, C>>) -> Router
where
    G: Generator + 'static,
    C: ConfigProvider + 'static,
{
    Router::new()
        .fallback(dispatch::<G, C>)
        .with_state(handler)
}

pub async fn serve<G, C>(addr: SocketAddr, handler: Arc<ReadingHandler<G, C>>) -> Result<()>
where
    G: Generator + 'static,
    C: ConfigProvider + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    serve_with_listener(listener, handler).await
}

pub async fn serve_with_listener<G, C>(
    listener: TcpListener,
    handler: Arc<ReadingHandler<G, C>>,
) -> Result<()>
where
    G: Generator + 'static,
    C: ConfigProvider + 'static,
{
    tracing::info!(addr = ?listener.local_addr().ok(), "Reading relay ready to accept connections");

    axum::serve(listener, router(handler))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Reading relay stopped");
    Ok(())
}

async fn dispatch<G, C>(
    State(handler): State<Arc<ReadingHandler<G, C>>>,
    method: Method,
    body: Bytes,
) -> Response
where
    G: Generator + 'static,
    C: ConfigProvider + 'static,
{
    into_response(handler.handle(method.as_str(), &body).await)
}

fn into_response(response: HandlerResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder().status(status);
    for (name, value) in response.headers {
        builder = builder.header(name, value);
    }

    builder
        .body(Body::from(response.body.unwrap_or_default()))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
