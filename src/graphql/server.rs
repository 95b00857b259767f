use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::BookshelfSchema;
use crate::error::Result;

async fn graphql_handler(
    Extension(schema): Extension<BookshelfSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn health() -> &'static str {
    "ok"
}

/// Routes: `POST /graphql`, `GET /graphql` (playground), `GET /health`.
pub fn router(schema: BookshelfSchema) -> Router {
    Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .route("/health", get(health))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}

/// Bind the listen socket. `host` may be an IP literal or a hostname that
/// resolves locally, such as `localhost`.
pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    let listener = TcpListener::bind((host, port)).await?;
    tracing::debug!(host = %host, port, "Bound listener");
    Ok(listener)
}

/// Serve the schema on `listener` until Ctrl-C.
pub async fn run_server(schema: BookshelfSchema, listener: TcpListener) -> Result<()> {
    let local_addr = listener.local_addr()?;

    tracing::info!(addr = %local_addr, "Listening");
    tracing::info!("GraphQL Playground available at http://{}/graphql", local_addr);

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
