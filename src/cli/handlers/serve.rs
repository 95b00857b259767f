use crate::graphql::{bind, build_schema, run_server};
use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let schema = build_schema(ctx.store);

    tokio::runtime::Runtime::new()?.block_on(async {
        let listener = bind(&host, port)
            .await
            .with_context(|| format!("Failed to listen on {}:{}", host, port))?;
        let addr = listener.local_addr()?;

        println!("Starting GraphQL server on http://{}/graphql", addr);
        println!("GraphQL Playground: http://{}/graphql", addr);

        run_server(schema, listener).await?;
        Ok::<_, anyhow::Error>(())
    })
}
