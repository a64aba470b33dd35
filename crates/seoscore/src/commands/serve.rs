//! Serve command: MCP server on stdio.

use clap::Args;
use rmcp::ServiceExt;
use seoscore_core::Config;
use tracing::{info, instrument};

use crate::server::SeoServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let server = SeoServer::new(config.content_format.unwrap_or_default(), max_input_bytes);
    info!(max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .inspect_err(|e| tracing::error!(error = %e, "MCP server failed to start"))?;
    service.waiting().await?;

    info!("MCP server stopped");
    Ok(())
}
