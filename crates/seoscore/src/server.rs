//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes page scoring and readability analysis to AI assistants over stdio.
//! Each tool is a thin wrapper over `seoscore-core`; results are returned as
//! pretty-printed JSON text content.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use seoscore_core::{ContentFormat, ScoringInput, readability, score_content_as};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `score_content` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreContentParams {
    /// The page fields to score.
    #[serde(flatten)]
    pub page: ScoringInput,
    /// How to interpret `content`: "html" (default) or "text".
    pub format: Option<ContentFormat>,
}

/// Parameters for the `check_readability` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckReadabilityParams {
    /// The text or HTML to analyze.
    pub text: String,
    /// How to interpret `text`: "html" (default) or "text".
    pub format: Option<ContentFormat>,
}

/// MCP server exposing the SEO checklist and readability scoring.
#[derive(Clone)]
pub struct SeoServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    default_format: ContentFormat,
    max_input_bytes: Option<usize>,
}

impl Default for SeoServer {
    fn default() -> Self {
        Self::new(ContentFormat::default(), Some(seoscore_core::DEFAULT_MAX_INPUT_BYTES))
    }
}

impl SeoServer {
    fn check_size(&self, len: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if len > max => Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_router]
impl SeoServer {
    /// Create a server that interprets content as `default_format` unless a
    /// call says otherwise.
    pub fn new(default_format: ContentFormat, max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            default_format,
            max_input_bytes,
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        if params.format == "json" {
            return Self::json_result(&serde_json::json!({
                "name": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "description": env!("CARGO_PKG_DESCRIPTION"),
            }));
        }

        let text = format!(
            "{} v{}\n{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
        );
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run the eleven-rule SEO checklist.
    #[tool(
        description = "Score a page against an 11-rule SEO checklist (focus keyword placement, content length, meta lengths, alt text, links, readability). Returns a 0-100 score with per-check results."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_content(
        &self,
        Parameters(params): Parameters<ScoreContentParams>,
    ) -> Result<CallToolResult, McpError> {
        let format = params.format.unwrap_or(self.default_format);
        tracing::debug!(tool = "score_content", %format, "executing MCP tool");
        self.check_size(params.page.byte_len())?;

        let result = score_content_as(&params.page, format);

        tracing::info!(tool = "score_content", score = result.score, "MCP tool completed");
        Self::json_result(&result)
    }

    /// Score readability using Flesch Reading Ease.
    #[tool(
        description = "Check readability of text or HTML. Returns a 0-100 Flesch Reading Ease score, letter grade, and statistics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        Parameters(params): Parameters<CheckReadabilityParams>,
    ) -> Result<CallToolResult, McpError> {
        let format = params.format.unwrap_or(self.default_format);
        tracing::debug!(tool = "check_readability", %format, "executing MCP tool");
        self.check_size(params.text.len())?;

        let report = readability::check_readability(&params.text, format);

        tracing::info!(
            tool = "check_readability",
            score = report.score,
            grade = %report.grade,
            "MCP tool completed"
        );
        Self::json_result(&report)
    }
}

#[tool_handler]
impl ServerHandler for SeoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use score_content for a full SEO checklist and check_readability for prose only.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
