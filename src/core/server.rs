//! MCP Server implementation and lifecycle management.
//!
//! This module contains the protocol handler. It answers `tools/list` from
//! the static catalog and hands `tools/call` to the dispatcher, which always
//! produces a result, so tool failures never surface as protocol errors.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use super::transport::{self, TransportConfig};
use crate::domains::tools::{
    DocsFetcher, HttpDocsClient, ToolCatalog, ToolDispatcher, ToolInvocation,
};

const INSTRUCTIONS: &str = "Look up library and framework documentation. Start with list_docs to see which documentation sets exist, use get_docs_index for an overview of one set, then read individual pages with get_docs_page or find them with search_docs. get_docs_full returns an entire set at once.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher for tool calls.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server talking to the configured docs API.
    pub fn new(config: Config) -> Result<Self> {
        let user_agent = format!("{}/{}", config.server.name, config.server.version);
        let client = HttpDocsClient::new(&config.api, &user_agent)?;
        info!("Docs API: {}", client.base_url());
        Ok(Self::with_fetcher(config, Arc::new(client)))
    }

    /// Create a server that performs API requests through `fetcher`.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn DocsFetcher>) -> Self {
        let dispatcher = ToolDispatcher::new(fetcher, config.api.page_naming);
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// All advertised tools.
    pub fn tools(&self) -> Vec<Tool> {
        ToolCatalog::get_all_tools().to_vec()
    }

    /// Call a tool by name.
    pub async fn call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        self.dispatcher
            .dispatch(&ToolInvocation::new(name, arguments))
            .await
    }

    /// Serve clients over the configured transport until it shuts down.
    pub async fn run(self, config: TransportConfig) -> Result<()> {
        transport::serve(self, config).await?;
        Ok(())
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let invocation = ToolInvocation::from(request);
        Ok(self.dispatcher.dispatch(&invocation).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{ApiRequest, DispatchError};
    use serde_json::{Value, json};

    struct EchoFetcher;

    #[async_trait::async_trait]
    impl DocsFetcher for EchoFetcher {
        async fn fetch(&self, request: &ApiRequest) -> std::result::Result<Value, DispatchError> {
            Ok(json!({ "path": request.path() }))
        }
    }

    fn server() -> McpServer {
        McpServer::with_fetcher(Config::default(), Arc::new(EchoFetcher))
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, "atlas-docs-mcp-server");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("list_docs"));
    }

    #[test]
    fn test_tools_listed() {
        assert_eq!(server().tools().len(), 5);
    }

    #[test]
    fn test_call_uses_configured_naming() {
        let mut config = Config::default();
        config.api.page_naming = crate::domains::tools::PageNaming::Bare;
        let server = McpServer::with_fetcher(config, Arc::new(EchoFetcher));

        let args = json!({ "docName": "react" }).as_object().cloned();
        let result = tokio_test::block_on(server.call("get_docs_index", args));

        assert_eq!(result.is_error, Some(false));
        let RawContent::Text(text) = &result.content[0].raw else {
            panic!("expected text content");
        };
        let body: Value = serde_json::from_str(&text.text).unwrap();
        assert_eq!(body["path"], "/docs/react/pages/llms.txt");
    }

    #[test]
    fn test_new_builds_http_client() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "atlas-docs-mcp-server");
    }

    #[cfg(feature = "tcp")]
    #[tokio::test]
    async fn test_run_reports_bind_failure() {
        use crate::core::{Error, TransportError, transport::TcpConfig};

        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();
        let transport = TransportConfig::Tcp(TcpConfig {
            port,
            host: "127.0.0.1".to_string(),
        });

        let err = server().run(transport).await.unwrap_err();
        assert!(matches!(err, Error::Transport(TransportError::Bind { .. })));
    }
}
