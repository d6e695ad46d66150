//! Tool dispatcher - turns a tool call into one API request and one result.
//!
//! Every outcome, including unknown tools and invalid arguments, becomes a
//! `CallToolResult`. Failures are flagged with `isError` instead of being
//! raised as protocol errors.

use std::sync::Arc;

use rmcp::model::{CallToolRequestParam, CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::{info, instrument, warn};

use super::client::DocsFetcher;
use super::definitions::{
    DocsTool, GetDocsFullTool, GetDocsIndexTool, GetDocsPageTool, ListDocsTool, SearchDocsTool,
};
use super::error::DispatchError;
use super::params::parse_arguments;
use super::request::PageNaming;

/// A tool call as received from the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub name: String,
    pub arguments: Option<JsonObject>,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, arguments: Option<JsonObject>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

impl From<CallToolRequestParam> for ToolInvocation {
    fn from(request: CallToolRequestParam) -> Self {
        Self::new(request.name, request.arguments)
    }
}

/// Routes tool calls to their API request and normalizes the outcome.
#[derive(Clone)]
pub struct ToolDispatcher {
    fetcher: Arc<dyn DocsFetcher>,
    naming: PageNaming,
}

impl ToolDispatcher {
    pub fn new(fetcher: Arc<dyn DocsFetcher>, naming: PageNaming) -> Self {
        Self { fetcher, naming }
    }

    /// Execute a tool call. Never fails: errors are reported in the result.
    #[instrument(skip_all, fields(tool = %invocation.name))]
    pub async fn dispatch(&self, invocation: &ToolInvocation) -> CallToolResult {
        match self.try_dispatch(invocation).await {
            Ok(body) => match serde_json::to_string_pretty(&body) {
                Ok(text) => CallToolResult::success(vec![Content::text(text)]),
                Err(e) => error_result(&DispatchError::transport(e.to_string())),
            },
            Err(e) => error_result(&e),
        }
    }

    async fn try_dispatch(&self, invocation: &ToolInvocation) -> Result<Value, DispatchError> {
        let arguments = invocation.arguments.as_ref();

        match invocation.name.as_str() {
            ListDocsTool::NAME => self.run::<ListDocsTool>(arguments).await,
            GetDocsIndexTool::NAME => self.run::<GetDocsIndexTool>(arguments).await,
            GetDocsFullTool::NAME => self.run::<GetDocsFullTool>(arguments).await,
            GetDocsPageTool::NAME => self.run::<GetDocsPageTool>(arguments).await,
            SearchDocsTool::NAME => self.run::<SearchDocsTool>(arguments).await,
            other => Err(DispatchError::unknown_tool(other)),
        }
    }

    /// Parse the parameters, build the request, and perform it.
    async fn run<T: DocsTool>(
        &self,
        arguments: Option<&JsonObject>,
    ) -> Result<Value, DispatchError> {
        let params = parse_arguments::<T::Params>(arguments)?;
        let request = T::api_request(&params, self.naming);

        info!("{} -> {}", T::NAME, request);
        self.fetcher.fetch(&request).await
    }
}

/// Create an error result carrying the caller-facing message.
fn error_result(error: &DispatchError) -> CallToolResult {
    let message = error.to_message();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}
