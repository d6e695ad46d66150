//! Tool definitions module.
//!
//! Each tool lives in its own file and implements [`DocsTool`]: its name,
//! the description shown to the model, its parameter struct, and the API
//! request it maps to.

pub mod common;
pub mod get_docs_full;
pub mod get_docs_index;
pub mod get_docs_page;
pub mod list_docs;
pub mod search_docs;

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};

use super::params::ToolParams;
use super::request::{ApiRequest, PageNaming};

pub use get_docs_full::GetDocsFullTool;
pub use get_docs_index::GetDocsIndexTool;
pub use get_docs_page::GetDocsPageTool;
pub use list_docs::ListDocsTool;
pub use search_docs::SearchDocsTool;

/// A documentation tool backed by exactly one API request.
pub trait DocsTool {
    /// Parameters accepted by the tool.
    type Params: ToolParams;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Map parsed parameters to the API request for this tool.
    fn api_request(params: &Self::Params, naming: PageNaming) -> ApiRequest;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
