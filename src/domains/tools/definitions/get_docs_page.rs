//! `get_docs_page` - fetch a single page of a documentation set.

use schemars::JsonSchema;
use serde::Deserialize;

use super::DocsTool;
use crate::domains::tools::params::ToolParams;
use crate::domains::tools::request::{ApiRequest, PageNaming};

/// Parameters for reading one page.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocsPageParams {
    #[schemars(
        description = "The unique identifier or name of the documentation set you want to explore. Get this from list_docs first if you're unsure.",
        length(min = 1)
    )]
    pub doc_name: String,

    /// Path of the page inside the documentation set.
    #[schemars(
        description = "The root-relative path of the page within the documentation set (e.g. /guides/hooks). Get the available pages from get_docs_index or search_docs first if you're unsure.",
        length(min = 1)
    )]
    pub page_path: String,
}

impl ToolParams for DocsPageParams {
    fn required_text(&self) -> Vec<(&'static str, &str)> {
        vec![("docName", &self.doc_name), ("pagePath", &self.page_path)]
    }
}

pub struct GetDocsPageTool;

impl DocsTool for GetDocsPageTool {
    type Params = DocsPageParams;

    const NAME: &'static str = "get_docs_page";

    const DESCRIPTION: &'static str = "Retrieves a specific documentation page's content. Use this when you already know which page contains the information you need, or after using get_docs_index or search_docs to identify relevant pages. This provides detailed information about a specific topic, function, or feature.";

    fn api_request(params: &DocsPageParams, naming: PageNaming) -> ApiRequest {
        ApiRequest::page(&params.doc_name, &naming.page_path(&params.page_path))
    }
}
