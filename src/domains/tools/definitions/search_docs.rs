//! `search_docs` - full-text search within a documentation set.

use schemars::JsonSchema;
use serde::Deserialize;

use super::DocsTool;
use crate::domains::tools::params::ToolParams;
use crate::domains::tools::request::{ApiRequest, PageNaming};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocsParams {
    #[schemars(
        description = "The unique identifier or name of the documentation set you want to explore. Get this from list_docs first if you're unsure.",
        length(min = 1)
    )]
    pub doc_name: String,

    #[schemars(
        description = "Free-text search query describing the topic, API or concept you are looking for.",
        length(min = 1)
    )]
    pub query: String,
}

impl ToolParams for SearchDocsParams {
    fn required_text(&self) -> Vec<(&'static str, &str)> {
        vec![("docName", &self.doc_name), ("query", &self.query)]
    }
}

pub struct SearchDocsTool;

impl DocsTool for SearchDocsTool {
    type Params = SearchDocsParams;

    const NAME: &'static str = "search_docs";

    const DESCRIPTION: &'static str = "Searches a documentation set for pages matching a query. Use this when you are looking for a specific function, option, error message or concept and do not know which page covers it. Returns matching pages with their paths and relevance; pass a path to get_docs_page to read the full page.";

    fn api_request(params: &SearchDocsParams, _naming: PageNaming) -> ApiRequest {
        ApiRequest::search(&params.doc_name, &params.query)
    }
}
