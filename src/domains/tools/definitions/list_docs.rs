//! `list_docs` - enumerate the available documentation sets.

use schemars::JsonSchema;
use serde::Deserialize;

use super::DocsTool;
use crate::domains::tools::params::ToolParams;
use crate::domains::tools::request::{ApiRequest, PageNaming};

/// `list_docs` takes no parameters; anything supplied is ignored.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListDocsParams {}

impl ToolParams for ListDocsParams {}

pub struct ListDocsTool;

impl DocsTool for ListDocsTool {
    type Params = ListDocsParams;

    const NAME: &'static str = "list_docs";

    const DESCRIPTION: &'static str = "Lists all available documentation libraries and frameworks. Use this first to discover what documentation is available and get basic metadata about each documentation set. Returns a list of documentation sets with their names, descriptions, and types. Follow up with get_docs_index to explore one of them.";

    fn api_request(_params: &ListDocsParams, _naming: PageNaming) -> ApiRequest {
        ApiRequest::docs()
    }
}
