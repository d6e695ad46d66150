//! `get_docs_full` - fetch a whole documentation set as one page.

use super::DocsTool;
use super::common::DocNameParams;
use crate::domains::tools::request::{ApiRequest, FULL_PAGE, PageNaming};

pub struct GetDocsFullTool;

impl DocsTool for GetDocsFullTool {
    type Params = DocNameParams;

    const NAME: &'static str = "get_docs_full";

    const DESCRIPTION: &'static str = "Retrieves the complete documentation content in a single consolidated file. Use this when you need comprehensive knowledge about a library or when you need to search through the entire documentation for specific details. Note that this returns a larger volume of text; prefer get_docs_index followed by get_docs_page when only a few topics matter.";

    fn api_request(params: &DocNameParams, naming: PageNaming) -> ApiRequest {
        ApiRequest::page(&params.doc_name, &naming.reserved(FULL_PAGE))
    }
}
