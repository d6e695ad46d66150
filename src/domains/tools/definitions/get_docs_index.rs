//! `get_docs_index` - fetch the condensed index page of a documentation set.

use super::DocsTool;
use super::common::DocNameParams;
use crate::domains::tools::request::{ApiRequest, INDEX_PAGE, PageNaming};

pub struct GetDocsIndexTool;

impl DocsTool for GetDocsIndexTool {
    type Params = DocNameParams;

    const NAME: &'static str = "get_docs_index";

    const DESCRIPTION: &'static str = "Retrieves a condensed, LLM-friendly index of a documentation set. Use this when you need a high-level understanding of what topics and concepts are covered in a library's documentation. This is ideal for initial exploration or when you need to determine which parts of the documentation are relevant to a user's query. Follow up with get_docs_page for the pages it lists, or search_docs for specific terms.";

    fn api_request(params: &DocNameParams, naming: PageNaming) -> ApiRequest {
        ApiRequest::page(&params.doc_name, &naming.reserved(INDEX_PAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params() -> DocNameParams {
        DocNameParams {
            doc_name: "react".to_string(),
        }
    }

    #[test]
    fn test_request_path_rooted() {
        let request = GetDocsIndexTool::api_request(&params(), PageNaming::Rooted);
        assert_eq!(request.path(), "/docs/react/pages/%2Fllms.txt");
    }

    #[test]
    fn test_request_path_bare() {
        let request = GetDocsIndexTool::api_request(&params(), PageNaming::Bare);
        assert_eq!(request.path(), "/docs/react/pages/llms.txt");
    }

    #[test]
    fn test_schema_describes_doc_name() {
        let tool = GetDocsIndexTool::to_tool();
        let doc_name = &tool.input_schema["properties"]["docName"];
        assert_eq!(doc_name["type"], json!("string"));
        assert_eq!(doc_name["minLength"], json!(1));
        assert!(
            doc_name["description"]
                .as_str()
                .is_some_and(|d| d.contains("list_docs"))
        );
    }
}
