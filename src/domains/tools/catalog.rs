//! Tool catalog - the static set of tools advertised to clients.

use std::sync::LazyLock;

use rmcp::model::Tool;

use super::definitions::{
    DocsTool, GetDocsFullTool, GetDocsIndexTool, GetDocsPageTool, ListDocsTool, SearchDocsTool,
};

static TOOLS: LazyLock<Vec<Tool>> = LazyLock::new(|| {
    vec![
        ListDocsTool::to_tool(),
        GetDocsIndexTool::to_tool(),
        GetDocsFullTool::to_tool(),
        GetDocsPageTool::to_tool(),
        SearchDocsTool::to_tool(),
    ]
});

/// The catalog never changes after startup and does not consult the API.
pub struct ToolCatalog;

impl ToolCatalog {
    /// Get all tools as Tool models (metadata), in advertised order.
    pub fn get_all_tools() -> &'static [Tool] {
        &TOOLS
    }
}
