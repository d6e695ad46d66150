//! Parameters shared by several tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::params::ToolParams;

/// Parameters of tools that address a whole documentation set.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocNameParams {
    /// Identifier of the documentation set.
    #[schemars(
        description = "The unique identifier or name of the documentation set you want to explore. Get this from list_docs first if you're unsure.",
        length(min = 1)
    )]
    pub doc_name: String,
}

impl ToolParams for DocNameParams {
    fn required_text(&self) -> Vec<(&'static str, &str)> {
        vec![("docName", &self.doc_name)]
    }
}
