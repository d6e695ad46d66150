//! Tools domain module.
//!
//! Everything needed to answer `tools/list` and `tools/call`.
//!
//! ## Architecture
//!
//! - `definitions/` - one file per tool: name, description, parameters, API path
//! - `params.rs` - typed argument parsing shared by every tool
//! - `request.rs` - percent-encoded API request paths
//! - `client.rs` - the HTTP fetcher behind the `DocsFetcher` seam
//! - `catalog.rs` - the static list of advertised tools
//! - `dispatcher.rs` - validation, one request per call, result normalization
//! - `error.rs` - dispatch and validation errors
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `DocsTool`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `ToolCatalog` and to the match in `ToolDispatcher`

pub mod catalog;
pub mod client;
pub mod definitions;
pub mod dispatcher;
mod error;
pub mod params;
pub mod request;

pub use catalog::ToolCatalog;
pub use client::{DocsFetcher, HttpDocsClient};
pub use dispatcher::{ToolDispatcher, ToolInvocation};
pub use error::{DispatchError, GENERIC_API_FAILURE, ValidationError};
pub use params::{ToolParams, parse_arguments};
pub use request::{ApiRequest, FULL_PAGE, INDEX_PAGE, PageNaming};
