//! Atlas Docs MCP Server Library
//!
//! Exposes the Atlas documentation API to LLM agents as a handful of Model
//! Context Protocol (MCP) tools. Each tool call becomes exactly one HTTP GET
//! against the API and the JSON answer is handed back as text content.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: typed tool parameters, the tool catalog, request building and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use atlas_docs_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     server.run(config.transport).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
