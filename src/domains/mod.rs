//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently has a single domain: the documentation tools exposed
//! to MCP clients.

pub mod tools;
