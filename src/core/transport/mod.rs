//! Transports the MCP server can be reached over.
//!
//! - **STDIO** (feature `stdio`, default): one session on stdin/stdout
//! - **TCP** (feature `tcp`): one session per accepted connection

mod config;
mod error;

#[cfg(feature = "tcp")]
mod tcp;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

use tracing::info;

use crate::core::McpServer;

/// Serve `server` over the selected transport until it shuts down.
pub async fn serve(server: McpServer, config: TransportConfig) -> TransportResult<()> {
    info!("Starting transport: {}", config.description());

    match config {
        #[cfg(feature = "stdio")]
        TransportConfig::Stdio => serve_stdio(server).await,
        #[cfg(feature = "tcp")]
        TransportConfig::Tcp(tcp) => tcp::serve(server, &tcp).await,
    }
}

/// Run a single session on stdin/stdout until stdin closes.
#[cfg(feature = "stdio")]
async fn serve_stdio(server: McpServer) -> TransportResult<()> {
    use rmcp::ServiceExt;

    let session = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::handshake(e.to_string()))?;
    info!("Ready on stdin/stdout");

    session
        .waiting()
        .await
        .map_err(|e| TransportError::session(e.to_string()))?;

    info!("stdin closed");
    Ok(())
}
