//! TCP transport: line-delimited JSON-RPC, one MCP session per connection.

use std::net::SocketAddr;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Accept connections forever, serving each on its own task.
pub(super) async fn serve(server: McpServer, config: &TcpConfig) -> TransportResult<()> {
    let address = config.address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| TransportError::bind(&address, e))?;

    info!("Ready on {} (JSON-RPC over TCP)", address);

    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                if let Err(e) = stream.set_nodelay(true) {
                    warn!("Failed to set TCP_NODELAY for {}: {}", peer, e);
                }
                tokio::spawn(serve_connection(server.clone(), stream, peer));
            }
            Err(e) => {
                warn!("Failed to accept connection: {}", e);
                // Back off so a persistent accept error does not spin.
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
        }
    }
}

async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let session = match server.serve(stream).await {
        Ok(session) => session,
        Err(e) => {
            warn!("{}: {}", peer, TransportError::handshake(e.to_string()));
            return;
        }
    };
    info!("Session opened for {}", peer);

    match session.waiting().await {
        Ok(_) => info!("Session closed for {}", peer),
        Err(e) => warn!("{}: {}", peer, TransportError::session(e.to_string())),
    }
}
