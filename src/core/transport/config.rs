//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with JSON-RPC messages.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

#[cfg(feature = "tcp")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

impl Default for TransportConfig {
    #[cfg(feature = "stdio")]
    fn default() -> Self {
        Self::Stdio
    }

    #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
    fn default() -> Self {
        Self::Tcp(TcpConfig::default())
    }
}

#[cfg(not(any(feature = "stdio", feature = "tcp")))]
compile_error!("enable at least one transport feature: stdio or tcp");

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    /// `host:port` to listen on.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the config from a variable lookup.
    ///
    /// `MCP_TRANSPORT` selects the transport; unknown values fall back to the
    /// default transport. `MCP_TCP_PORT` and `MCP_TCP_HOST` tune TCP.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let transport = var("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                port: var("MCP_TCP_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_TCP_PORT),
                host: var("MCP_TCP_HOST").unwrap_or_else(default_host),
            }),
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}", cfg.address()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::from_vars(lookup(&[]));
        assert!(matches!(config, TransportConfig::Stdio));
        assert_eq!(config.description(), "STDIO (standard MCP mode)");
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unknown_transport_falls_back() {
        let config = TransportConfig::from_vars(lookup(&[("MCP_TRANSPORT", "carrier-pigeon")]));
        assert!(matches!(config, TransportConfig::Stdio));
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_vars() {
        let config = TransportConfig::from_vars(lookup(&[
            ("MCP_TRANSPORT", "TCP"),
            ("MCP_TCP_PORT", "4000"),
            ("MCP_TCP_HOST", "0.0.0.0"),
        ]));
        assert_eq!(config.description(), "TCP on 0.0.0.0:4000");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_defaults() {
        let config = TransportConfig::from_vars(lookup(&[
            ("MCP_TRANSPORT", "tcp"),
            ("MCP_TCP_PORT", "not-a-port"),
        ]));
        let TransportConfig::Tcp(tcp) = config else {
            panic!("expected tcp transport");
        };
        assert_eq!(tcp.address(), "127.0.0.1:3000");
    }
}
