//! Capability negotiation during initialization.

use crate::types::{InitializeParams, InitializeResult, MCP_VERSION};

/// Handshake state. Tool calls are answered either way; a call before the
/// `initialized` notification is only logged.
#[derive(Debug, Clone, Default)]
pub struct NegotiatedCapabilities {
    initialized: bool,
}

impl NegotiatedCapabilities {
    /// Log the client and answer with the server's capabilities.
    ///
    /// A mismatched protocol version is logged, not rejected; the server
    /// always answers with its own version.
    pub fn negotiate(&mut self, params: InitializeParams) -> InitializeResult {
        if params.protocol_version != MCP_VERSION {
            tracing::warn!(
                "Client requested protocol version {}, server supports {}. Proceeding with server version.",
                params.protocol_version,
                MCP_VERSION
            );
        }

        tracing::info!(
            "Initialized with client: {} v{}",
            params.client_info.name,
            params.client_info.version
        );

        InitializeResult::default_result()
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
        tracing::info!("MCP handshake complete");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
