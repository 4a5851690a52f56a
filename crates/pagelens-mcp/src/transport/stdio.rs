//! Stdio transport. Reads JSON-RPC from stdin and writes to stdout.
//!
//! Each request is handled on its own task so a slow page fetch does not
//! hold up other requests. Responses are written by a single writer task
//! and may arrive out of request order; clients match them by id.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use crate::protocol::ProtocolHandler;
use crate::types::{JsonRpcError, McpError, McpResult, RequestId};

use super::framing;

/// Stdio transport for desktop MCP clients.
pub struct StdioTransport {
    handler: Arc<ProtocolHandler>,
}

impl StdioTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Run until stdin closes and every in-flight request has been answered.
    pub async fn run(&self) -> McpResult<()> {
        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin);
        let mut line = String::new();

        let (tx, rx) = mpsc::unbounded_channel::<String>();
        let writer = tokio::spawn(write_responses(rx));

        tracing::info!("Stdio transport started");

        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line).await.map_err(McpError::Io)?;

            if bytes_read == 0 {
                tracing::info!("EOF on stdin, shutting down");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match framing::parse_message(trimmed) {
                Ok(msg) => {
                    let handler = Arc::clone(&self.handler);
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        if let Some(response) = handler.handle_message(msg).await {
                            send_framed(&tx, &response);
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!("Parse error: {e}");
                    let error_response =
                        JsonRpcError::new(RequestId::Null, e.code(), e.to_string());
                    let value = serde_json::to_value(error_response)
                        .map_err(|e| McpError::InternalError(e.to_string()))?;
                    send_framed(&tx, &value);
                }
            }
        }

        // The writer finishes once every spawned request drops its sender.
        drop(tx);
        writer
            .await
            .map_err(|e| McpError::Transport(e.to_string()))??;

        Ok(())
    }
}

fn send_framed(tx: &mpsc::UnboundedSender<String>, value: &serde_json::Value) {
    match framing::frame_message(value) {
        Ok(framed) => {
            if tx.send(framed).is_err() {
                tracing::warn!("Response dropped: stdout writer has stopped");
            }
        }
        Err(e) => tracing::error!("Failed to frame response: {e}"),
    }
}

async fn write_responses(mut rx: mpsc::UnboundedReceiver<String>) -> McpResult<()> {
    let mut stdout = tokio::io::stdout();
    while let Some(framed) = rx.recv().await {
        stdout
            .write_all(framed.as_bytes())
            .await
            .map_err(McpError::Io)?;
        stdout.flush().await.map_err(McpError::Io)?;
    }
    Ok(())
}
