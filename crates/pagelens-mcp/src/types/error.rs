//! Error types and JSON-RPC error codes for the MCP server.

use pagelens::LensError;

use super::message::{JsonRpcError, RequestId};

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// MCP and PageLens specific error codes.
pub mod mcp_error_codes {
    pub const RESOURCE_NOT_FOUND: i32 = -32802;
    pub const TOOL_NOT_FOUND: i32 = -32803;
    pub const PROMPT_NOT_FOUND: i32 = -32804;

    /// The page could not be fetched or answered with a non-success status.
    pub const PAGE_RETRIEVAL_FAILED: i32 = -32850;

    /// Server: Unauthorized (missing or invalid bearer token).
    pub const UNAUTHORIZED: i32 = -32900;
}

/// All errors that can occur in the MCP server.
#[derive(thiserror::Error, Debug)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    /// Retrieval failure, message passed through from the fetcher.
    #[error("{message}")]
    PageRetrieval {
        message: String,
        status: Option<u16>,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unauthorized")]
    Unauthorized,
}

impl McpError {
    pub fn code(&self) -> i32 {
        use error_codes::*;
        use mcp_error_codes::*;
        match self {
            McpError::ParseError(_) => PARSE_ERROR,
            McpError::InvalidRequest(_) => INVALID_REQUEST,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::InternalError(_) => INTERNAL_ERROR,
            McpError::ResourceNotFound(_) => RESOURCE_NOT_FOUND,
            McpError::ToolNotFound(_) => TOOL_NOT_FOUND,
            McpError::PromptNotFound(_) => PROMPT_NOT_FOUND,
            McpError::PageRetrieval { .. } => PAGE_RETRIEVAL_FAILED,
            McpError::Transport(_) | McpError::Io(_) => INTERNAL_ERROR,
            McpError::Json(_) => PARSE_ERROR,
            McpError::Unauthorized => UNAUTHORIZED,
        }
    }

    pub fn to_json_rpc_error(&self, id: RequestId) -> JsonRpcError {
        let mut error = JsonRpcError::new(id, self.code(), self.to_string());
        if let McpError::PageRetrieval {
            status: Some(status),
            ..
        } = self
        {
            error.error.data = Some(serde_json::json!({ "status": status }));
        }
        error
    }
}

impl From<LensError> for McpError {
    fn from(e: LensError) -> Self {
        match e {
            LensError::InvalidUrl { .. } => McpError::InvalidParams(e.to_string()),
            LensError::Retrieval { .. } | LensError::Request { .. } => McpError::PageRetrieval {
                status: e.status(),
                message: e.to_string(),
            },
        }
    }
}

pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_error_keeps_status() {
        let err: McpError = LensError::Retrieval {
            url: "https://example.com".to_string(),
            status: 404,
        }
        .into();
        assert_eq!(err.code(), mcp_error_codes::PAGE_RETRIEVAL_FAILED);

        let rpc = err.to_json_rpc_error(RequestId::Number(7));
        assert!(rpc.error.message.contains("404"));
        assert_eq!(rpc.error.data, Some(serde_json::json!({ "status": 404 })));
    }

    #[test]
    fn test_invalid_url_is_invalid_params() {
        let err: McpError = LensError::InvalidUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        }
        .into();
        assert_eq!(err.code(), error_codes::INVALID_PARAMS);
    }
}
