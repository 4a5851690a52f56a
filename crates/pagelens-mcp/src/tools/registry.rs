//! Tool registration and dispatch.

use pagelens::PageAnalyzer;
use serde_json::Value;

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{analyze_content_density, analyze_page, check_accessibility, current_date, greet};

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![
            analyze_content_density::definition(),
            check_accessibility::definition(),
            analyze_page::definition(),
            greet::definition(),
            current_date::definition(),
        ]
    }

    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        analyzer: &PageAnalyzer,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        tracing::debug!(tool = name, "Tool call");

        match name {
            "analyze_content_density" => analyze_content_density::execute(args, analyzer).await,
            "check_accessibility" => check_accessibility::execute(args, analyzer).await,
            "analyze_page" => analyze_page::execute(args, analyzer).await,
            "greet" => greet::execute(args).await,
            "current_date" => current_date::execute(args).await,
            _ => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}
