//! `check_accessibility` tool. Heading, alt text, and button label hygiene.

use pagelens::PageAnalyzer;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct AccessibilityParams {
    url: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "check_accessibility".to_string(),
        description: Some(
            "Fetch a web page and check basic accessibility: a single h1, image \
             alt text, labeled buttons, and heading order"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "url": { "type": "string", "description": "Absolute http(s) URL of the page" }
            },
            "required": ["url"]
        }),
    }
}

pub async fn execute(args: Value, analyzer: &PageAnalyzer) -> McpResult<ToolCallResult> {
    let params: AccessibilityParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let metrics = analyzer.accessibility(&params.url).await?;
    Ok(ToolCallResult::json(&metrics))
}
