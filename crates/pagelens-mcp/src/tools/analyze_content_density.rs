//! `analyze_content_density` tool. Scanability of a page's prose.

use pagelens::PageAnalyzer;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct DensityParams {
    url: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "analyze_content_density".to_string(),
        description: Some(
            "Fetch a web page and score how easy it is to scan: word count, \
             average paragraph length, images, and headings"
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
    let params: DensityParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let metrics = analyzer.density(&params.url).await?;
    Ok(ToolCallResult::json(&metrics))
}
