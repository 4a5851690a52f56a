//! `analyze_page` tool. Density and accessibility from a single fetch.

use pagelens::PageAnalyzer;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct PageParams {
    url: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "analyze_page".to_string(),
        description: Some(
            "Fetch a web page once and return both the content density and the \
             accessibility report"
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
    let params: PageParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let report = analyzer.report(&params.url).await?;
    Ok(ToolCallResult::json(&report))
}
