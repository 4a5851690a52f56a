//! `audit_page` prompt. Combined scanability and accessibility review.

use serde_json::Value;

use crate::types::{McpResult, PromptGetResult, PromptMessage, ToolContent};

use super::registry::required_str;

pub fn expand(args: Value) -> McpResult<PromptGetResult> {
    let url = required_str(&args, "url")?;

    let text = format!(
        "Review the page at {url}.\n\n\
         Please:\n\
         1. Call the analyze_page tool with url \"{url}\"\n\
         2. Summarize the scanability score and what lowered it\n\
         3. Summarize the accessibility score and list each defect count\n\
         4. Propose the three fixes with the biggest score impact\n\
         5. Remember these are heuristic signals, not a compliance audit"
    );

    Ok(PromptGetResult {
        description: Some("Scanability and accessibility review of a page".to_string()),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: ToolContent::Text { text },
        }],
    })
}
