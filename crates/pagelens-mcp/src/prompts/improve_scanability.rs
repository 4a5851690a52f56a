//! `improve_scanability` prompt. Rewrite guidance for dense pages.

use serde_json::Value;

use crate::types::{McpResult, PromptGetResult, PromptMessage, ToolContent};

use super::registry::required_str;

pub fn expand(args: Value) -> McpResult<PromptGetResult> {
    let url = required_str(&args, "url")?;
    let audience = args
        .get("audience")
        .and_then(Value::as_str)
        .unwrap_or("general readers");

    let text = format!(
        "Make the page at {url} easier to scan for {audience}.\n\n\
         Please:\n\
         1. Call analyze_content_density with url \"{url}\"\n\
         2. If paragraphs average more than 100 words, suggest where to split them\n\
         3. If the page has no headings, draft a heading outline\n\
         4. If the page has no images, suggest where a visual would help"
    );

    Ok(PromptGetResult {
        description: Some("Guide for improving page scanability".to_string()),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: ToolContent::Text { text },
        }],
    })
}
