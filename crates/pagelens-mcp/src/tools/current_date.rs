//! `current_date` tool. Today's date in the server's local time zone.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

const DEFAULT_FORMAT: &str = "%A, %B %-d, %Y";

#[derive(Debug, Deserialize)]
struct DateParams {
    #[serde(default)]
    format: Option<String>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "current_date".to_string(),
        description: Some("Return the current local date".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {
                "format": {
                    "type": "string",
                    "description": "strftime-style format",
                    "default": DEFAULT_FORMAT
                }
            }
        }),
    }
}

pub async fn execute(args: Value) -> McpResult<ToolCallResult> {
    let params: DateParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let format = params.format.as_deref().unwrap_or(DEFAULT_FORMAT);
    let now = chrono::Local::now();
    let date = format_date(&now, format)?;

    Ok(ToolCallResult::json(&json!({
        "date": date,
        "iso": now.date_naive().to_string()
    })))
}

/// Format with a user-supplied pattern, rejecting invalid specifiers instead
/// of panicking inside `Display`.
fn format_date<Tz>(now: &chrono::DateTime<Tz>, format: &str) -> McpResult<String>
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(McpError::InvalidParams(format!(
            "Invalid date format: {format}"
        )));
    }

    let mut out = String::new();
    write!(out, "{}", now.format(format))
        .map_err(|_| McpError::InvalidParams(format!("Invalid date format: {format}")))?;
    Ok(out)
}
