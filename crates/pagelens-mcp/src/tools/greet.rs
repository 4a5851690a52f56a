//! `greet` tool. Say hello, in a chosen or random language.

use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

/// (language, greeting word)
const GREETINGS: &[(&str, &str)] = &[
    ("english", "Hello"),
    ("spanish", "Hola"),
    ("french", "Bonjour"),
    ("german", "Hallo"),
    ("italian", "Ciao"),
    ("portuguese", "Olá"),
    ("japanese", "Konnichiwa"),
];

#[derive(Debug, Deserialize)]
struct GreetParams {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

pub fn definition() -> ToolDefinition {
    let languages: Vec<&str> = GREETINGS.iter().map(|(lang, _)| *lang).collect();
    ToolDefinition {
        name: "greet".to_string(),
        description: Some(
            "Greet someone. Picks a random language unless one is given".to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Who to greet" },
                "language": { "type": "string", "enum": languages }
            }
        }),
    }
}

pub async fn execute(args: Value) -> McpResult<ToolCallResult> {
    let params: GreetParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let (language, word) = match params.language.as_deref() {
        Some(requested) => GREETINGS
            .iter()
            .find(|(lang, _)| lang.eq_ignore_ascii_case(requested.trim()))
            .copied()
            .ok_or_else(|| {
                McpError::InvalidParams(format!("Unsupported language: {requested}"))
            })?,
        None => *GREETINGS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&GREETINGS[0]),
    };

    let name = params
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("there");

    Ok(ToolCallResult::json(&json!({
        "greeting": format!("{word}, {name}!"),
        "language": language
    })))
}
