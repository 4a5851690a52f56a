//! Prompt registration and dispatch.

use serde_json::Value;

use crate::types::{McpError, McpResult, PromptArgument, PromptDefinition, PromptGetResult};

use super::{audit_page, improve_scanability};

pub struct PromptRegistry;

impl PromptRegistry {
    pub fn list_prompts() -> Vec<PromptDefinition> {
        vec![
            PromptDefinition {
                name: "audit_page".to_string(),
                description: Some(
                    "Guide for a combined scanability and accessibility review of a page"
                        .to_string(),
                ),
                arguments: Some(vec![PromptArgument {
                    name: "url".to_string(),
                    description: Some("Page to review".to_string()),
                    required: true,
                }]),
            },
            PromptDefinition {
                name: "improve_scanability".to_string(),
                description: Some(
                    "Guide for rewriting a page so it is easier to scan".to_string(),
                ),
                arguments: Some(vec![
                    PromptArgument {
                        name: "url".to_string(),
                        description: Some("Page to improve".to_string()),
                        required: true,
                    },
                    PromptArgument {
                        name: "audience".to_string(),
                        description: Some("Who reads the page".to_string()),
                        required: false,
                    },
                ]),
            },
        ]
    }

    pub fn get(name: &str, arguments: Option<Value>) -> McpResult<PromptGetResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            "audit_page" => audit_page::expand(args),
            "improve_scanability" => improve_scanability::expand(args),
            _ => Err(McpError::PromptNotFound(name.to_string())),
        }
    }
}

/// Read a required string argument.
pub(crate) fn required_str<'a>(args: &'a Value, name: &str) -> McpResult<&'a str> {
    args.get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| McpError::InvalidParams(format!("'{name}' argument is required")))
}
