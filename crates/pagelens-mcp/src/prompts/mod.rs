//! MCP prompt templates.

pub mod audit_page;
pub mod improve_scanability;
pub mod registry;

pub use registry::PromptRegistry;
