//! MCP tool implementations.

pub mod analyze_content_density;
pub mod analyze_page;
pub mod check_accessibility;
pub mod current_date;
pub mod greet;
pub mod registry;

pub use registry::ToolRegistry;
