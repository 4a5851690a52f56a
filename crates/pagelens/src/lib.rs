//! PageLens: heuristic scanability and accessibility scoring of raw HTML.

pub mod accessibility;
pub mod analyzer;
pub mod density;
pub mod fetch;
pub mod markup;
pub mod notes;
pub mod types;

pub use accessibility::analyze_accessibility;
pub use analyzer::{report_for_markup, PageAnalyzer};
pub use density::analyze_density;
pub use fetch::{validate_url, HttpFetcher, PageSource, DEFAULT_TIMEOUT_MS};
pub use types::*;
