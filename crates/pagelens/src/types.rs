//! Core data types for page metrics and analysis errors.

use serde::{Deserialize, Serialize};

/// Scanability signals derived from a page's prose, images, and headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityMetrics {
    pub url: String,
    pub word_count: usize,
    pub image_count: usize,
    pub heading_count: usize,
    /// Mean words per non-empty paragraph, rounded. Zero without paragraphs.
    pub avg_paragraph_length: usize,
    pub scanability_score: u32,
    /// Paragraph length, image, and heading notes, in that order.
    pub notes: Vec<String>,
}

/// Basic accessibility hygiene signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityMetrics {
    pub url: String,
    pub h1_count: usize,
    pub images_missing_alt: usize,
    pub unlabeled_buttons: usize,
    pub heading_order_issues: usize,
    pub accessibility_score: u32,
    /// H1, alt text, button label, and heading order notes, in that order.
    pub notes: Vec<String>,
}

/// Both metric sets computed from a single retrieval of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    pub url: String,
    pub density: DensityMetrics,
    pub accessibility: AccessibilityMetrics,
}

/// Errors raised while obtaining a page. Page content never produces one.
#[derive(thiserror::Error, Debug)]
pub enum LensError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to fetch {url}: HTTP status {status}")]
    Retrieval { url: String, status: u16 },

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
}

impl LensError {
    /// HTTP status carried by a retrieval failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            LensError::Retrieval { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience result type.
pub type LensResult<T> = Result<T, LensError>;
