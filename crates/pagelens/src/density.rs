//! Content density scoring, i.e. how easy a page is to scan.

use crate::markup::{extract_tags, heading_levels, normalize_text, void_tags, word_count};
use crate::notes;
use crate::types::DensityMetrics;

const BASE_SCORE: u32 = 100;
const LONG_PARAGRAPH_PENALTY: u32 = 20;
const NO_IMAGES_PENALTY: u32 = 20;
const NO_HEADINGS_PENALTY: u32 = 20;

/// Compute scanability metrics for a page's markup.
///
/// Pure function of `markup`; `url` is copied into the record for
/// traceability only.
pub fn analyze_density(url: &str, markup: &str) -> DensityMetrics {
    let paragraph_words: Vec<usize> = extract_tags(markup, "p")
        .map(|frag| normalize_text(frag.inner))
        .filter(|text| !text.is_empty())
        .map(|text| word_count(&text))
        .collect();

    let word_total: usize = paragraph_words.iter().sum();
    let image_count = void_tags(markup, "img").count();
    let heading_count = heading_levels(markup).len();
    let avg_paragraph_length = average_rounded(word_total, paragraph_words.len());

    let mut score = BASE_SCORE;
    if avg_paragraph_length > notes::MAX_AVG_PARAGRAPH_WORDS {
        score = score.saturating_sub(LONG_PARAGRAPH_PENALTY);
    }
    if image_count == 0 {
        score = score.saturating_sub(NO_IMAGES_PENALTY);
    }
    if heading_count == 0 {
        score = score.saturating_sub(NO_HEADINGS_PENALTY);
    }

    tracing::debug!(
        url,
        paragraphs = paragraph_words.len(),
        words = word_total,
        images = image_count,
        headings = heading_count,
        score,
        "Computed content density"
    );

    DensityMetrics {
        url: url.to_string(),
        word_count: word_total,
        image_count,
        heading_count,
        avg_paragraph_length,
        scanability_score: score,
        notes: vec![
            notes::paragraph_length(avg_paragraph_length),
            notes::images(image_count),
            notes::headings(heading_count),
        ],
    }
}

/// Integer mean rounded half up; zero when there is nothing to average.
fn average_rounded(total: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (total + count / 2) / count
}
