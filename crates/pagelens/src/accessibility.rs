//! Accessibility surface scoring: headings, alt text, and button labels.
//!
//! This is a heuristic scan, not a conformance audit. Every check counts
//! matches in the raw markup and the score subtracts a fixed penalty per
//! defect.

use crate::markup::{
    attribute_is_blank, extract_tags, heading_levels, normalize_text, void_tags,
};
use crate::notes;
use crate::types::AccessibilityMetrics;

const BASE_SCORE: u32 = 100;
const MISSING_H1_PENALTY: u32 = 10;
const MULTIPLE_H1_PENALTY: u32 = 10;
const MISSING_ALT_PENALTY: u32 = 2;
const UNLABELED_BUTTON_PENALTY: u32 = 3;
const HEADING_ORDER_PENALTY: u32 = 5;

/// Compute accessibility metrics for a page's markup.
pub fn analyze_accessibility(url: &str, markup: &str) -> AccessibilityMetrics {
    let h1_count = extract_tags(markup, "h1").count();

    let images_missing_alt = void_tags(markup, "img")
        .filter(|img| attribute_is_blank(img.open_tag, "alt"))
        .count();

    let unlabeled_buttons = extract_tags(markup, "button")
        .filter(|button| {
            normalize_text(button.inner).is_empty()
                && attribute_is_blank(button.open_tag, "aria-label")
        })
        .count();

    let heading_order_issues = count_heading_jumps(&heading_levels(markup));

    let score = score(
        h1_count,
        images_missing_alt,
        unlabeled_buttons,
        heading_order_issues,
    );

    tracing::debug!(
        url,
        h1 = h1_count,
        missing_alt = images_missing_alt,
        unlabeled_buttons,
        heading_order_issues,
        score,
        "Computed accessibility surface"
    );

    AccessibilityMetrics {
        url: url.to_string(),
        h1_count,
        images_missing_alt,
        unlabeled_buttons,
        heading_order_issues,
        accessibility_score: score,
        notes: vec![
            notes::h1(h1_count),
            notes::alt_text(images_missing_alt),
            notes::button_labels(unlabeled_buttons),
            notes::heading_order(heading_order_issues),
        ],
    }
}

/// Count consecutive heading pairs whose level rises by more than two.
pub fn count_heading_jumps(levels: &[u8]) -> usize {
    levels
        .windows(2)
        .filter(|pair| pair[1] > pair[0] && pair[1] - pair[0] > notes::MAX_HEADING_LEVEL_JUMP)
        .count()
}

fn score(h1_count: usize, missing_alt: usize, unlabeled: usize, order_issues: usize) -> u32 {
    let mut penalty: usize = 0;

    // Independent checks; each applies only when its own condition holds.
    if h1_count == 0 {
        penalty += MISSING_H1_PENALTY as usize;
    }
    if h1_count > 1 {
        penalty += MULTIPLE_H1_PENALTY as usize;
    }

    penalty = penalty
        .saturating_add(missing_alt.saturating_mul(MISSING_ALT_PENALTY as usize))
        .saturating_add(unlabeled.saturating_mul(UNLABELED_BUTTON_PENALTY as usize))
        .saturating_add(order_issues.saturating_mul(HEADING_ORDER_PENALTY as usize));

    let penalty = u32::try_from(penalty).unwrap_or(u32::MAX);
    BASE_SCORE.saturating_sub(penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_page_scores_full() {
        let html = r#"<h1>Home</h1><h2>Intro</h2><img src="a.png" alt="cat">
            <button>Close</button><button aria-label="Menu"><svg></svg></button>"#;
        let metrics = analyze_accessibility("u", html);
        assert_eq!(metrics.h1_count, 1);
        assert_eq!(metrics.images_missing_alt, 0);
        assert_eq!(metrics.unlabeled_buttons, 0);
        assert_eq!(metrics.heading_order_issues, 0);
        assert_eq!(metrics.accessibility_score, 100);
        assert_eq!(metrics.notes.len(), 4);
    }

    #[test]
    fn test_missing_alt_rules() {
        let html = r#"<img src="a.png"><img src="b.png" alt=""><img src="c.png" alt="  ">
            <img src="d.png" alt="cat"><img src='e.png' alt='dog'/>"#;
        let metrics = analyze_accessibility("u", html);
        assert_eq!(metrics.images_missing_alt, 3);
    }

    #[test]
    fn test_alt_text_containing_angle_bracket() {
        let html = r#"<h1>t</h1><img alt="2 > 1" src="x.png"><img title="a>b" alt="cat">"#;
        let metrics = analyze_accessibility("u", html);
        assert_eq!(metrics.images_missing_alt, 0);
        assert_eq!(metrics.accessibility_score, 100);
    }

    #[test]
    fn test_button_label_rules() {
        let html = r#"<button></button><button aria-label="Close"></button>
            <button>Close</button><button aria-label=" "><i class="icon"></i></button>"#;
        let metrics = analyze_accessibility("u", html);
        assert_eq!(metrics.unlabeled_buttons, 2);
    }

    #[test]
    fn test_heading_order_jumps() {
        assert_eq!(count_heading_jumps(&[1, 2, 5]), 1);
        assert_eq!(count_heading_jumps(&[1, 2, 3]), 0);
        assert_eq!(count_heading_jumps(&[1, 3, 6, 2, 5]), 2);
        assert_eq!(count_heading_jumps(&[6, 1]), 0);
        assert_eq!(count_heading_jumps(&[4]), 0);
        assert_eq!(count_heading_jumps(&[]), 0);
    }

    #[test]
    fn test_heading_order_from_markup() {
        let html = "<h1>a</h1><h2>b</h2><h5>c</h5>";
        assert_eq!(analyze_accessibility("u", html).heading_order_issues, 1);
        let html = "<h1>a</h1><h2>b</h2><h3>c</h3>";
        assert_eq!(analyze_accessibility("u", html).heading_order_issues, 0);
    }

    #[test]
    fn test_h1_penalties() {
        let none = analyze_accessibility("u", "<h2>Sub</h2>");
        assert_eq!(none.accessibility_score, 90);
        let two = analyze_accessibility("u", "<h1>A</h1><h1>B</h1>");
        assert_eq!(two.h1_count, 2);
        assert_eq!(two.accessibility_score, 90);
    }

    #[test]
    fn test_score_combines_penalties() {
        // no h1 (-10), 2 missing alt (-4), 1 button (-3), 1 jump (-5)
        let html = "<h2>a</h2><h6>b</h6><img><img alt=''><button> </button>";
        let metrics = analyze_accessibility("u", html);
        assert_eq!(metrics.accessibility_score, 78);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let html = "<img>".repeat(80);
        let metrics = analyze_accessibility("u", &html);
        assert_eq!(metrics.images_missing_alt, 80);
        assert_eq!(metrics.accessibility_score, 0);
    }

    #[test]
    fn test_idempotent() {
        let html = "<h1>a</h1><h4>b</h4><img><button></button>";
        assert_eq!(
            analyze_accessibility("u", html),
            analyze_accessibility("u", html)
        );
    }
}
