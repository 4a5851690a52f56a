//! Advisory strings attached to each metrics record.

/// Longest average paragraph, in words, that still reads as scannable.
pub const MAX_AVG_PARAGRAPH_WORDS: usize = 100;

/// Largest heading level increase between neighbours that is not flagged.
pub const MAX_HEADING_LEVEL_JUMP: u8 = 2;

pub fn paragraph_length(avg_words: usize) -> String {
    if avg_words > MAX_AVG_PARAGRAPH_WORDS {
        format!(
            "Paragraphs are long (average {avg_words} words). \
             Break them into shorter chunks to improve scanability."
        )
    } else {
        format!("Paragraph length looks good (average {avg_words} words per paragraph).")
    }
}

pub fn images(count: usize) -> String {
    if count == 0 {
        "No images found. Add images or illustrations to break up the text.".to_string()
    } else {
        format!("Found {count} image(s) that help break up the text.")
    }
}

pub fn headings(count: usize) -> String {
    if count == 0 {
        "No headings found. Add headings so readers can scan the page.".to_string()
    } else {
        format!("Found {count} heading(s) that structure the content.")
    }
}

pub fn h1(count: usize) -> String {
    match count {
        0 => "No <h1> heading found. Add a single <h1> describing the page.".to_string(),
        1 => "Page has exactly one <h1> heading.".to_string(),
        n => format!("Found {n} <h1> headings. Use a single <h1> per page."),
    }
}

pub fn alt_text(missing: usize) -> String {
    if missing == 0 {
        "All images have alt text.".to_string()
    } else {
        format!("{missing} image(s) missing alt text.")
    }
}

pub fn button_labels(unlabeled: usize) -> String {
    if unlabeled == 0 {
        "All buttons have an accessible label.".to_string()
    } else {
        format!("{unlabeled} button(s) have no visible text or aria-label.")
    }
}

pub fn heading_order(issues: usize) -> String {
    if issues == 0 {
        "Heading levels follow a logical order.".to_string()
    } else {
        format!("{issues} heading level jump(s) of more than two levels.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_threshold_is_exclusive() {
        assert!(paragraph_length(100).starts_with("Paragraph length looks good"));
        assert!(paragraph_length(101).starts_with("Paragraphs are long (average 101"));
    }

    #[test]
    fn test_h1_variants() {
        assert!(h1(0).starts_with("No <h1>"));
        assert!(h1(1).contains("exactly one"));
        assert!(h1(3).starts_with("Found 3 <h1>"));
    }

    #[test]
    fn test_failure_notes_carry_counts() {
        assert_eq!(alt_text(2), "2 image(s) missing alt text.");
        assert!(button_labels(4).starts_with("4 button(s)"));
        assert!(heading_order(1).starts_with("1 heading level jump"));
    }
}
