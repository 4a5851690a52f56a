//! Pattern-based markup scanning.
//!
//! Nothing here builds a parse tree. Tags are located with regular
//! expressions over the raw text, so malformed or partial HTML degrades to
//! fewer matches instead of an error. Nesting of the same tag name is not
//! tracked: the first closing tag ends a match.

use std::sync::OnceLock;

use regex::Regex;

/// A single matched element occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagFragment<'a> {
    /// Byte offset of the opening `<` within the markup.
    pub start: usize,
    /// The raw opening tag, brackets included.
    pub open_tag: &'a str,
    /// Content between the opening and closing tag. Empty for void tags.
    pub inner: &'a str,
}

/// Lazy scan over the occurrences of one tag name.
///
/// Each call to [`extract_tags`] or [`void_tags`] starts a new scan; the
/// iterator owns its cursor.
pub struct TagScan<'a> {
    regex: Option<Regex>,
    markup: &'a str,
    pos: usize,
}

impl<'a> Iterator for TagScan<'a> {
    type Item = TagFragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let regex = self.regex.as_ref()?;
        if self.pos > self.markup.len() {
            return None;
        }

        let caps = regex.captures_at(self.markup, self.pos)?;
        let whole = caps.get(0)?;
        self.pos = whole.end();

        let open_tag = caps.get(1).map_or("", |m| m.as_str());
        let inner = caps.get(2).map_or("", |m| m.as_str());

        Some(TagFragment {
            start: whole.start(),
            open_tag,
            inner,
        })
    }
}

/// Opening tag pattern for `name`: the name must end at whitespace, `/` or `>`.
///
/// A `>` inside a quoted attribute value does not end the tag. If a quote is
/// never closed, the tag ends at the first `>` instead.
fn open_tag_pattern(name: &str) -> String {
    let name = regex::escape(name);
    format!(
        r#"(?:<{name}(?:[\s/](?:"[^"]*"|'[^']*'|[^'">])*)?>|<{name}(?:[\s/][^>]*)?>)"#
    )
}

fn scan<'a>(markup: &'a str, pattern: Option<String>) -> TagScan<'a> {
    let regex = pattern.map(|p| Regex::new(&p).expect("tag pattern is valid"));
    TagScan {
        regex,
        markup,
        pos: 0,
    }
}

/// Iterate `<tag ...>inner</tag>` occurrences in document order.
///
/// Matching is case-insensitive and ignores attributes. Inner content may
/// span lines. Unclosed tags produce no match.
pub fn extract_tags<'a>(markup: &'a str, tag: &str) -> TagScan<'a> {
    let tag = tag.trim();
    let pattern = (!tag.is_empty()).then(|| {
        format!(
            r"(?is)({})(.*?)</{}\s*>",
            open_tag_pattern(tag),
            regex::escape(tag)
        )
    });
    scan(markup, pattern)
}

/// Iterate opening tags `<tag ...>` / `<tag .../>` without requiring a close.
pub fn void_tags<'a>(markup: &'a str, tag: &str) -> TagScan<'a> {
    let tag = tag.trim();
    let pattern = (!tag.is_empty()).then(|| format!(r"(?is)({})", open_tag_pattern(tag)));
    scan(markup, pattern)
}

/// Heading levels (1–6) of every paired `h1`..`h6` element in document order.
pub fn heading_levels(markup: &str) -> Vec<u8> {
    let mut found: Vec<(usize, u8)> = (1u8..=6)
        .flat_map(|level| {
            extract_tags(markup, &format!("h{level}")).map(move |frag| (frag.start, level))
        })
        .collect();
    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, level)| level).collect()
}

fn tag_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^<\s*[^\s/>]+").expect("tag name regex is valid"))
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
            .expect("attribute regex is valid")
    })
}

/// Read an attribute value from an opening-tag fragment.
///
/// Returns `None` only when no attribute token with that name exists. A bare
/// attribute (`<button disabled>`) reads as `Some("")`. Values are returned
/// raw, without entity decoding. The first occurrence wins.
pub fn attribute<'a>(fragment: &'a str, name: &str) -> Option<&'a str> {
    let attrs = match tag_name_regex().find(fragment) {
        Some(m) => &fragment[m.end()..],
        None => fragment,
    };

    attribute_regex()
        .captures_iter(attrs)
        .find(|caps| {
            caps.get(1)
                .is_some_and(|m| m.as_str().eq_ignore_ascii_case(name))
        })
        .map(|caps| {
            caps.get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map_or("", |m| m.as_str())
        })
}

/// True when the attribute is absent or holds only whitespace.
pub fn attribute_is_blank(fragment: &str, name: &str) -> bool {
    attribute(fragment, name).map_or(true, |value| value.trim().is_empty())
}

fn markup_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("markup regex is valid"))
}

/// Strip tags and collapse whitespace into single spaces.
pub fn normalize_text(fragment: &str) -> String {
    let stripped = markup_regex().replace_all(fragment, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_paragraphs() {
        let html = "<p>One</p><div>x</div><p class=\"lead\">Two</p>";
        let inner: Vec<&str> = extract_tags(html, "p").map(|f| f.inner).collect();
        assert_eq!(inner, vec!["One", "Two"]);
    }

    #[test]
    fn test_extract_is_case_insensitive_and_multiline() {
        let html = "<P>first\nline</P>\n<p>second</P >";
        let inner: Vec<&str> = extract_tags(html, "p").map(|f| f.inner).collect();
        assert_eq!(inner, vec!["first\nline", "second"]);
    }

    #[test]
    fn test_extract_does_not_match_longer_tag_names() {
        let html = "<pre>code</pre><param name=\"a\"><p>text</p>";
        let frags: Vec<_> = extract_tags(html, "p").collect();
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].inner, "text");
    }

    #[test]
    fn test_extract_unclosed_tag_is_skipped() {
        let html = "<p>never closed <div>other</div>";
        assert_eq!(extract_tags(html, "p").count(), 0);
    }

    #[test]
    fn test_extract_nested_same_tag_stops_at_first_close() {
        let html = "<div>a<div>b</div>c</div>";
        let frags: Vec<_> = extract_tags(html, "div").collect();
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].inner, "a<div>b");
    }

    #[test]
    fn test_extract_records_open_tag_and_offset() {
        let html = "xx<button aria-label='Close'>X</button>";
        let frag = extract_tags(html, "button").next().unwrap();
        assert_eq!(frag.start, 2);
        assert_eq!(frag.open_tag, "<button aria-label='Close'>");
        assert_eq!(frag.inner, "X");
    }

    #[test]
    fn test_extract_restarts_per_call() {
        let html = "<p>a</p><p>b</p>";
        assert_eq!(extract_tags(html, "p").count(), 2);
        assert_eq!(extract_tags(html, "p").count(), 2);
    }

    #[test]
    fn test_extract_empty_inputs() {
        assert_eq!(extract_tags("", "p").count(), 0);
        assert_eq!(extract_tags("<p>a</p>", "").count(), 0);
    }

    #[test]
    fn test_void_tags_self_closing_and_plain() {
        let html = r#"<img src="a.png"><IMG src='b.png' /><image>x</image><img/>"#;
        let tags: Vec<&str> = void_tags(html, "img").map(|f| f.open_tag).collect();
        assert_eq!(tags, vec![r#"<img src="a.png">"#, "<IMG src='b.png' />", "<img/>"]);
    }

    #[test]
    fn test_void_tags_skip_quoted_angle_brackets() {
        let html = r#"<img alt="2 > 1" src="x.png"><img title="a>b" alt="cat">"#;
        let tags: Vec<&str> = void_tags(html, "img").map(|f| f.open_tag).collect();
        assert_eq!(
            tags,
            vec![r#"<img alt="2 > 1" src="x.png">"#, r#"<img title="a>b" alt="cat">"#]
        );
        assert_eq!(attribute(tags[0], "alt"), Some("2 > 1"));
        assert_eq!(attribute(tags[1], "alt"), Some("cat"));
    }

    #[test]
    fn test_unbalanced_quote_still_matches() {
        let html = r#"<img alt="oops><p>text</p>"#;
        let tags: Vec<&str> = void_tags(html, "img").map(|f| f.open_tag).collect();
        assert_eq!(tags, vec![r#"<img alt="oops>"#]);
    }

    #[test]
    fn test_extract_with_quoted_angle_bracket() {
        let html = r#"<button aria-label="a > b">x</button>"#;
        let frag = extract_tags(html, "button").next().unwrap();
        assert_eq!(frag.open_tag, r#"<button aria-label="a > b">"#);
        assert_eq!(frag.inner, "x");
    }

    #[test]
    fn test_heading_levels_document_order() {
        let html = "<h2>b</h2><h1>a</h1><section><h5>c</h5></section><h3>unclosed";
        assert_eq!(heading_levels(html), vec![2, 1, 5]);
    }

    #[test]
    fn test_attribute_quote_styles() {
        assert_eq!(attribute(r#"<img alt="cat">"#, "alt"), Some("cat"));
        assert_eq!(attribute("<img alt='dog'>", "alt"), Some("dog"));
        assert_eq!(attribute("<img alt=bird>", "alt"), Some("bird"));
        assert_eq!(attribute(r#"<img ALT = "fish" />"#, "alt"), Some("fish"));
    }

    #[test]
    fn test_attribute_absent_vs_empty() {
        assert_eq!(attribute(r#"<img src="a.png">"#, "alt"), None);
        assert_eq!(attribute(r#"<img src="a.png" alt="">"#, "alt"), Some(""));
        assert_eq!(attribute("<input disabled>", "disabled"), Some(""));
    }

    #[test]
    fn test_attribute_ignores_similar_names_and_quoted_text() {
        assert_eq!(attribute(r#"<img data-alt="x">"#, "alt"), None);
        assert_eq!(attribute(r#"<img title="alt='x'">"#, "alt"), None);
    }

    #[test]
    fn test_attribute_without_leading_tag() {
        assert_eq!(attribute(r#"class="a" aria-label="Menu""#, "aria-label"), Some("Menu"));
    }

    #[test]
    fn test_attribute_first_occurrence_wins() {
        assert_eq!(attribute(r#"<img alt="one" alt="two">"#, "alt"), Some("one"));
    }

    #[test]
    fn test_attribute_no_entity_decoding() {
        assert_eq!(attribute(r#"<img alt="a &amp; b">"#, "alt"), Some("a &amp; b"));
    }

    #[test]
    fn test_attribute_is_blank() {
        assert!(attribute_is_blank("<img>", "alt"));
        assert!(attribute_is_blank(r#"<img alt="   ">"#, "alt"));
        assert!(!attribute_is_blank(r#"<img alt=" cat ">"#, "alt"));
    }

    #[test]
    fn test_normalize_strips_markup() {
        assert_eq!(normalize_text("Hello <b>world</b>"), "Hello world");
        assert_eq!(normalize_text("  a\n\n\tb  <br/> c "), "a b c");
        assert_eq!(normalize_text("<span></span>"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = ["Hello <b>world</b>", "a < b > c", "<<b>a>", "x  <i>y</i>\n z"];
        for input in inputs {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("Hello world"), 2);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count(""), 0);
    }
}
