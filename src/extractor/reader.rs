use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::extractor::model::normalize_whitespace;

/// Regions tried in order; `body` is the last resort.
pub const CONTENT_SELECTORS: [&str; 6] = [
    "article",
    ".post-content",
    ".blog-content",
    ".entry-content",
    "main",
    "body",
];

/// Elements whose text never belongs to the article.
const SKIPPED_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

static SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTENT_SELECTORS
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .collect()
});

/// Plain text of the first non-blank content region, whitespace-collapsed.
/// Returns an empty string when the document has no text at all.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);

    for selector in SELECTORS.iter() {
        for element in document.select(selector) {
            let text = normalize_whitespace(&region_text(element));
            if !text.is_empty() {
                return text;
            }
        }
    }

    String::new()
}

fn region_text(region: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in region.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let skipped = node
            .ancestors()
            .filter_map(|ancestor| ancestor.value().as_element())
            .any(|element| SKIPPED_ELEMENTS.contains(&element.name()));
        if !skipped {
            out.push_str(text);
        }
    }
    out
}
