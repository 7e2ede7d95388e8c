// src/core/html.rs
// Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Selector};

/// Compile a selector that is a literal in this crate.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e}"))
}

/// All descendant text of an element, concatenated as-is.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Descendant text, trimmed.
pub fn text(el: ElementRef<'_>) -> String {
    raw_text(el).trim().to_string()
}

/// The parent node, if it is an element.
pub fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}
