//! Class-name lookups over a parsed document.
//!
//! The source site is navigated purely by CSS class, so this is the whole
//! query surface: materialize every match under a root, take the first
//! match, and read an element's text. Absent elements are `Option`s and
//! reading text from one gives the empty string; the rendering code leans
//! on that when optional lookups miss.

use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

fn has_class(element: ElementRef, class_name: &str) -> bool {
    element.value().classes().any(|class| class == class_name)
}

/// Every element in `root`'s subtree (root included) whose class attribute
/// contains `class_name` as a token, in document order.
///
/// Never fails: a class name the selector engine rejects is logged and
/// yields an empty collection.
pub fn find_all<'a>(root: ElementRef<'a>, class_name: &str) -> Vec<ElementRef<'a>> {
    let selector = match Selector::parse(&format!(".{class_name}")) {
        Ok(selector) => selector,
        Err(err) => {
            debug!("failed to find elements with class {class_name}: {err}");
            return Vec::new();
        }
    };

    let mut matches = Vec::new();
    if has_class(root, class_name) {
        matches.push(root);
    }
    matches.extend(root.select(&selector));
    matches
}

/// First element in `root`'s subtree carrying `class_name`, if any.
pub fn find_first<'a>(root: ElementRef<'a>, class_name: &str) -> Option<ElementRef<'a>> {
    let found = find_all(root, class_name).into_iter().next();
    if found.is_none() {
        debug!("failed to find element with class {class_name}");
    }
    found
}

/// Concatenated text of all descendant text nodes, in document order.
/// An absent element reads as the empty string.
pub fn text_content(element: Option<ElementRef>) -> String {
    element.map(|el| el.text().collect()).unwrap_or_default()
}

/// Root element of a parsed document.
pub fn document_root(document: &Html) -> Result<ElementRef<'_>, ScrapeError> {
    document
        .tree
        .root()
        .children()
        .find_map(ElementRef::wrap)
        .ok_or_else(|| ScrapeError::Parse("document has no root element".into()))
}
