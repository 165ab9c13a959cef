//! Extraction schema and output layout for the simplified recipe page.

use scraper::Html;

use crate::dom;
use crate::error::ScrapeError;

// Class names used by the source site's recipe markup.
const TITLE: &str = "recipe-header__title";
const CONTENT_ROOT: &str = "recipe__text__content";
const INGREDIENTS_LIST: &str = "ingredients-list";
const INGREDIENT: &str = "ingredient";
const INGREDIENT_QUANTITY: &str = "ingredient__quantity";
const INGREDIENT_LABEL: &str = "ingredient__label";
const DIRECTIONS_LIST: &str = "recipe__directions__list";
const DIRECTION_TEXT: &str = "recipe__direction__text";

/// Pull the recipe parts out of `document` and lay them out as a minimal
/// standalone HTML page.
///
/// The content root is the one mandatory element; every other lookup is
/// best-effort and an absent section is simply left out. Extracted text is
/// embedded verbatim, without HTML escaping; the source site is treated as
/// trusted input.
pub fn render(document: &Html, url: &str) -> Result<String, ScrapeError> {
    let root = dom::document_root(document)?;
    let content_root =
        dom::find_first(root, CONTENT_ROOT).ok_or(ScrapeError::MissingContentRoot)?;

    let title = dom::text_content(dom::find_first(root, TITLE));

    let mut out = String::new();
    out.push_str("<html><head><meta charset=utf-8><title>");
    out.push_str(&title);
    out.push_str("</title></head><body><h1>");
    out.push_str(&title);
    out.push_str("</h1><h2>Ingredients</h2>");

    if let Some(list) = dom::find_first(content_root, INGREDIENTS_LIST) {
        out.push_str("<table>");
        for row in dom::find_all(list, INGREDIENT) {
            let quantity = dom::text_content(dom::find_first(row, INGREDIENT_QUANTITY));
            let label = dom::text_content(dom::find_first(row, INGREDIENT_LABEL));
            out.push_str("<tr><td>");
            out.push_str(&quantity);
            out.push_str("</td><td>");
            out.push_str(&label);
            out.push_str("</td></tr>");
        }
        out.push_str("</table>");
    }

    out.push_str("<h2>Directions</h2>");
    if let Some(list) = dom::find_first(content_root, DIRECTIONS_LIST) {
        out.push_str("<ol>");
        for step in dom::find_all(list, DIRECTION_TEXT) {
            out.push_str("<li>");
            out.push_str(&dom::text_content(Some(step)));
            out.push_str("</li>");
        }
        out.push_str("</ol>");
    }

    out.push_str("<p><i>Extracted from ");
    out.push_str(url);
    out.push_str("</i></p></body></html>");
    Ok(out)
}
