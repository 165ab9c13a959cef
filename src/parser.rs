use html5ever::driver;
use html5ever::tendril::TendrilSink;
use log::{debug, info};
use scraper::{Html, HtmlTreeSink};

use crate::error::ScrapeError;

/// How many bytes to hand the streaming parser at a time. A memory/throughput
/// knob only; the resulting tree does not depend on it.
const CHUNK_SIZE: usize = 4096;

/// Parse raw response bytes into an HTML document tree.
///
/// The bytes are fed through html5ever's streaming parser in fixed-size
/// chunks. The parser recovers from malformed markup instead of failing, so
/// recoverable complaints only show up in the debug log.
pub fn parse(body: &[u8]) -> Result<Html, ScrapeError> {
    let sink = HtmlTreeSink::new(Html::new_document());
    let mut parser = driver::parse_document(sink, Default::default()).from_utf8();

    let mut chunks = 0usize;
    for chunk in body.chunks(CHUNK_SIZE) {
        parser.process(chunk.into());
        chunks += 1;
    }
    let document = parser.finish();
    info!("processed input in {chunks} chunks");

    for err in &document.errors {
        debug!("parser recovered from: {err}");
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn title_of(document: &Html) -> String {
        let root = dom::document_root(document).unwrap();
        dom::text_content(dom::find_first(root, "recipe-header__title"))
    }

    #[test]
    fn one_byte_input_still_yields_a_document() {
        let document = parse(b"x").unwrap();
        assert!(dom::document_root(&document).is_ok());
        assert_eq!(title_of(&document), "");
    }

    #[test]
    fn chunking_does_not_affect_query_results() {
        // Pad the page well past several chunk boundaries.
        let padding = "<p>filler</p>".repeat(1024);
        let html = format!(
            "<html><body>{padding}<div class=\"recipe-header__title\">Soup</div>{padding}</body></html>"
        );
        assert!(html.len() > 4 * CHUNK_SIZE);

        let chunked = parse(html.as_bytes()).unwrap();
        let whole = Html::parse_document(&html);

        assert_eq!(title_of(&chunked), "Soup");
        assert_eq!(title_of(&chunked), title_of(&whole));
    }

    #[test]
    fn reparsing_the_same_bytes_gives_identical_results() {
        let html = r#"<div class="ingredient"><span class="ingredient__label">salt</span></div>"#;
        let first = parse(html.as_bytes()).unwrap();
        let second = parse(html.as_bytes()).unwrap();

        let count = |document: &Html| {
            dom::find_all(dom::document_root(document).unwrap(), "ingredient").len()
        };
        assert_eq!(count(&first), 1);
        assert_eq!(count(&first), count(&second));
    }
}
