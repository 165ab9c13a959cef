pub mod dom;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod render;

use std::fs;
use std::path::Path;

use log::info;

pub use crate::error::ScrapeError;

/// Fetch `url` and reduce it to a simplified standalone HTML document.
pub fn scrape_page(url: &str) -> Result<String, ScrapeError> {
    let body = fetcher::fetch(url)?;
    let document = parser::parse(&body)?;
    render::render(&document, url)
}

/// Like [`scrape_page`], but write the result to `output`. The file is only
/// created once the whole extraction has succeeded, so a failed run never
/// clobbers an existing output file.
pub fn scrape_to_file(url: &str, output: &Path) -> Result<(), ScrapeError> {
    let html = scrape_page(url)?;
    info!("writing output to {}", output.display());
    fs::write(output, html)?;
    Ok(())
}
