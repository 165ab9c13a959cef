use thiserror::Error;

/// Errors that can occur while turning a recipe page into simplified HTML
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Transport-level failure while fetching the page
    #[error("failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("remote server failure: HTTP {0}")]
    HttpStatus(u16),

    /// The parser did not produce a usable document
    #[error("failed to parse document: {0}")]
    Parse(String),

    /// The page is missing the container all recipe lookups are scoped to
    #[error("failed to find content root")]
    MissingContentRoot,

    /// The output file could not be written
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),
}
