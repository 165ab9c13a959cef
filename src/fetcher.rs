use log::{debug, info, warn};
use reqwest::blocking::Client;

use crate::error::ScrapeError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Retrieve `url` with a single blocking GET and return the response body.
///
/// The status line is checked before the body is consumed, so an error
/// response aborts the transfer early. Transport failures and HTTP error
/// statuses are both fatal; there is no retry.
pub fn fetch(url: &str) -> Result<Vec<u8>, ScrapeError> {
    info!("retrieving {url}");

    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let mut response = client.get(url).send()?;

    let status = response.status().as_u16();
    if status >= 400 {
        warn!("remote server failure: HTTP {status}, terminating");
        return Err(ScrapeError::HttpStatus(status));
    }

    let mut body = Vec::new();
    let received = response.copy_to(&mut body)?;
    debug!("received {received} bytes");
    info!("retrieved {} bytes from {url}", body.len());
    Ok(body)
}
