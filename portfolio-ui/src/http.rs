//! Single-shot HTTP calls against the backend via `gloo-net`.
//!
//! No retries and no timeouts: a failed call returns an error and the caller
//! decides what to log.

use gloo_net::http::{Request, Response};
use portfolio_core::vote::VoteTally;
use portfolio_core::PortfolioError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure or undecodable body
    #[error("HTTP request failed: {0}")]
    Http(#[from] gloo_net::Error),

    /// GET answered with a non-success status
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Body decoded but did not hold the expected data
    #[error(transparent)]
    Data(#[from] PortfolioError),
}

async fn get(url: &str) -> Result<Response, FetchError> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }
    Ok(resp)
}

/// GET a JSON array of strings, e.g. rankings or questions.
pub async fn get_string_list(url: &str) -> Result<Vec<String>, FetchError> {
    let items = get(url).await?.json::<Vec<String>>().await?;
    Ok(items)
}

/// GET the `[teddy, zoe]` vote tally.
pub async fn get_vote_tally(url: &str) -> Result<VoteTally, FetchError> {
    let body = get(url).await?.text().await?;
    Ok(VoteTally::from_json(&body)?)
}

/// POST with an empty body. The response body is ignored; a non-success
/// status is only logged.
pub async fn post(url: &str) -> Result<(), FetchError> {
    let resp = Request::post(url).send().await?;
    if !resp.ok() {
        log::warn!("POST {} returned status {}", url, resp.status());
    }
    Ok(())
}
