mod attendance;
pub use attendance::Attendance;
mod poll;
pub use poll::{Participant, PollResult};
mod get_poll;
pub use get_poll::decode_poll;
pub mod layout;
pub use layout::{DateColumn, Layout};
mod tally;
pub use tally::Tally;
pub mod render;
pub use render::{render, RenderConfig};
mod error;
pub use error::Error;
use log::{debug, warn};
use reqwest::Url;
use std::time::Duration;

pub const BASE_URL: &str = "https://eldood.uk";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct Gateway {
    client: reqwest::Client,
    base_url: Url,
}

impl Gateway {
    /// Gateway for the public eldood instance.
    pub async fn new(timeout: Option<Duration>) -> Result<Gateway, Error> {
        Gateway::build(BASE_URL, true, timeout)
    }

    /// Gateway for another host, e.g. a local test server. Plain HTTP is allowed.
    pub async fn with_base_url(
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Gateway, Error> {
        Gateway::build(base_url, false, timeout)
    }

    fn build(
        base_url: &str,
        https_only: bool,
        timeout: Option<Duration>,
    ) -> Result<Gateway, Error> {
        let base_url = match Url::parse(base_url) {
            Ok(url) if !url.cannot_be_a_base() => url,
            Ok(_) => {
                return Err(Error::Usage(format!(
                    "Base URL \"{}\" cannot carry a path.",
                    base_url
                )))
            }
            Err(err) => {
                return Err(Error::Usage(format!(
                    "Invalid base URL \"{}\" ({}).",
                    base_url, err
                )))
            }
        };

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let timeout = match timeout {
            Some(t) => t,
            None => Duration::new(DEFAULT_TIMEOUT_SECS, 0),
        };

        let client = match reqwest::ClientBuilder::new()
            .default_headers(headers)
            .https_only(https_only)
            .timeout(timeout)
            .build()
        {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Transport(format!(
                    "Could not create reqwest client ({}).",
                    err
                )))
            }
        };

        Ok(Gateway { client, base_url })
    }

    /// `<base>/<token>/json`, with the token encoded as one path segment.
    pub fn poll_url(&self, token: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(token).push("json");
        }
        url
    }

    /// Single GET, no retries. Returns the HTTP status alongside the body.
    async fn get_once(&self, url: Url) -> Result<(u16, String), Error> {
        debug!("GET {}", url);

        let res = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Transport(format!(
                    "Could not send request ({}).",
                    err
                )))
            }
        };

        let status = res.status().as_u16();
        let text = match res.text().await {
            Ok(text) => text,
            Err(err) => {
                return Err(Error::Transport(format!(
                    "Could not read response body ({}).",
                    err
                )))
            }
        };

        if !(200..=299).contains(&status) {
            warn!("Poll service answered with HTTP status {}.", status);
        } else {
            debug!("HTTP {} with {} bytes.", status, text.len());
        }

        Ok((status, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn poll_url_appends_token_and_json() {
        let gateway = Gateway::new(None).await.unwrap();
        assert_eq!(
            gateway.poll_url("abc123").as_str(),
            "https://eldood.uk/abc123/json"
        );
    }

    #[tokio::test]
    async fn poll_url_encodes_token_as_one_segment() {
        let gateway = Gateway::with_base_url("http://localhost:8080/", None)
            .await
            .unwrap();
        assert_eq!(
            gateway.poll_url("a/b c").as_str(),
            "http://localhost:8080/a%2Fb%20c/json"
        );
    }

    #[tokio::test]
    async fn invalid_base_url_is_rejected() {
        let res = Gateway::with_base_url("not a url", None).await;
        assert!(matches!(res, Err(Error::Usage(_))));
    }
}
