//! HTTP fetching for state WARN pages.

use std::time::Duration;

use reqwest::StatusCode;

/// Sent with every request unless a scraper asks for something else.
pub const DEFAULT_USER_AGENT: &str = "Big Local News (biglocalnews.org)";

/// Request timeout for state pages. Some of these servers are slow.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} for {url}")]
    HttpStatus { status: StatusCode, url: String },
}

impl FetchError {
    /// The HTTP status when the server answered with a non-success code.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
        }
    }
}

/// One best-effort request per call; no retries.
///
/// The underlying client keeps cookies, so a single `FetchClient` doubles as
/// a browser-like session for sites that page through postbacks.
pub struct FetchClient {
    http: reqwest::Client,
}

impl FetchClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_options(DEFAULT_USER_AGENT, REQUEST_TIMEOUT)
    }

    pub fn with_user_agent(user_agent: &str) -> Result<Self, FetchError> {
        Self::with_options(user_agent, REQUEST_TIMEOUT)
    }

    pub fn with_options(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        Ok(Self { http })
    }

    /// GETs `url` and decodes the body with the charset the server declares.
    pub async fn get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.send(self.http.get(url), url).await?;
        Ok(resp.text().await?)
    }

    /// GETs `url` and decodes the body as UTF-8 whatever the headers say.
    /// Invalid sequences are replaced rather than rejected.
    pub async fn get_utf8(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.send(self.http.get(url), url).await?;
        let bytes = resp.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// POSTs `fields` urlencoded to `url` and returns the body text.
    pub async fn post_form(
        &self,
        url: &str,
        fields: &[(String, String)],
    ) -> Result<String, FetchError> {
        let resp = self.send(self.http.post(url).form(fields), url).await?;
        Ok(resp.text().await?)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<reqwest::Response, FetchError> {
        tracing::debug!("Requesting {}", url);
        let resp = request.send().await?;
        let status = resp.status();
        tracing::debug!("Response code: {}", status.as_u16());
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }
        Ok(resp)
    }
}
