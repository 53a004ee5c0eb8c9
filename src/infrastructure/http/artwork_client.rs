//! HTTP implementation of [`ArtworkRepository`].

use crate::config::Config;
use crate::domain::entities::Page;
use crate::domain::pagination::PageRequest;
use crate::domain::repositories::ArtworkRepository;
use crate::error::FetchError;
use crate::infrastructure::http::dto::ArtworkListResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Fetches artwork pages from `GET <endpoint>?page=<page>&limit=<limit>`.
///
/// One request per call; no retries and no caching. Timeouts are whatever the
/// underlying [`Client`] was built with.
#[derive(Debug, Clone)]
pub struct HttpArtworkRepository {
    client: Client,
    endpoint: Url,
}

impl HttpArtworkRepository {
    /// Creates a repository around an existing client.
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Builds a client from configuration (timeout and `User-Agent`).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidEndpoint`] if the configured URL does not parse,
    /// or [`FetchError::Transport`] if the HTTP client cannot be constructed.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.api_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self::new(client, endpoint))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the request URL for a page.
    ///
    /// Query parameters already on the endpoint are kept, except `page` and
    /// `limit`, which are always replaced.
    pub fn page_url(&self, request: PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "page" && key != "limit")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (key, value) in &retained {
                pairs.append_pair(key, value);
            }
            pairs
                .append_pair("page", &request.page.to_string())
                .append_pair("limit", &request.limit.to_string());
        }

        url
    }

    async fn get_page(&self, url: &Url) -> Result<Page, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(status.as_u16(), url.as_str()));
        }

        let body = response.bytes().await?;
        let parsed: ArtworkListResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::decode(url.as_str(), e))?;

        Ok(parsed.into())
    }
}

#[async_trait]
impl ArtworkRepository for HttpArtworkRepository {
    async fn fetch_page(&self, request: PageRequest) -> Result<Page, FetchError> {
        let url = self.page_url(request);
        debug!(page = request.page, limit = request.limit, %url, "Fetching artworks page");
        metrics::counter!("artwork_page_fetches_total").increment(1);

        match self.get_page(&url).await {
            Ok(page) => {
                debug!(
                    page = request.page,
                    records = page.len(),
                    total = page.total,
                    "Fetched artworks page"
                );
                Ok(page)
            }
            Err(e) => {
                warn!(page = request.page, limit = request.limit, error = %e, "Artworks page fetch failed");
                metrics::counter!("artwork_page_fetch_failures_total").increment(1);
                Err(e)
            }
        }
    }
}
