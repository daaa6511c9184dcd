use async_trait::async_trait;

use crate::plugins::items::models::PaginatedResponse;

#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page: u64, limit: u32) -> anyhow::Result<PaginatedResponse>;
}

/// Fetches pages from a running server over HTTP.
#[derive(Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPageSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn items_url(&self) -> String {
        format!("{}/api/items", self.base_url)
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page: u64, limit: u32) -> anyhow::Result<PaginatedResponse> {
        let resp = self
            .client
            .get(self.items_url())
            .query(&[("page", page), ("limit", u64::from(limit))])
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }
}
