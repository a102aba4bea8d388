//! `reqwest` client for the backend endpoints.

use log::{info, warn};
use portfolio_core::api::Endpoints;
use portfolio_core::question::QuestionCount;
use portfolio_core::vote::{Dog, VoteTally};

/// One request per call, no retries.
pub struct BackendClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl BackendClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            endpoints: Endpoints::new(base_url),
        })
    }

    /// Client for a backend on this machine, ignoring proxy settings.
    #[cfg(test)]
    pub(crate) fn local(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        Self {
            http,
            endpoints: Endpoints::new(base_url),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_text(&self, url: &str) -> anyhow::Result<String> {
        info!("GET {}", url);
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }

    async fn get_list(&self, url: &str) -> anyhow::Result<Vec<String>> {
        let body = self.get_text(url).await?;
        let items = serde_json_list(&body)?;
        Ok(items)
    }

    async fn post(&self, url: &str) -> anyhow::Result<()> {
        info!("POST {}", url);
        let resp = self.http.post(url).send().await?;
        if !resp.status().is_success() {
            warn!("POST {} returned status {}", url, resp.status());
        }
        Ok(())
    }

    pub async fn rankings(&self) -> anyhow::Result<Vec<String>> {
        self.get_list(&self.endpoints.water_rankings()).await
    }

    pub async fn questions(&self, count: QuestionCount) -> anyhow::Result<Vec<String>> {
        self.get_list(&self.endpoints.questions(count)).await
    }

    pub async fn ask(&self, content: &str) -> anyhow::Result<()> {
        self.post(&self.endpoints.submit_question(content)).await
    }

    pub async fn clear_questions(&self) -> anyhow::Result<()> {
        self.post(&self.endpoints.delete_questions()).await
    }

    pub async fn votes(&self) -> anyhow::Result<VoteTally> {
        let body = self.get_text(&self.endpoints.dog_votes()).await?;
        Ok(VoteTally::from_json(&body)?)
    }

    pub async fn vote(&self, dog: Dog) -> anyhow::Result<()> {
        self.post(&self.endpoints.vote(dog)).await
    }
}

/// Decode a JSON array of strings.
fn serde_json_list(body: &str) -> portfolio_core::Result<Vec<String>> {
    Ok(serde_json::from_str(body)?)
}
