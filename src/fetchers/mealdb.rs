use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::config::MealDbConfig;
use crate::decoder::decode_meal_detail;
use crate::error::MealError;
use crate::fetchers::MealCatalog;
use crate::model::{DetailEnvelope, MealDetail, MealSummary, SummaryEnvelope};

/// Category queried by [`MealDbClient::list_desserts`]
pub const DESSERT_CATEGORY: &str = "Dessert";

const FILTER_PATH: &str = "filter.php";
const LOOKUP_PATH: &str = "lookup.php";

/// HTTP client for TheMealDB.
///
/// Holds no mutable state; each call owns its request and result.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Client with default configuration
    pub fn new() -> Result<Self, MealError> {
        Self::builder().build()
    }

    pub fn builder() -> MealDbClientBuilder {
        MealDbClientBuilder::default()
    }

    /// Client built from a loaded [`MealDbConfig`]
    pub fn from_config(config: &MealDbConfig) -> Result<Self, MealError> {
        let mut builder = Self::builder()
            .base_url(&config.base_url)
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch dessert summaries, dropping any with an empty name, thumbnail or id
    pub async fn list_desserts(&self) -> Result<Vec<MealSummary>, MealError> {
        self.list_category(DESSERT_CATEGORY).await
    }

    /// Fetch summaries for one category, dropping incomplete records
    pub async fn list_category(&self, category: &str) -> Result<Vec<MealSummary>, MealError> {
        let url = self.endpoint(FILTER_PATH, "c", category)?;
        let envelope: SummaryEnvelope = self.get_json(url).await?;

        let records = envelope.meals.unwrap_or_default();
        let total = records.len();
        let meals: Vec<MealSummary> = records
            .into_iter()
            .map(MealSummary::from)
            .filter(MealSummary::is_complete)
            .collect();

        if meals.len() < total {
            debug!(
                "Dropped {} incomplete summaries from category '{}'",
                total - meals.len(),
                category
            );
        }
        info!("Fetched {} meals in category '{}'", meals.len(), category);
        Ok(meals)
    }

    /// Fetch and decode the detail record for `id`.
    ///
    /// An empty or `null` envelope is [`MealError::NotFound`].
    pub async fn meal_detail(&self, id: &str) -> Result<MealDetail, MealError> {
        let url = self.endpoint(LOOKUP_PATH, "i", id)?;
        let envelope: DetailEnvelope = self.get_json(url).await?;

        let raw = envelope
            .into_first()
            .ok_or_else(|| MealError::NotFound(id.to_string()))?;
        decode_meal_detail(&raw)
    }

    fn endpoint(&self, path: &str, key: &str, value: &str) -> Result<Url, MealError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))
            .map_err(|e| MealError::InvalidRequest(format!("{base}/{path}: {e}")))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, MealError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MealCatalog for MealDbClient {
    async fn desserts(&self) -> Result<Vec<MealSummary>, MealError> {
        self.list_desserts().await
    }

    async fn meal_detail(&self, id: &str) -> Result<MealDetail, MealError> {
        MealDbClient::meal_detail(self, id).await
    }
}

/// Builder for [`MealDbClient`]
#[derive(Debug, Default)]
pub struct MealDbClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MealDbClientBuilder {
    /// Override the API base URL
    ///
    /// # Example
    /// ```
    /// use mealdb_desserts::MealDbClient;
    ///
    /// let client = MealDbClient::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<MealDbClient, MealError> {
        let defaults = MealDbConfig::default();

        let mut client =
            Client::builder().user_agent(self.user_agent.unwrap_or(defaults.user_agent));
        if let Some(timeout) = self.timeout {
            client = client.timeout(timeout);
        }

        Ok(MealDbClient {
            client: client.build()?,
            base_url: self.base_url.unwrap_or(defaults.base_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;

    #[test]
    fn test_default_base_url() {
        let client = MealDbClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_filter_endpoint() {
        let client = MealDbClient::new().unwrap();
        let url = client.endpoint(FILTER_PATH, "c", DESSERT_CATEGORY).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.themealdb.com/api/json/v1/1/filter.php?c=Dessert"
        );
    }

    #[test]
    fn test_lookup_endpoint_encodes_id() {
        let client = MealDbClient::builder()
            .base_url("http://localhost:9000/api/")
            .build()
            .unwrap();
        let url = client.endpoint(LOOKUP_PATH, "i", "53049&x=1").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/lookup.php?i=53049%26x%3D1"
        );
    }

    #[test]
    fn test_malformed_base_url_is_invalid_request() {
        let client = MealDbClient::builder()
            .base_url("not a url")
            .build()
            .unwrap();
        let result = client.endpoint(FILTER_PATH, "c", DESSERT_CATEGORY);
        assert!(matches!(result, Err(MealError::InvalidRequest(_))));
    }

    #[test]
    fn test_from_config() {
        let config = MealDbConfig {
            base_url: "http://127.0.0.1:1234".to_string(),
            timeout: Some(5),
            user_agent: "test-agent".to_string(),
        };
        let client = MealDbClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:1234");
    }
}
