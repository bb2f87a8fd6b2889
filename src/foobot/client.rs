use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;

use crate::foobot::{ApiError, Device, Reading, reading::ReadingPayload};

// Ref: https://api.foobot.io/apidoc/index.html
pub const API_BASE_URL: &str = "https://api.foobot.io/v2";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const TOKEN_HEADER: &str = "X-API-KEY-TOKEN";

const LAST_DATA_PERIOD_SECS: u64 = 600;

// An averaging window wider than the period collapses the response to one row.
const LAST_DATA_AVERAGE_SECS: u64 = LAST_DATA_PERIOD_SECS + 1;

#[async_trait]
pub trait AirQualityApi {
    async fn devices(&self, owner: &str) -> Result<Vec<Device>, ApiError>;

    async fn latest_reading(&self, uuid: &str) -> Result<Reading, ApiError>;
}

#[derive(Debug, Clone)]
pub struct FoobotClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl FoobotClient {
    pub fn new(http: reqwest::Client, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url: API_BASE_URL.to_string(),
            token: token.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get(&self, url: &str) -> Result<Response, ApiError> {
        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, self.token.as_str())
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        match ApiError::from_status(response.status()) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }
}

#[async_trait]
impl AirQualityApi for FoobotClient {
    async fn devices(&self, owner: &str) -> Result<Vec<Device>, ApiError> {
        let url = format!("{}/owner/{owner}/device/", self.base_url);
        let response = self.get(&url).await?;

        response.json().await.map_err(ApiError::Decode)
    }

    async fn latest_reading(&self, uuid: &str) -> Result<Reading, ApiError> {
        let url = format!(
            "{}/device/{uuid}/datapoint/{LAST_DATA_PERIOD_SECS}/last/{LAST_DATA_AVERAGE_SECS}/",
            self.base_url
        );
        let response = self.get(&url).await?;
        let payload: ReadingPayload = response.json().await.map_err(ApiError::Decode)?;

        Ok(Reading::from_payload(payload))
    }
}
