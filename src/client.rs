use async_trait::async_trait;
use chrono::NaiveDate;
use dotenv::dotenv;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing::{debug, info};

// Using fully qualified path for auth module
use crate::auth::ScheduleHubAuth;

/// Errors surfaced by the availability API boundary
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityType {
    Recurring,
    OneTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePriority {
    #[default]
    Preferred,
    Required,
}

// Rule creation payload, one per consolidated range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub worker_id: String,
    pub availability_type: AvailabilityType,
    /// 0=Sunday..6=Saturday; the backend matches rules on this numbering.
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub priority: RulePriority,
}

// Persisted rule record as the backend returns it. Field conventions are the
// backend's; records are mapped into typed domain values at the boundary
// (see services::overlay) before any core logic sees them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    pub id: String,
    pub worker_id: String,
    pub availability_type: String,
    pub day_of_week: Option<u8>,
    pub specific_date: Option<NaiveDate>,
    pub start_time: String,
    pub end_time: String,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityListResponse {
    pub total_count: i32,
    pub rules: Vec<AvailabilityRecord>,
}

/// The two availability API calls this core depends on. Kept as a trait so
/// the save workflow can run against a mock backend in tests.
#[async_trait]
pub trait AvailabilityApi: Send + Sync {
    async fn create_availability(
        &self,
        request: &CreateAvailabilityRequest,
    ) -> Result<AvailabilityRecord, ApiError>;

    async fn list_availability(
        &self,
        worker_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<AvailabilityListResponse, ApiError>;
}

/// Client for the ScheduleHub availability API
pub struct ScheduleHubClient {
    client: Client,
    key_id: String,
    secret_key: String,
    endpoint: String,
}

impl ScheduleHubClient {
    /// Create a new ScheduleHub client from environment variables
    pub fn new() -> Self {
        dotenv().ok();

        Self {
            client: Client::new(),
            key_id: env::var("SCHEDULEHUB_API_KEY_ID")
                .expect("SCHEDULEHUB_API_KEY_ID must be set in environment"),
            secret_key: env::var("SCHEDULEHUB_API_SECRET_KEY")
                .expect("SCHEDULEHUB_API_SECRET_KEY must be set in environment"),
            endpoint: env::var("SCHEDULEHUB_API_ENDPOINT")
                .unwrap_or_else(|_| "https://api.schedulehub.io".to_string()),
        }
    }

    /// Generate signature for availability API requests
    fn generate_signature(
        &self,
        method: &str,
        uri: &str,
        timestamp: i64,
        nonce: &str,
        body: &str,
    ) -> String {
        ScheduleHubAuth::generate_signature(
            &self.key_id,
            &self.secret_key,
            method,
            uri,
            timestamp,
            nonce,
            body,
        )
    }

    fn signed_headers(
        &self,
        builder: reqwest::RequestBuilder,
        timestamp: i64,
        nonce: &str,
        signature: String,
    ) -> reqwest::RequestBuilder {
        builder
            .header("Content-Type", "application/json")
            .header("X-SH-Key", &self.key_id)
            .header("X-SH-Timestamp", timestamp.to_string())
            .header("X-SH-Nonce", nonce)
            .header("X-SH-Signature", signature)
    }
}

#[async_trait]
impl AvailabilityApi for ScheduleHubClient {
    /// Persist one recurring availability rule
    async fn create_availability(
        &self,
        request: &CreateAvailabilityRequest,
    ) -> Result<AvailabilityRecord, ApiError> {
        let method = "POST";
        let uri = "/v1/availability-rules";
        let url = format!("{}{}", self.endpoint, uri);

        let timestamp = ScheduleHubAuth::get_timestamp();
        let nonce = ScheduleHubAuth::generate_nonce();
        let request_body = serde_json::to_string(request)?;

        let signature = self.generate_signature(method, uri, timestamp, &nonce, &request_body);

        info!(
            "Creating availability rule for worker {} on day {}",
            request.worker_id, request.day_of_week
        );
        debug!("API URL: {}", url);

        let res = self
            .signed_headers(self.client.post(&url), timestamp, &nonce, signature)
            .body(request_body)
            .send()
            .await?;

        info!("Response received with status: {}", res.status());

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let message = res.text().await.unwrap_or_default();
            return Err(ApiError::Rejected { status, message });
        }

        let record = res.json::<AvailabilityRecord>().await?;
        Ok(record)
    }

    /// List persisted availability rules for one worker within a date window
    async fn list_availability(
        &self,
        worker_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<AvailabilityListResponse, ApiError> {
        let method = "GET";
        let uri = "/v1/availability-rules";
        let query = format!(
            "?worker_id={}&start_date={}&end_date={}",
            worker_id, start_date, end_date
        );
        let full_uri = format!("{}{}", uri, query);
        let url = format!("{}{}", self.endpoint, full_uri);

        let timestamp = ScheduleHubAuth::get_timestamp();
        let nonce = ScheduleHubAuth::generate_nonce();
        let request_body = ""; // Empty for GET request

        let signature =
            self.generate_signature(method, &full_uri, timestamp, &nonce, request_body);

        info!("Listing availability rules for worker {}", worker_id);
        debug!("API URL: {}", url);

        let res = self
            .signed_headers(self.client.get(&url), timestamp, &nonce, signature)
            .send()
            .await?;

        info!("Response received with status: {}", res.status());

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let message = res.text().await.unwrap_or_default();
            return Err(ApiError::Rejected { status, message });
        }

        let response = res.json::<AvailabilityListResponse>().await?;
        Ok(response)
    }
}
