use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::{header, Client};

use super::types::*;
use crate::config::Config;
use crate::schedule::{ScheduleItem, ScheduleSource};
use crate::signup::SignupForm;

pub struct ApiClient {
    client: Client,
    base_url: String,
    auth_header: Option<String>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        // JWT may be absent before login - signup does not need it,
        // authorized endpoints will get a 401 from the server without it
        let auth_header = config
            .auth_token
            .as_ref()
            .map(|token| format!("Bearer {}", token));
        if auth_header.is_none() {
            log::warn!("building API client without an auth token");
        }

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            auth_header,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth_header {
            Some(auth) => request.header(header::AUTHORIZATION, auth),
            None => request,
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .authorize(self.client.get(&url))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            log::error!("GET {} failed: {} - {}", endpoint, status, body);
            return Err(ApiError::Status { status, body }.into());
        }

        let result = response.json::<T>().await?;
        Ok(result)
    }

    async fn post<B: serde::Serialize>(&self, endpoint: &str, body: &B) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .authorize(self.client.post(&url))
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        Ok(response)
    }

    /// Get the logged-in user's profile
    pub async fn get_user_info(&self) -> Result<User> {
        self.get("/user/api/info").await
    }

    /// List the tasks scheduled on the given day, parsed and validated
    pub async fn list_tasks(&self, day: NaiveDate) -> Result<Vec<ScheduleItem>> {
        let endpoint = format!("/task/api/list?date={}", day.format("%Y-%m-%d"));
        let tasks: Vec<TaskDto> = self.get(&endpoint).await?;
        tasks
            .into_iter()
            .map(TaskDto::into_item)
            .collect::<Result<Vec<_>>>()
            .context("Server returned an invalid task")
    }

    /// Register a new account. The server reports an already-taken user id
    /// through its message body; surface that as a typed error so the form
    /// can attach it to the right field.
    pub async fn sign_up(&self, form: &SignupForm) -> Result<()> {
        let response = self.post("/signup", form).await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            if let Ok(msg) = serde_json::from_str::<ApiMessage>(&body) {
                if msg.message == "UserId is duplicated" {
                    return Err(ApiError::DuplicateUserId.into());
                }
            }
            log::error!("signup failed: {} - {}", status, body);
            return Err(ApiError::Status { status, body }.into());
        }

        Ok(())
    }
}

/// [`ScheduleSource`] over the remote API. Owns its runtime and blocks on
/// it per call, so the synchronous engine side never sees a future.
pub struct RemoteSource {
    client: ApiClient,
    runtime: tokio::runtime::Runtime,
}

impl RemoteSource {
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .context("Failed to create tokio runtime")?;
        Ok(Self {
            client: ApiClient::new(config)?,
            runtime,
        })
    }
}

impl ScheduleSource for RemoteSource {
    fn schedules_for_day(&self, day: NaiveDate) -> Result<Vec<ScheduleItem>> {
        self.runtime.block_on(self.client.list_tasks(day))
    }
}
