//! REST client for the school backend.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};

use crate::endpoints;
use crate::session::{AuthBackend, Credentials};
use crate::storage::{KeyValueBackend, StorageService};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network request failed: {0}")]
    Network(String),
    /// Non-2xx response; `message` is the body's `message` or a generic
    /// `HTTP error! status: N`.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Build the error for a non-2xx response.
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {status}"));
    ApiError::Api { status, message }
}

/// One request in a [`ApiClient::batch`] fan-out.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl BatchRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }
}

/// Settled results of the dashboard fan-out. Each part fails independently.
#[derive(Debug)]
pub struct DashboardBatch {
    pub classes: Result<Value, ApiError>,
    pub staff: Result<Value, ApiError>,
    pub academic_session: Result<Value, ApiError>,
}

impl DashboardBatch {
    pub fn class_count(&self) -> Option<usize> {
        self.classes.as_ref().ok().and_then(record_count)
    }

    pub fn staff_count(&self) -> Option<usize> {
        self.staff.as_ref().ok().and_then(record_count)
    }
}

/// Length of a list response, either a bare array or wrapped in `data`.
fn record_count(body: &Value) -> Option<usize> {
    body.as_array()
        .or_else(|| body.get("data").and_then(Value::as_array))
        .map(Vec::len)
}

/// Thin JSON-over-HTTP client.
///
/// The bearer token is read from storage on every call, so a login or logout
/// takes effect on the next request without touching the client.
#[derive(Debug, Clone)]
pub struct ApiClient<B> {
    base_url: String,
    http: reqwest::Client,
    storage: Arc<StorageService<B>>,
}

impl<B: KeyValueBackend> ApiClient<B> {
    pub fn new(base_url: impl Into<String>, storage: Arc<StorageService<B>>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        self.send(method, path, &[], body).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method.clone(), &url);

        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(token) = self.storage.token().await {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::warn!(%method, path, "api request failed: {e}");
            ApiError::Network(e.to_string())
        })?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            let err = status_error(status.as_u16(), &text);
            tracing::warn!(%method, path, status = status.as_u16(), "api error: {err}");
            return Err(err);
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, path, &[], None).await
    }

    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        self.send(Method::GET, path, query, None).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, &[], None).await
    }

    // auth

    pub async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.post(endpoints::auth::LOGIN, &body).await
    }

    pub async fn register(&self, user: &Value) -> Result<Value, ApiError> {
        self.post(endpoints::auth::REGISTER, user).await
    }

    pub async fn verify_token(&self) -> Result<Value, ApiError> {
        self.get(endpoints::auth::VERIFY).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<Value, ApiError> {
        self.post(endpoints::auth::FORGOT_PASSWORD, &json!({ "email": email }))
            .await
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> Result<Value, ApiError> {
        self.post(
            endpoints::auth::RESET_PASSWORD,
            &json!({ "token": token, "password": password }),
        )
        .await
    }

    // user

    pub async fn user_profile(&self) -> Result<Value, ApiError> {
        self.get(endpoints::user::PROFILE).await
    }

    pub async fn user_role_info(&self) -> Result<Value, ApiError> {
        self.get(endpoints::user::ROLE_INFO).await
    }

    pub async fn store_push_tokens(&self, tokens: &Value) -> Result<Value, ApiError> {
        self.post(endpoints::user::PUSH_TOKENS, tokens).await
    }

    // classes

    pub async fn available_classes(&self) -> Result<Value, ApiError> {
        self.get(endpoints::class::GET_AVAILABLE_CLASSES).await
    }

    pub async fn class(&self, class_name: &str, section: &str) -> Result<Value, ApiError> {
        self.get_with_query(
            endpoints::class::GET_CLASS,
            &[("className", class_name), ("section", section)],
        )
        .await
    }

    pub async fn student_list(&self, class_name: &str, section: &str) -> Result<Value, ApiError> {
        self.get_with_query(
            endpoints::class::GET_STUDENT_LIST,
            &[("className", class_name), ("section", section)],
        )
        .await
    }

    pub async fn add_class(&self, class: &Value) -> Result<Value, ApiError> {
        self.post(endpoints::class::ADD_NEW_CLASS, class).await
    }

    pub async fn update_class(&self, class_id: &str, class: &Value) -> Result<Value, ApiError> {
        self.put(&format!("{}/{class_id}", endpoints::class::UPDATE_CLASS), class)
            .await
    }

    pub async fn delete_class(&self, class_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("{}/{class_id}", endpoints::class::DELETE_CLASS))
            .await
    }

    // students

    pub async fn add_student(&self, student: &Value) -> Result<Value, ApiError> {
        self.post(endpoints::student::ADD_NEW_STUDENT, student).await
    }

    pub async fn update_student(&self, student_id: &str, student: &Value) -> Result<Value, ApiError> {
        self.put(
            &format!("{}/{student_id}", endpoints::student::UPDATE_STUDENT),
            student,
        )
        .await
    }

    pub async fn delete_student(&self, student_id: &str) -> Result<Value, ApiError> {
        self.delete(&format!("{}/{student_id}", endpoints::student::DELETE_STUDENT))
            .await
    }

    pub async fn student_details(&self, student_id: &str) -> Result<Value, ApiError> {
        self.get(&format!("{}/{student_id}", endpoints::student::GET_STUDENT_DETAILS))
            .await
    }

    // staff

    pub async fn all_teachers(&self) -> Result<Value, ApiError> {
        self.get(endpoints::staff::GET_ALL_TEACHERS).await
    }

    pub async fn all_staff(&self) -> Result<Value, ApiError> {
        self.get(endpoints::staff::GET_ALL_STAFF).await
    }

    pub async fn staff_details(&self, staff_id: &str) -> Result<Value, ApiError> {
        self.get(&format!("{}/{staff_id}", endpoints::staff::GET_STAFF_DETAILS))
            .await
    }

    // fees

    pub async fn student_fee_status(&self, student_id: &str) -> Result<Value, ApiError> {
        self.get_with_query(endpoints::fee::GET_FEE_STATUS, &[("sti", student_id)])
            .await
    }

    pub async fn pay_fee(&self, payment: &Value) -> Result<Value, ApiError> {
        self.post(endpoints::fee::PAY_FEE, payment).await
    }

    // academic sessions

    pub async fn academic_sessions(&self) -> Result<Value, ApiError> {
        self.get(endpoints::academic_session::GET_ALL).await
    }

    pub async fn current_academic_session(&self) -> Result<Value, ApiError> {
        self.get(endpoints::academic_session::GET_CURRENT).await
    }

    /// Issue every request concurrently and wait for all of them; one
    /// failure does not cancel the rest. Results keep request order.
    pub async fn batch(&self, requests: &[BatchRequest]) -> Vec<Result<Value, ApiError>> {
        let calls = requests
            .iter()
            .map(|r| self.request(r.method.clone(), &r.path, r.body.as_ref()));
        futures::future::join_all(calls).await
    }

    pub async fn dashboard_stats(&self) -> DashboardBatch {
        let requests = [
            BatchRequest::get(endpoints::class::GET_AVAILABLE_CLASSES),
            BatchRequest::get(endpoints::staff::GET_ALL_STAFF),
            BatchRequest::get(endpoints::academic_session::GET_CURRENT),
        ];

        let mut results = self.batch(&requests).await.into_iter();
        let mut next = || {
            results
                .next()
                .unwrap_or_else(|| Err(ApiError::Parse("missing batch result".to_string())))
        };

        DashboardBatch {
            classes: next(),
            staff: next(),
            academic_session: next(),
        }
    }
}

#[async_trait]
impl<B: KeyValueBackend> AuthBackend for ApiClient<B> {
    async fn login(&self, credentials: &Credentials) -> Result<Value, ApiError> {
        ApiClient::login(self, credentials).await
    }
}
