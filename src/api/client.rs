use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{Span, instrument};
use url::Url;

use crate::error::{AppError, AppResult};

use super::request::ApiRequest;

pub const NYLAS_API_BASE_URL: &str = "https://api.nylas.com";

/// Performs an [`ApiRequest`] and yields the decoded response body.
pub trait Execute {
    fn execute(&self, request: ApiRequest) -> impl Future<Output = AppResult<Value>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpExecutor {
    http: Client,
    base_url: String,
}

impl HttpExecutor {
    pub fn new() -> Self {
        Self::with_base_url(NYLAS_API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, request: &ApiRequest) -> AppResult<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.set_path(request.endpoint.collection().trim_start_matches('/'));

        match (&request.path, request.endpoint.takes_path()) {
            (Some(segment), true) => {
                url.path_segments_mut()
                    .map_err(|_| {
                        AppError::Config(format!(
                            "api base url `{}` cannot carry a path",
                            self.base_url
                        ))
                    })?
                    .push(segment);
            }
            (None, true) => {
                return Err(AppError::InvalidInput(format!(
                    "endpoint {} needs a path segment",
                    request.endpoint.template()
                )));
            }
            (_, false) => {}
        }

        Ok(url)
    }

    async fn parse_json_response(&self, response: reqwest::Response) -> AppResult<Value> {
        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&body)?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(map_api_error(status, &body))
    }
}

impl Default for HttpExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Execute for HttpExecutor {
    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(
            http.method = %request.method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    async fn execute(&self, request: ApiRequest) -> AppResult<Value> {
        let url = self.endpoint_url(&request)?;
        Span::current().record("http.url", url.as_str());

        let mut builder = self.http.request(request.method.into(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| AppError::InvalidInput(format!("invalid header name: {e}")))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| AppError::InvalidInput(format!("invalid header value: {e}")))?;
            builder = builder.header(name, value);
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let response = builder.send().await?;
        Span::current().record("http.status_code", response.status().as_u16());
        self.parse_json_response(response).await
    }
}

#[derive(Debug, Deserialize)]
struct NylasApiError {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    let message = parse_api_error_message(body).unwrap_or_else(|| {
        let body = body.trim();
        if body.is_empty() {
            "no error details in response body".to_string()
        } else {
            body.to_string()
        }
    });

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AppError::Auth(format!(
            "nylas api authorization failed ({status}): {message}. check the access token"
        ));
    }

    AppError::Api(format!("nylas api request failed ({status}): {message}"))
}

fn parse_api_error_message(body: &str) -> Option<String> {
    let error = serde_json::from_str::<NylasApiError>(body).ok()?;
    let mut parts = Vec::new();

    if let Some(message) = error.message {
        parts.push(message);
    }

    if let Some(kind) = error.kind {
        parts.push(format!("type={kind}"));
    }

    if parts.is_empty() {
        return None;
    }

    Some(parts.join(", "))
}
