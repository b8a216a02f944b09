//! Client for the drafts resource.
//!
//! Every operation resolves the access token against the default held by
//! [`Options`], validates its parameters, splits them into path, header,
//! query and form body, and issues exactly one request through the executor.
//! Nothing is kept between calls.

use serde_json::Value;
use tracing::debug;

use crate::error::AppResult;

use super::client::{Execute, HttpExecutor};
use super::endpoints::Endpoint;
use super::models::{DeleteDraft, GetDraft, ListDrafts, NewDraft, UpdateDraft};
use super::request::{ApiRequest, Method, draft_form};
use super::validate::check;

/// Read-only settings shared by every resource client: the default access
/// token and the executor that performs requests.
#[derive(Debug, Clone)]
pub struct Options<E = HttpExecutor> {
    access_token: Option<String>,
    executor: E,
}

impl Options<HttpExecutor> {
    pub fn new(access_token: Option<String>) -> Self {
        Self::with_executor(access_token, HttpExecutor::new())
    }
}

impl<E: Execute> Options<E> {
    pub fn with_executor(access_token: Option<String>, executor: E) -> Self {
        Self {
            access_token,
            executor,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn drafts(&self) -> Drafts<'_, E> {
        Drafts { options: self }
    }

    fn resolve_token(&self, explicit: Option<String>) -> Option<String> {
        explicit.or_else(|| self.access_token.clone())
    }
}

#[derive(Debug)]
pub struct Drafts<'a, E = HttpExecutor> {
    options: &'a Options<E>,
}

impl<E: Execute> Drafts<'_, E> {
    pub async fn list(
        &self,
        any_email: Option<&str>,
        access_token: Option<&str>,
    ) -> AppResult<Value> {
        let params = ListDrafts {
            any_email: any_email
                .filter(|email| !email.is_empty())
                .map(ToOwned::to_owned),
            access_token: self.options.resolve_token(access_token.map(ToOwned::to_owned)),
        };
        check(&params)?;

        let query = match params.any_email {
            Some(email) => vec![("any_email".to_string(), [email].join(","))],
            None => Vec::new(),
        };
        let request = ApiRequest::new(Method::Get, Endpoint::Drafts)
            .with_query(query)
            .with_bearer(token(&params.access_token));

        self.send(request).await
    }

    pub async fn get(&self, draft_id: &str, access_token: Option<&str>) -> AppResult<Value> {
        let params = GetDraft {
            id: draft_id.to_string(),
            access_token: self.options.resolve_token(access_token.map(ToOwned::to_owned)),
        };
        check(&params)?;

        let request = ApiRequest::new(Method::Get, Endpoint::OneDraft)
            .with_path(params.id)
            .with_bearer(token(&params.access_token));

        self.send(request).await
    }

    pub async fn add(&self, mut params: NewDraft) -> AppResult<Value> {
        params.access_token = self.options.resolve_token(params.access_token.take());
        check(&params)?;

        let request = ApiRequest::new(Method::Post, Endpoint::Drafts)
            .with_form(draft_form(&params.fields))
            .with_bearer(token(&params.access_token));

        self.send(request).await
    }

    pub async fn update(&self, mut params: UpdateDraft) -> AppResult<Value> {
        params.access_token = self.options.resolve_token(params.access_token.take());
        check(&params)?;

        let mut form = draft_form(&params.fields);
        form.push(("version".to_string(), params.version.unwrap_or_default()));

        let request = ApiRequest::new(Method::Put, Endpoint::OneDraft)
            .with_path(params.id.unwrap_or_default())
            .with_form(form)
            .with_bearer(token(&params.access_token));

        self.send(request).await
    }

    pub async fn delete(&self, mut params: DeleteDraft) -> AppResult<Value> {
        params.access_token = self.options.resolve_token(params.access_token.take());
        check(&params)?;

        let form = vec![("version".to_string(), params.version.unwrap_or_default())];
        let request = ApiRequest::new(Method::Delete, Endpoint::OneDraft)
            .with_path(params.id.unwrap_or_default())
            .with_form(form)
            .with_bearer(token(&params.access_token));

        self.send(request).await
    }

    async fn send(&self, request: ApiRequest) -> AppResult<Value> {
        debug!(
            method = %request.method,
            endpoint = request.endpoint.template(),
            path = request.path.as_deref().unwrap_or(""),
            form_fields = request.form.len(),
            "issuing drafts request"
        );
        self.options.executor.execute(request).await
    }
}

// Only called after validation has required the token.
fn token(access_token: &Option<String>) -> &str {
    access_token.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::api::models::{DraftFields, Recipient};
    use crate::error::AppError;

    #[derive(Debug, Default)]
    struct Recorder {
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl Recorder {
        fn taken(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Execute for Recorder {
        async fn execute(&self, request: ApiRequest) -> AppResult<Value> {
            self.requests.lock().unwrap().push(request);
            Ok(json!({"id": "d1", "version": "1"}))
        }
    }

    fn options() -> Options<Recorder> {
        Options::with_executor(Some("default-token".to_string()), Recorder::default())
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn list_with_filter_sets_query() {
        let options = options();
        options.drafts().list(Some("a@x.com"), None).await.unwrap();

        let requests = options.executor().taken();
        let request = &requests[0];
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.endpoint, Endpoint::Drafts);
        assert_eq!(request.query, pairs(&[("any_email", "a@x.com")]));
        assert_eq!(request.header("Authorization"), Some("Bearer default-token"));
        assert!(request.form.is_empty());
    }

    #[tokio::test]
    async fn list_without_filter_has_empty_query() {
        let options = options();
        options.drafts().list(None, None).await.unwrap();
        options.drafts().list(Some(""), None).await.unwrap();

        for request in options.executor().taken() {
            assert!(request.query.is_empty());
        }
    }

    #[tokio::test]
    async fn list_rejects_malformed_filter_before_sending() {
        let options = options();
        let error = options.drafts().list(Some("nope"), None).await.unwrap_err();

        assert!(matches!(error, AppError::Validation(_)));
        assert!(options.executor().taken().is_empty());
    }

    #[tokio::test]
    async fn explicit_token_overrides_default() {
        let options = options();
        options.drafts().list(None, Some("mine")).await.unwrap();

        let requests = options.executor().taken();
        let request = &requests[0];
        assert_eq!(request.header("Authorization"), Some("Bearer mine"));
    }

    #[tokio::test]
    async fn missing_default_token_fails_validation() {
        let options = Options::with_executor(None, Recorder::default());
        let error = options.drafts().get("d1", None).await.unwrap_err();

        match error {
            AppError::Validation(error) => assert_eq!(error.keys(), ["access_token"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn writes_without_any_token_fail_before_sending() {
        let options = Options::with_executor(None, Recorder::default());
        let drafts = options.drafts();

        let added = drafts.add(NewDraft::default()).await.unwrap_err();
        let updated = drafts.update(UpdateDraft::new("d1", "1")).await.unwrap_err();
        let deleted = drafts.delete(DeleteDraft::new("d1", "1")).await.unwrap_err();

        for error in [added, updated, deleted] {
            match error {
                AppError::Validation(error) => assert_eq!(error.keys(), ["access_token"]),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
        assert!(options.executor().taken().is_empty());
    }

    #[tokio::test]
    async fn list_rejects_display_text_filter() {
        let options = options();
        let error = options
            .drafts()
            .list(Some("Ada <ada@x.com>"), None)
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::Validation(ref e) if e.has_key("any_email[0]")));
        assert!(options.executor().taken().is_empty());
    }

    #[tokio::test]
    async fn add_rejects_display_text_recipient() {
        let options = options();
        let params = NewDraft {
            fields: DraftFields {
                to: Some(vec![Recipient::new("Ada <ada@x.com>")]),
                ..DraftFields::default()
            },
            access_token: None,
        };

        let error = options.drafts().add(params).await.unwrap_err();
        assert!(matches!(error, AppError::Validation(ref e) if e.has_key("to[0].email")));
        assert!(options.executor().taken().is_empty());
    }

    #[tokio::test]
    async fn get_targets_single_draft() {
        let options = options();
        let draft = options.drafts().get("d1", None).await.unwrap();

        assert_eq!(draft["id"], "d1");
        let requests = options.executor().taken();
        let request = &requests[0];
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.endpoint, Endpoint::OneDraft);
        assert_eq!(request.path.as_deref(), Some("d1"));
        assert!(request.form.is_empty());
    }

    #[tokio::test]
    async fn get_rejects_empty_id() {
        let options = options();
        let error = options.drafts().get("", None).await.unwrap_err();
        assert!(matches!(error, AppError::Validation(ref e) if e.has_key("id")));
    }

    #[tokio::test]
    async fn repeated_get_issues_independent_requests() {
        let options = options();
        options.drafts().get("d1", None).await.unwrap();
        options.drafts().get("d1", None).await.unwrap();

        let requests = options.executor().taken();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    #[tokio::test]
    async fn add_sends_fields_as_form_without_token() {
        let options = options();
        let params = NewDraft {
            fields: DraftFields {
                subject: Some("hi".to_string()),
                to: Some(vec![Recipient::new("a@x.com")]),
                ..DraftFields::default()
            },
            access_token: None,
        };
        options.drafts().add(params).await.unwrap();

        let requests = options.executor().taken();
        let request = &requests[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.endpoint, Endpoint::Drafts);
        assert_eq!(request.path, None);
        assert_eq!(
            request.form,
            pairs(&[("to[0][email]", "a@x.com"), ("subject", "hi")])
        );
        assert_eq!(request.form_value("access_token"), None);
    }

    #[tokio::test]
    async fn update_moves_id_to_path_and_keeps_version_in_body() {
        let options = options();
        let mut params = UpdateDraft::new("d1", "3");
        params.fields.body = Some("text".to_string());
        params.access_token = Some("mine".to_string());
        options.drafts().update(params).await.unwrap();

        let requests = options.executor().taken();
        let request = &requests[0];
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.endpoint, Endpoint::OneDraft);
        assert_eq!(request.path.as_deref(), Some("d1"));
        assert_eq!(request.form, pairs(&[("body", "text"), ("version", "3")]));
        assert_eq!(request.header("Authorization"), Some("Bearer mine"));
    }

    #[tokio::test]
    async fn update_without_identity_never_sends() {
        let options = options();
        let params = UpdateDraft {
            fields: DraftFields {
                subject: Some("hi".to_string()),
                ..DraftFields::default()
            },
            ..UpdateDraft::default()
        };

        let error = options.drafts().update(params).await.unwrap_err();
        assert!(matches!(error, AppError::Validation(_)));
        assert!(options.executor().taken().is_empty());
    }

    #[tokio::test]
    async fn delete_sends_version_only() {
        let options = options();
        options
            .drafts()
            .delete(DeleteDraft::new("d1", "1"))
            .await
            .unwrap();

        let requests = options.executor().taken();
        let request = &requests[0];
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.endpoint, Endpoint::OneDraft);
        assert_eq!(request.path.as_deref(), Some("d1"));
        assert_eq!(request.form, pairs(&[("version", "1")]));
    }
}
