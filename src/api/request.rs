//! Plain-data description of one API call.
//!
//! Draft operations assemble an [`ApiRequest`] from validated parameters and
//! hand it to an executor. Nothing here touches the network.

use std::fmt;

use super::endpoints::Endpoint;
use super::models::{DraftFields, Recipient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub endpoint: Endpoint,
    pub path: Option<String>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: Endpoint) -> Self {
        Self {
            method,
            endpoint,
            path: None,
            query: Vec::new(),
            headers: Vec::new(),
            form: Vec::new(),
        }
    }

    pub fn with_path(mut self, segment: impl Into<String>) -> Self {
        self.path = Some(segment.into());
        self
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn with_bearer(self, access_token: &str) -> Self {
        self.with_header("Authorization", format!("Bearer {access_token}"))
    }

    pub fn with_form(mut self, form: Vec<(String, String)>) -> Self {
        self.form = form;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        lookup(&self.headers, name)
    }

    pub fn form_value(&self, key: &str) -> Option<&str> {
        lookup(&self.form, key)
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value.as_str())
}

/// Flattens compose fields into form pairs using bracket notation
/// (`to[0][email]`, `file_ids[1]`). Unset fields and empty lists emit nothing.
pub fn draft_form(fields: &DraftFields) -> Vec<(String, String)> {
    let mut form = Vec::new();

    for (key, recipients) in fields.recipient_lists() {
        if let Some(recipients) = recipients {
            push_recipients(&mut form, key, recipients);
        }
    }

    if let Some(file_ids) = &fields.file_ids {
        for (index, id) in file_ids.iter().enumerate() {
            form.push((format!("file_ids[{index}]"), id.clone()));
        }
    }

    if let Some(subject) = &fields.subject {
        form.push(("subject".to_string(), subject.clone()));
    }

    if let Some(body) = &fields.body {
        form.push(("body".to_string(), body.clone()));
    }

    form
}

fn push_recipients(form: &mut Vec<(String, String)>, key: &str, recipients: &[Recipient]) {
    for (index, recipient) in recipients.iter().enumerate() {
        if let Some(name) = &recipient.name {
            form.push((format!("{key}[{index}][name]"), name.clone()));
        }
        form.push((format!("{key}[{index}][email]"), recipient.email.clone()));
    }
}
