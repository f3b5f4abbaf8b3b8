//! Backend REST client
//!
//! Thin wrapper over the backend's spec endpoints. Every request attaches
//! the bearer token from the session provider when one exists; every 401
//! clears the stored auth state before surfacing, a global side effect
//! the shell observes through the session change channel. A 404 on a spec
//! fetch also drops the locally cached last-spec-id.
//!
//! There is no retry, queuing or deduplication: each call is one
//! independent request and late responses win whatever state they touch.

pub mod auth;

pub use auth::{RegisterRequest, TokenPair};

use crate::config::ClientConfig;
use crate::error::{Error, Result, GENERIC_FAILURE};
use crate::model::SpecRecord;
use crate::session::SessionState;
use crate::stubs::{CodeStubsRequest, CodeStubsResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Client for the Whisk backend API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionState,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: SessionState) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            session,
        }
    }

    /// The session provider this client mutates on auth events.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Generate a new specification from an idea.
    ///
    /// An empty idea is rejected locally; no request is made.
    pub async fn generate_spec(&self, idea: &str) -> Result<SpecRecord> {
        if idea.trim().is_empty() {
            return Err(Error::validation("Please enter an idea"));
        }
        let record: SpecRecord =
            self.post_json("specs/generate/", &json!({ "idea": idea })).await?;
        self.session.set_last_spec_id(&record.id);
        Ok(record)
    }

    /// List the most recent specifications. Ordering and limit are
    /// server-defined.
    pub async fn get_specs(&self) -> Result<Vec<SpecRecord>> {
        self.get_json("specs/").await
    }

    /// Fetch one specification. A 404 clears the cached last-spec-id.
    pub async fn get_spec(&self, id: &str) -> Result<SpecRecord> {
        match self.get_json::<SpecRecord>(&format!("specs/{}/", id)).await {
            Ok(record) => {
                self.session.set_last_spec_id(&record.id);
                Ok(record)
            }
            Err(err) => {
                if matches!(err, Error::NotFound(_)) {
                    self.session.clear_last_spec_id();
                }
                Err(err)
            }
        }
    }

    /// Refine an existing specification with natural-language feedback.
    /// Returns the updated record: same id, new `spec_json`/`updated_at`.
    pub async fn refine_spec(&self, id: &str, feedback: &str) -> Result<SpecRecord> {
        if feedback.trim().is_empty() {
            return Err(Error::validation("Please enter feedback"));
        }
        let record: SpecRecord = self
            .post_json(&format!("specs/refine/{}/", id), &json!({ "feedback": feedback }))
            .await?;
        self.session.set_last_spec_id(&record.id);
        Ok(record)
    }

    /// Generate boilerplate source text for one module of a specification.
    pub async fn generate_code_stubs(
        &self,
        request: &CodeStubsRequest,
    ) -> Result<CodeStubsResponse> {
        self.post_json("code-stubs/", request).await
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.send(self.http.get(self.url(path))).await?;
        decode_body(resp).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self.send(self.http.post(self.url(path)).json(body)).await?;
        decode_body(resp).await
    }

    /// Attach the bearer token, send, and map failures.
    pub(crate) async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let req = match self.session.access_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().await.map_err(|e| Error::Network(e.to_string()))?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            // Token expired or invalid: clear local auth state. The shell
            // picks this up over the session channel and lands on login.
            log::warn!("received 401, clearing stored session");
            self.session.clear_auth();
            return Err(Error::Unauthorized);
        }
        Err(classify_failure(status, &body))
    }
}

async fn decode_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    resp.json::<T>()
        .await
        .map_err(|e| Error::Server(format!("unexpected response body: {}", e)))
}

/// Map a non-success, non-401 response to the error taxonomy.
pub(crate) fn classify_failure(status: StatusCode, body: &str) -> Error {
    let message = extract_message(body);
    match status {
        StatusCode::NOT_FOUND => {
            Error::NotFound(message.unwrap_or_else(|| "Specification not found".to_string()))
        }
        s if s.is_client_error() => Error::Validation {
            message: message.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            fields: extract_field_errors(body),
        },
        _ => Error::Server(message.unwrap_or_else(|| GENERIC_FAILURE.to_string())),
    }
}

/// Pull a human-readable message out of a response body. The backend uses
/// `error` for its own failures and `detail` for framework ones.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["error", "detail", "message"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            return Some(msg.to_string());
        }
    }
    None
}

/// Field-level messages: object entries whose values are arrays of
/// strings, the shape validation errors arrive in.
pub(crate) fn extract_field_errors(body: &str) -> BTreeMap<String, Vec<String>> {
    let mut fields = BTreeMap::new();
    let Ok(serde_json::Value::Object(map)) = serde_json::from_str(body) else {
        return fields;
    };
    for (key, value) in map {
        if key == "error" || key == "detail" || key == "message" {
            continue;
        }
        if let serde_json::Value::Array(items) = value {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect();
            if !messages.is_empty() {
                fields.insert(key, messages);
            }
        }
    }
    fields
}
