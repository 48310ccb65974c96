use std::time::Duration;

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::{Error, Result};

/// Production endpoint root for the management API.
pub const DEFAULT_BASE_URL: &str = "https://api.deepgram.com/v1";

/// Shared HTTP plumbing for every management call.
///
/// One send routine serves all four verbs: build the URL, set the auth and
/// content-type headers, issue the request, then classify the outcome in the
/// order the wire makes failures visible — transport error, HTTP status,
/// blank body, malformed JSON, vendor error payload — before handing the
/// decoded value back for typed deserialization.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| Error::configuration(format!("invalid base URL {base_url:?}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub async fn get(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Value> {
        self.send(Method::GET, segments, query, None).await
    }

    pub async fn post(&self, segments: &[&str], body: &Value) -> Result<Value> {
        self.send(Method::POST, segments, &[], Some(body)).await
    }

    pub async fn patch(&self, segments: &[&str], body: &Value) -> Result<Value> {
        self.send(Method::PATCH, segments, &[], Some(body)).await
    }

    pub async fn delete(&self, segments: &[&str]) -> Result<Value> {
        self.send(Method::DELETE, segments, &[], None).await
    }

    /// Join path segments onto the base URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::configuration("base URL cannot serve as an endpoint root"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = self.endpoint(segments)?;
        debug!(%method, path = url.path(), "management API request");

        let mut request = self
            .client
            .request(method, url)
            .header("Authorization", format!("Token {}", self.api_key))
            .header("Content-Type", "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(Error::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body: (!text.is_empty()).then(|| text),
            });
        }

        if text.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }

        let json: Value = serde_json::from_str(&text).map_err(|source| Error::MalformedJson {
            source,
            body: text.clone(),
        })?;

        if let Some(err) = vendor_error(&json) {
            warn!(error = %err, "vendor error payload in success response");
            return Err(err);
        }

        Ok(json)
    }
}

/// Detect a vendor error payload embedded in a success body.
///
/// The API has answered errors in two shapes over time: `err_code`/`err_msg`
/// and `error`/`reason`. Both carry an optional `request_id`.
fn vendor_error(json: &Value) -> Option<Error> {
    let request_id = json
        .get("request_id")
        .and_then(Value::as_str)
        .map(String::from);

    if let Some(code) = json.get("err_code") {
        return Some(Error::Vendor {
            code: stringify(code),
            message: json.get("err_msg").map(stringify).unwrap_or_default(),
            request_id,
        });
    }

    if let Some(code) = json.get("error") {
        return Some(Error::Vendor {
            code: stringify(code),
            message: json.get("reason").map(stringify).unwrap_or_default(),
            request_id,
        });
    }

    None
}

// Vendor error fields are usually strings but not contractually so.
fn stringify(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
