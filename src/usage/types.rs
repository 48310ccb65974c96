//! Wire shapes and query filters for the usage endpoints.
//!
//! Option structs render to query pairs with [`to_query`]; unset fields are
//! never sent, multi-valued filters repeat their key.

use serde::Deserialize;
use serde_json::Value;

/// Filter for the request listing.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Inclusive start of the window, ISO-8601.
    pub start: Option<String>,
    /// Exclusive end of the window, ISO-8601.
    pub end: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    /// `"succeeded"` or `"failed"`.
    pub status: Option<String>,
}

impl RequestOptions {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "start", &self.start);
        push_opt(&mut query, "end", &self.end);
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        push_opt(&mut query, "status", &self.status);
        query
    }
}

/// Envelope around the request listing.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageRequests {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    pub requests: Vec<UsageRequest>,
}

/// One transcription request as reported by the usage API.
///
/// `response` and `callback` vary by product feature, so they stay
/// loosely typed.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageRequest {
    pub request_id: String,
    pub created: String,
    pub path: String,
    #[serde(default)]
    pub api_key_id: Option<String>,
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default)]
    pub callback: Option<Value>,
}

/// Filter for the usage summary.
#[derive(Debug, Clone, Default)]
pub struct UsageOptions {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Limit to requests made by one key (`accessor` is the key id).
    pub accessor: Option<String>,
    /// Limit to requests carrying these tags.
    pub tag: Vec<String>,
    pub method: Option<String>,
    pub model: Option<String>,
    pub multichannel: Option<bool>,
    pub interim_results: Option<bool>,
    pub punctuate: Option<bool>,
    pub ner: Option<bool>,
    pub utterances: Option<bool>,
    pub replace: Option<bool>,
    pub profanity_filter: Option<bool>,
    pub keywords: Option<bool>,
    pub detect_topics: Option<bool>,
    pub diarize: Option<bool>,
    pub search: Option<bool>,
    pub redact: Option<bool>,
    pub alternatives: Option<bool>,
    pub numerals: Option<bool>,
    pub smart_format: Option<bool>,
}

impl UsageOptions {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "start", &self.start);
        push_opt(&mut query, "end", &self.end);
        push_opt(&mut query, "accessor", &self.accessor);
        for tag in &self.tag {
            query.push(("tag", tag.clone()));
        }
        push_opt(&mut query, "method", &self.method);
        push_opt(&mut query, "model", &self.model);
        push_flag(&mut query, "multichannel", self.multichannel);
        push_flag(&mut query, "interim_results", self.interim_results);
        push_flag(&mut query, "punctuate", self.punctuate);
        push_flag(&mut query, "ner", self.ner);
        push_flag(&mut query, "utterances", self.utterances);
        push_flag(&mut query, "replace", self.replace);
        push_flag(&mut query, "profanity_filter", self.profanity_filter);
        push_flag(&mut query, "keywords", self.keywords);
        push_flag(&mut query, "detect_topics", self.detect_topics);
        push_flag(&mut query, "diarize", self.diarize);
        push_flag(&mut query, "search", self.search);
        push_flag(&mut query, "redact", self.redact);
        push_flag(&mut query, "alternatives", self.alternatives);
        push_flag(&mut query, "numerals", self.numerals);
        push_flag(&mut query, "smart_format", self.smart_format);
        query
    }
}

/// Usage aggregated over a period.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageSummary {
    pub start: String,
    pub end: String,
    pub resolution: Resolution,
    pub results: Vec<UsageResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resolution {
    pub units: String,
    pub amount: u64,
}

/// Usage within one resolution bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageResult {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub requests: Option<u64>,
}

/// Window for the usage-fields listing.
#[derive(Debug, Clone, Default)]
pub struct FieldsOptions {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl FieldsOptions {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_opt(&mut query, "start", &self.start);
        push_opt(&mut query, "end", &self.end);
        query
    }
}

/// Everything that showed up in a project's usage over a window.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageFields {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub models: Vec<UsageModel>,
    #[serde(default)]
    pub processing_methods: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsageModel {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
}

fn push_opt(query: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        query.push((key, value.clone()));
    }
}

fn push_flag(query: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<bool>) {
    if let Some(value) = value {
        query.push((key, value.to_string()));
    }
}
