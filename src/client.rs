//! HTTP client for the GraphQL endpoint
//!
//! Owns the reqwest client and the endpoint URL, sends the introspection
//! query and turns every failure mode into an error-tagged
//! [`SchemaModel`](crate::schema::SchemaModel). Introspection failures never
//! surface as `Err`: the caller always gets a model it can render or
//! serialize, with `error` set when something went wrong.

use std::time::Duration;

use serde_json::Value as JsonValue;
use tracing::debug;
use url::Url;

use crate::errors::{GqldocsError, Result};
use crate::schema::introspection::IntrospectionDocument;
use crate::schema::{SchemaModel, INTROSPECTION_QUERY, PROBE_QUERY};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT: f64 = 30.0;

/// Leading bytes of an error body included in the invalid-JSON message
const ERROR_BODY_PREVIEW: usize = 200;

/// Client for a single GraphQL endpoint
#[derive(Debug, Clone)]
pub struct IntrospectionClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl IntrospectionClient {
    /// Build a client for `endpoint` with the given timeout.
    ///
    /// A URL without an explicit path is pointed at the conventional
    /// `/graphql` route. Local and staging endpoints frequently sit behind
    /// self-signed certificates, so callers normally pass
    /// `accept_invalid_certs = true`.
    pub fn new(endpoint: &str, timeout: f64, accept_invalid_certs: bool) -> Result<Self> {
        let endpoint = graphql_endpoint(endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs_f64(timeout))
            .danger_accept_invalid_certs(accept_invalid_certs)
            .user_agent(concat!("gqldocs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(IntrospectionClient { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetch and normalize the schema. Never returns `Err`: every failure
    /// mode maps to an error-tagged model.
    pub async fn fetch_schema(&self) -> SchemaModel {
        debug!(endpoint = %self.endpoint, "sending introspection query");

        let response = match self
            .client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({"query": INTROSPECTION_QUERY}))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return SchemaModel::from_error(format!("HTTP request failed: {}", e)),
        };

        let status = response.status();
        if !status.is_success() {
            return SchemaModel::from_error(format!(
                "HTTP {} - Server returned error response",
                status.as_u16()
            ));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return SchemaModel::from_error(format!("HTTP request failed: {}", e)),
        };

        process_introspection_body(&body)
    }

    /// Lightweight health check: asks the endpoint only for its query root
    /// name and fails on any transport or GraphQL-level error.
    pub async fn probe(&self) -> Result<()> {
        debug!(endpoint = %self.endpoint, "probing endpoint");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({"query": PROBE_QUERY}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GqldocsError::Status(status.as_u16()));
        }

        let payload: JsonValue = response.json().await?;
        if let Some(errors) = payload.get("errors").and_then(JsonValue::as_array) {
            if !errors.is_empty() {
                return Err(GqldocsError::Schema(join_graphql_errors(errors)));
            }
        }
        if payload.pointer("/data/__schema/queryType/name").is_none() {
            return Err(GqldocsError::Schema(
                "endpoint did not answer the introspection probe".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parse an endpoint string, defaulting a bare host to the `/graphql` path
fn graphql_endpoint(endpoint: &str) -> Result<Url> {
    let mut url = Url::parse(endpoint)?;
    if url.path() == "/" || url.path().is_empty() {
        url.set_path("/graphql");
    }
    Ok(url)
}

/// Decode an introspection response body into a schema model.
///
/// Checks, in order: an HTML body (misconfigured endpoint), invalid JSON,
/// a GraphQL `errors` array, and a missing `data.__schema` section.
fn process_introspection_body(body: &str) -> SchemaModel {
    if body.contains("<!DOCTYPE html") || body.contains("<html") {
        return SchemaModel::from_error(
            "GraphQL endpoint returned HTML page instead of JSON. \
             Please check if GraphQL module is enabled and URL is correct.",
        );
    }

    let payload: JsonValue = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => {
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            return SchemaModel::from_error(format!(
                "Invalid JSON response: {}. Response: {}",
                e, preview
            ));
        }
    };

    if let Some(errors) = payload.get("errors").and_then(JsonValue::as_array) {
        if !errors.is_empty() {
            return SchemaModel::from_error(format!(
                "GraphQL Errors: {}",
                join_graphql_errors(errors)
            ));
        }
    }

    let Some(schema) = payload.pointer("/data/__schema") else {
        return SchemaModel::from_error(
            "No GraphQL schema data found in response. \
             Please check if GraphQL is properly configured.",
        );
    };

    match serde_json::from_value::<IntrospectionDocument>(schema.clone()) {
        Ok(doc) => SchemaModel::from_introspection(&doc),
        Err(e) => {
            let preview: String = schema.to_string().chars().take(ERROR_BODY_PREVIEW).collect();
            SchemaModel::from_error(format!("Invalid JSON response: {}. Response: {}", e, preview))
        }
    }
}

fn join_graphql_errors(errors: &[JsonValue]) -> String {
    let messages: Vec<&str> = errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(JsonValue::as_str)
                .unwrap_or("Unknown error")
        })
        .collect();
    messages.join(", ")
}
