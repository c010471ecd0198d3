//! GCP Runtime Configurator client
//!
//! Authenticates with the instance's default service account token from
//! the metadata server, then creates the variable through the REST API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::RuntimeConfigExecutor;
use crate::asserts::{Failure, Outcome};
use crate::suite::SetRuntimeConfigVar;

#[derive(Deserialize, Debug)]
struct ServiceAccountToken {
    access_token: String,
    #[serde(default)]
    expires_in: i64,
    #[serde(default)]
    token_type: String,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
struct VariablePayload {
    name: String,
    value: String,
}

/// Sets Runtime Configurator variables over HTTP
pub struct RuntimeConfigClient {
    client: reqwest::Client,
    token_url: String,
}

impl RuntimeConfigClient {
    pub fn new(client: reqwest::Client, token_url: String) -> Self {
        Self { client, token_url }
    }

    async fn fetch_access_token(&self) -> std::result::Result<String, String> {
        let response = self
            .client
            .get(&self.token_url)
            .header("Metadata-Flavor", "Google")
            .send()
            .await
            .map_err(|e| format!("Unable to GET access token: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Error GETting access token: {status}"));
        }

        let token: ServiceAccountToken = response
            .json()
            .await
            .map_err(|e| format!("Unable to parse access token: {e}"))?;
        tracing::info!(
            "Acquired service account token ({}, expires in {}s)",
            token.token_type,
            token.expires_in
        );
        Ok(token.access_token)
    }
}

/// Build the variable payload for a config self link
///
/// The config path is the self link's path without its leading version
/// segment, e.g. `/v1beta1/projects/p/configs/c` becomes `projects/p/configs/c`.
fn variable_payload(
    config_url: &reqwest::Url,
    request: &SetRuntimeConfigVar,
) -> VariablePayload {
    let config_path = config_url
        .path()
        .split('/')
        .skip(2)
        .collect::<Vec<_>>()
        .join("/");
    VariablePayload {
        name: format!("{config_path}/variables/{}", request.variable_path),
        value: request.base64_value.clone(),
    }
}

#[async_trait]
impl RuntimeConfigExecutor for RuntimeConfigClient {
    async fn set_variable(&self, request: &SetRuntimeConfigVar) -> Outcome {
        let config_url = reqwest::Url::parse(&request.runtime_config_self_link).map_err(|_| {
            Failure::new(format!(
                "Invalid runtime config self link: {}",
                request.runtime_config_self_link
            ))
        })?;
        let payload = variable_payload(&config_url, request);

        let token = self
            .fetch_access_token()
            .await
            .map_err(|e| Failure::new(format!("Unable to fetch access token: {e}")))?;

        let endpoint = format!("{}/variables", config_url.as_str().trim_end_matches('/'));
        tracing::debug!("POST {} name={}", endpoint, payload.name);

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Failure::new(format!("POST request error: {e}")))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Failure::new(format!("POST request status: {status}")));
        }
        Ok(())
    }
}
