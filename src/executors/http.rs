//! HTTP executor backed by reqwest

use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use std::time::Duration;

use super::{HttpExecutor, HttpRequest, HttpResponse};
use crate::asserts::Failure;
use crate::common::config::HttpConfig;
use crate::common::Result;

/// Build the shared client from configuration
pub(super) fn build_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Sends requests with a reqwest client
pub struct ReqwestExecutor {
    client: reqwest::Client,
}

impl ReqwestExecutor {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_request(
        &self,
        request: HttpRequest<'_>,
    ) -> std::result::Result<reqwest::Request, String> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| format!("invalid method '{}': {e}", request.method))?;
        let url = reqwest::Url::parse(request.url).map_err(|e| format!("invalid URL: {e}"))?;

        let mut builder = self.client.request(method, url);
        for (key, value) in request.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| format!("invalid header name '{key}': {e}"))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| format!("invalid header value for '{key}': {e}"))?;
            builder = builder.header(name, value);
        }
        builder.build().map_err(|e| e.to_string())
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: HttpRequest<'_>) -> std::result::Result<HttpResponse, Failure> {
        let req = self
            .build_request(request)
            .map_err(|e| Failure::new(format!("HTTP request creation error: {e}")))?;

        tracing::debug!("Sending {} {}", req.method(), req.url());
        let response = self
            .client
            .execute(req)
            .await
            .map_err(|e| Failure::new(format!("HTTP request error: {e}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|_| Failure::new("Unexpected error reading the body"))?;
        tracing::debug!("Received {} ({} bytes)", status, body.len());

        Ok(HttpResponse {
            status_code: status.as_u16(),
            status_text: match status.canonical_reason() {
                Some(reason) => format!("{} {}", status.as_u16(), reason),
                None => status.as_u16().to_string(),
            },
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
