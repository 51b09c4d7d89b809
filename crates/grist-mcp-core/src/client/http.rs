//! HTTP call wrapper for the Grist REST API

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;

use crate::config::{resolve_credential, ConfigProvider, Credential};
use crate::error::{GristError, GristResult};
use crate::logging::SharedLogger;
use crate::{log_debug, log_error};

/// Fixed timeout for every Grist request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin client over the Grist REST API
///
/// Holds no per-call state: the credential is resolved from the config
/// provider on every request, and each call issues exactly one HTTP request.
pub struct GristClient {
    http: reqwest::Client,
    config: Arc<dyn ConfigProvider>,
    logger: SharedLogger,
}

impl GristClient {
    pub fn new(config: Arc<dyn ConfigProvider>, logger: SharedLogger) -> GristResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GristError::transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config, logger })
    }

    /// Resolve the credential for the next call
    pub fn credential(&self) -> GristResult<Credential> {
        resolve_credential(self.config.as_ref())
    }

    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    /// Issue one request against `base_url + path`
    ///
    /// The JSON body may be `null`, an object or an array; an empty body is
    /// returned as `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &[(&str, String)],
    ) -> GristResult<Value> {
        let credential = self.credential()?;
        let url = format!("{}/{}", credential.base_url(), path.trim_start_matches('/'));

        log_debug!(
            self.logger,
            "[GristClient] {} {} (key {})",
            method,
            url,
            credential.masked_key()
        );

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(AUTHORIZATION, credential.bearer())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            log_error!(self.logger, "[GristClient] {} {} failed: {}", method, url, e);
            GristError::from(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        log_debug!(self.logger, "[GristClient] {} {} -> {}", method, url, status);

        if !status.is_success() {
            log_error!(
                self.logger,
                "[GristClient] {} {} returned {}: {}",
                method,
                url,
                status,
                text
            );
            return Err(GristError::api(status.as_u16(), text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> GristResult<Value> {
        self.request(Method::GET, path, None, query).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> GristResult<Value> {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    pub async fn patch(&self, path: &str, body: &Value) -> GristResult<Value> {
        self.request(Method::PATCH, path, Some(body), &[]).await
    }
}

impl std::fmt::Debug for GristClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GristClient")
            .field("config", &self.config.name())
            .field("timeout", &REQUEST_TIMEOUT)
            .finish()
    }
}
