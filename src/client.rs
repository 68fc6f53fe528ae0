//! HTTP transport bound to one server and at most one credential.

use crate::auth::Credential;
use crate::constants;
use crate::error::Error;
use crate::logging::{get_max_body_len, log_request, log_response};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::trace;

/// Query string pairs for list endpoints; `None` values are skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn opt<T: ToString>(mut self, key: &'static str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.0.push((key, value.to_string()));
        }
        self
    }

    #[must_use]
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

pub struct RecotemClient {
    http: reqwest::Client,
    base_url: String,
    credential: Option<Credential>,
}

impl RecotemClient {
    /// Builds an unauthenticated client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        install_crypto_provider();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(constants::HTTP_TIMEOUT_SECS))
            .user_agent(concat!("recotem-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential: None,
        })
    }

    #[must_use]
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    #[must_use]
    pub const fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Absolute URL of a path under `/api/v1/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            constants::API_PREFIX,
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.endpoint(path));
        match &self.credential {
            Some(credential) => builder.header(credential.header_name(), credential.header_value()),
            None => builder,
        }
    }

    /// Sends the request and turns any non-2xx status into [`Error::Http`].
    async fn send(&self, builder: RequestBuilder) -> Result<Response, Error> {
        let request = builder.build()?;
        let body = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .and_then(|bytes| std::str::from_utf8(bytes).ok());
        log_request(
            request.method(),
            request.url().as_str(),
            Some(request.headers()),
            body,
        );

        let start = Instant::now();
        let response = self.http.execute(request).await?;
        let status = response.status();
        log_response(
            status,
            start.elapsed().as_millis(),
            Some(response.headers()),
            None,
            get_max_body_len(),
        );

        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        trace!(target: "recotem::client", "Error body: {}", body);
        Err(Error::Http { status, body })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
        let text = response.text().await?;
        trace!(target: "recotem::client", "Response body: {}", text);
        Ok(serde_json::from_str(&text)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
    ) -> Result<T, Error> {
        let response = self
            .send(self.request(Method::GET, path).query(query.pairs()))
            .await?;
        Self::read_json(response).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, Error> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn get_text(&self, path: &str, query: &Query) -> Result<String, Error> {
        let response = self
            .send(self.request(Method::GET, path).query(query.pairs()))
            .await?;
        Ok(response.text().await?)
    }

    pub(crate) async fn send_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let response = self.send(self.request(method, path).json(body)).await?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.send_json(Method::POST, path, body).await
    }

    pub(crate) async fn patch_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        self.send_json(Method::PATCH, path, body).await
    }

    /// POST whose response body is not interpreted.
    pub(crate) async fn post_action<B: Serialize + Sync>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, Error> {
        let builder = self.request(Method::POST, path);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        Ok(self.send(builder).await?.text().await?)
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        let response = self
            .send(self.request(Method::POST, path).multipart(form))
            .await?;
        Self::read_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}

/// reqwest is built without a default TLS provider; install ours once.
fn install_crypto_provider() {
    #[cfg(not(windows))]
    let _ = rustls::crypto::ring::default_provider().install_default();
    #[cfg(windows)]
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}
