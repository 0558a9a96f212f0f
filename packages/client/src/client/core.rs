//! Core HTTP client implementation
//!
//! `HttpClient` is the default [`Sender`]: one blocking HTTP/1.1 exchange per
//! call, each on its own short-lived runtime and connection.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use http::header::{HOST, USER_AGENT};
use http::{HeaderValue, Version};
use http_body_util::Full;
use url::Url;

use super::connect;
use super::sender::Sender;
use super::stats::ClientStats;
use crate::config::HttpConfig;
use crate::error::{self, Result};
use crate::http::{HttpRequest, HttpResponse, ResponseBody, ResponseHead};

/// Blocking HTTP client backed by hyper.
///
/// Cloning is cheap and clones share statistics.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: Arc<HttpConfig>,
    stats: Arc<ClientStats>,
}

impl HttpClient {
    /// Create HttpClient with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    /// Create HttpClient with custom configuration
    #[must_use]
    pub fn with_config(config: HttpConfig) -> Self {
        Self {
            config: Arc::new(config),
            stats: Arc::new(ClientStats::default()),
        }
    }

    /// Start configuring a client
    #[must_use]
    pub fn builder() -> super::HttpClientBuilder {
        super::HttpClientBuilder::new()
    }

    /// Get client configuration
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Get client statistics, shared with clones
    #[must_use]
    pub fn stats(&self) -> Arc<ClientStats> {
        self.stats.clone()
    }

    fn check_url(&self, url: &Url) -> Result<()> {
        match url.scheme() {
            "https" => {}
            "http" if !self.config.https_only => {}
            _ => return Err(error::url_bad_scheme(url.clone())),
        }
        if url.host_str().is_none() {
            return Err(error::url_missing_host(url.clone()));
        }
        Ok(())
    }

    /// Translate an `HttpRequest` into the hyper request sent on the wire.
    fn wire_request(&self, request: &HttpRequest) -> Result<http::Request<Full<bytes::Bytes>>> {
        let url = request.url();
        let target = &url[url::Position::BeforePath..url::Position::AfterQuery];

        let mut builder = http::Request::builder()
            .method(request.method().clone())
            .uri(target)
            .version(Version::HTTP_11);

        if let Some(headers) = builder.headers_mut() {
            headers.extend(request.headers().clone());

            if !headers.contains_key(HOST) {
                headers.insert(HOST, host_header(url)?);
            }
            if !headers.contains_key(USER_AGENT)
                && let Ok(agent) = HeaderValue::from_str(&self.config.user_agent)
            {
                headers.insert(USER_AGENT, agent);
            }
        }

        let body = request.body().cloned().unwrap_or_default();
        builder
            .body(Full::new(body))
            .map_err(|e| error::builder(e).with_url(url.clone()))
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = request.url().clone();
        self.check_url(&url)?;
        let wire = self.wire_request(request)?;

        // block_on panics on a thread that already drives a runtime.
        let (head, body) = if tokio::runtime::Handle::try_current().is_ok() {
            tracing::trace!("inside a tokio runtime, exchanging on a helper thread");
            thread::scope(|scope| {
                scope
                    .spawn(|| self.block_on_exchange(url, wire))
                    .join()
                    .unwrap_or_else(|_| Err(error::request("exchange thread panicked")))
            })?
        } else {
            self.block_on_exchange(url, wire)?
        };

        self.stats.record_bytes_received(body.len() as u64);
        Ok(HttpResponse::from_parts(head, ResponseBody::from(body)))
    }

    /// Drive one connect-and-exchange to completion on a private runtime.
    fn block_on_exchange(
        &self,
        url: Url,
        wire: http::Request<Full<bytes::Bytes>>,
    ) -> Result<(ResponseHead, bytes::Bytes)> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(error::request)?;

        let timeout_url = url.clone();
        let exchange = async {
            let io = connect::connect(&url, &self.config, &self.stats).await?;
            connect::exchange(io, wire)
                .await
                .map_err(|e| e.with_url(url.clone()))
        };

        runtime.block_on(async {
            match self.config.timeout {
                Some(limit) => tokio::time::timeout(limit, exchange)
                    .await
                    .map_err(|_| error::timeout().with_url(timeout_url))?,
                None => exchange.await,
            }
        })
    }
}

impl Sender for HttpClient {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let started = Instant::now();
        self.stats.record_request();
        if let Some(len) = request.content_length() {
            self.stats.record_bytes_sent(len);
        }

        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        match self.execute(request) {
            Ok(response) => {
                self.stats.record_success();
                tracing::debug!(
                    status = response.status().as_u16(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "received response"
                );
                Ok(response)
            }
            Err(err) => {
                self.stats.record_failure();
                tracing::warn!(url = %request.url(), error = %err, "request failed");
                Err(err)
            }
        }
    }
}

fn host_header(url: &Url) -> Result<HeaderValue> {
    let host = url
        .host_str()
        .ok_or_else(|| error::url_missing_host(url.clone()))?;
    let value = match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    };
    HeaderValue::from_str(&value).map_err(|e| error::builder(e).with_url(url.clone()))
}
