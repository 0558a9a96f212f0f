//! Connection setup and the HTTP/1.1 exchange
//!
//! Plain TCP for `http`, rustls over TCP for `https`. Each connection serves
//! exactly one request and is dropped with the runtime that drove it.

use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::rt::TokioIo;
use rustls::pki_types::ServerName;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use url::Url;

use super::stats::ClientStats;
use crate::config::HttpConfig;
use crate::error::{self, Result};
use crate::http::ResponseHead;

/// A connected transport, plain or TLS.
pub(crate) trait Io: AsyncRead + AsyncWrite + Unpin + Send + 'static {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send + 'static> Io for T {}

pub(crate) async fn connect(
    url: &Url,
    config: &HttpConfig,
    stats: &ClientStats,
) -> Result<Box<dyn Io>> {
    let host = url
        .host_str()
        .ok_or_else(|| error::url_missing_host(url.clone()))?;
    let port = url
        .port_or_known_default()
        .ok_or_else(|| error::url_bad_scheme(url.clone()))?;
    // IPv6 literals come back bracketed from `host_str`.
    let addr_host = host.trim_start_matches('[').trim_end_matches(']');

    tracing::trace!(host = addr_host, port, "connecting");
    let tcp = match tokio::time::timeout(
        config.connect_timeout,
        TcpStream::connect((addr_host, port)),
    )
    .await
    {
        Ok(Ok(tcp)) => tcp,
        Ok(Err(e)) => {
            stats.record_connection_failure();
            return Err(error::connect(e).with_url(url.clone()));
        }
        Err(_) => {
            stats.record_connection_failure();
            return Err(error::timeout().with_url(url.clone()));
        }
    };
    stats.record_connection();

    if let Err(e) = tcp.set_nodelay(config.tcp_nodelay) {
        tracing::debug!(error = %e, "failed to set TCP_NODELAY");
    }

    if url.scheme() != "https" {
        return Ok(Box::new(tcp));
    }

    let server_name = ServerName::try_from(addr_host.to_owned())
        .map_err(|e| error::connect(e).with_url(url.clone()))?;
    let tls = tls_connector()?
        .connect(server_name, tcp)
        .await
        .map_err(|e| {
            stats.record_connection_failure();
            error::connect(e).with_url(url.clone())
        })?;
    tracing::trace!(host = addr_host, "tls established");

    Ok(Box::new(tls))
}

fn tls_connector() -> Result<TlsConnector> {
    let mut roots = rustls::RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = rustls::ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(error::connect)?
        .with_root_certificates(roots)
        .with_no_client_auth();

    Ok(TlsConnector::from(Arc::new(config)))
}

/// Run one request/response exchange over `io` and collect the body.
pub(crate) async fn exchange(
    io: Box<dyn Io>,
    request: http::Request<Full<Bytes>>,
) -> Result<(ResponseHead, Bytes)> {
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(io))
        .await
        .map_err(error::connect)?;

    tokio::spawn(async move {
        if let Err(err) = conn.await {
            tracing::debug!(error = %err, "connection closed with error");
        }
    });

    let response = sender.send_request(request).await.map_err(error::request)?;
    let (parts, body) = response.into_parts();
    let body = body.collect().await.map_err(error::body)?.to_bytes();

    let head = ResponseHead {
        status: parts.status,
        version: parts.version,
        headers: parts.headers,
    };
    Ok((head, body))
}
