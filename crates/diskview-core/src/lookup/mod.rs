//! Yandex.Disk public-resource download-link API.
//!
//! A lookup is a single GET to the API with a `public_key` (and optionally a
//! `path` inside the share). The transport is a trait so the resolver can be
//! driven by a fake in tests; the real one uses the curl crate (libcurl).

mod parse;

use anyhow::{Context, Result};
use std::fmt;
use std::time::Duration;

pub(crate) use parse::href_from_reply;
pub use parse::LookupResponse;

/// Public-resource download-link endpoint.
pub const DEFAULT_API_BASE: &str =
    "https://cloud-api.yandex.net/v1/disk/public/resources/download";

/// Query parameters of one lookup attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub public_key: String,
    /// Decoded path inside the share; sent as the `path` parameter when set.
    pub path: Option<String>,
}

impl LookupQuery {
    pub fn new(public_key: impl Into<String>, path: Option<String>) -> Self {
        Self {
            public_key: public_key.into(),
            path,
        }
    }

    /// Full request URL: `api_base?public_key=...[&path=...]`.
    pub fn to_url(&self, api_base: &str) -> Result<url::Url> {
        let mut url = url::Url::parse(api_base)
            .with_context(|| format!("invalid lookup API base: {}", api_base))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("public_key", &self.public_key);
            if let Some(path) = &self.path {
                pairs.append_pair("path", path);
            }
        }
        Ok(url)
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "public_key={}", self.public_key)?;
        if let Some(path) = &self.path {
            write!(f, " path={}", path)?;
        }
        Ok(())
    }
}

/// Raw HTTP response of a lookup: status code and body bytes.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the GET for a lookup URL.
///
/// Errors mean the request itself failed (DNS, connect, timeout); any
/// HTTP status is returned as a reply.
pub trait LookupTransport {
    fn get(&self, url: &str) -> Result<HttpReply>;
}

impl<T: LookupTransport + ?Sized> LookupTransport for &T {
    fn get(&self, url: &str) -> Result<HttpReply> {
        (**self).get(url)
    }
}

/// Blocking libcurl transport.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    /// Overall deadline per request; `None` lets a request run as long as the server keeps it open.
    timeout: Option<Duration>,
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, timeout: Option<Duration>) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(15), None)
    }
}

impl LookupTransport for CurlTransport {
    fn get(&self, url: &str) -> Result<HttpReply> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).context("invalid URL")?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(concat!("diskview/", env!("CARGO_PKG_VERSION")))?;
        easy.connect_timeout(self.connect_timeout)?;
        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
        }

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform().context("lookup request failed")?;
        }

        let status = easy.response_code().context("no response code")?;
        Ok(HttpReply { status, body })
    }
}
