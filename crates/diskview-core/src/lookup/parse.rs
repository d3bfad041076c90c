//! Interpret a lookup reply: 2xx status and a non-empty `href` in the JSON body.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::HttpReply;

/// JSON body returned by the download-link API.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    pub href: Option<String>,
    pub method: Option<String>,
    pub templated: Option<bool>,
}

/// Extracts the direct link from a reply, or explains why the attempt failed.
pub(crate) fn href_from_reply(reply: &HttpReply) -> Result<String> {
    if !reply.is_success() {
        anyhow::bail!("HTTP {}", reply.status);
    }
    let parsed: LookupResponse =
        serde_json::from_slice(&reply.body).context("parse lookup response JSON")?;
    match parsed.href {
        Some(href) if !href.is_empty() => Ok(href),
        _ => anyhow::bail!("lookup response has no href"),
    }
}
