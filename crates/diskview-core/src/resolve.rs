//! Public link -> direct media URL.
//!
//! The lookup API accepts `public_key` in different forms depending on the
//! link shape (regional vs canonical host, full URL vs bare key, with or
//! without a sub-path). Resolution tries a fixed list of query forms in order
//! and returns the first `href`. Lookups are sequential; a failed attempt is
//! logged and the next one is tried.

use crate::config::DiskviewConfig;
use crate::error::ResolveError;
use crate::lookup::{self, CurlTransport, LookupQuery, LookupTransport};
use crate::provider::{self, CANONICAL_ORIGIN};
use crate::share_link::{self, ShareLink};

/// Settings that shape the attempt list and where it is sent.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    pub api_base: String,
    pub canonical_origin: String,
    /// Skip queries identical to one already tried (happens when the link is
    /// already on the canonical host).
    pub dedupe_attempts: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            api_base: lookup::DEFAULT_API_BASE.to_string(),
            canonical_origin: CANONICAL_ORIGIN.to_string(),
            dedupe_attempts: false,
        }
    }
}

impl From<&DiskviewConfig> for ResolverOptions {
    fn from(cfg: &DiskviewConfig) -> Self {
        Self {
            api_base: cfg.api_base.clone(),
            canonical_origin: cfg.canonical_origin.clone(),
            dedupe_attempts: cfg.dedupe_attempts,
        }
    }
}

/// Ordered lookup queries for `public_url`.
///
/// 1. the full link as `public_key`;
/// 2. `origin/d/key` with the sub-path;
/// 3. canonical `/d/key` with the sub-path;
/// 4. `origin/d/key` alone (share root);
/// 5. canonical `/d/key` alone.
///
/// Only the first is produced when the link has no `/d/<key>` segment.
pub fn plan_attempts(
    public_url: &str,
    share: Option<&ShareLink>,
    canonical_origin: &str,
    dedupe: bool,
) -> Vec<LookupQuery> {
    let mut attempts = vec![LookupQuery::new(public_url, None)];

    if let Some(share) = share {
        let original = share.share_url();
        let canonical = share.canonical_share_url(canonical_origin);
        attempts.push(LookupQuery::new(original.clone(), share.path.clone()));
        attempts.push(LookupQuery::new(canonical.clone(), share.path.clone()));
        attempts.push(LookupQuery::new(original, None));
        attempts.push(LookupQuery::new(canonical, None));
    }

    if dedupe {
        let mut seen: Vec<LookupQuery> = Vec::with_capacity(attempts.len());
        attempts.retain(|q| {
            if seen.contains(q) {
                false
            } else {
                seen.push(q.clone());
                true
            }
        });
    }

    attempts
}

/// Resolves public links through a [`LookupTransport`].
///
/// Holds no state between calls; each `resolve` is independent.
#[derive(Debug, Clone)]
pub struct Resolver<T = CurlTransport> {
    transport: T,
    options: ResolverOptions,
}

impl Resolver<CurlTransport> {
    /// Resolver using libcurl with timeouts and API settings from config.
    pub fn from_config(cfg: &DiskviewConfig) -> Self {
        Resolver::new(CurlTransport::from(cfg), ResolverOptions::from(cfg))
    }
}

impl<T: LookupTransport> Resolver<T> {
    pub fn new(transport: T, options: ResolverOptions) -> Self {
        Self { transport, options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Lookup queries `resolve` would send for `public_url`, in order.
    pub fn attempts_for(&self, public_url: &str) -> Vec<LookupQuery> {
        let share = share_link::extract_key_and_path(public_url);
        plan_attempts(
            public_url,
            share.as_ref(),
            &self.options.canonical_origin,
            self.options.dedupe_attempts,
        )
    }

    /// Returns the direct media URL for a Yandex.Disk public link.
    ///
    /// Fails with [`ResolveError::UnsupportedHost`] before any request if the
    /// link is not on a Yandex.Disk host, and with
    /// [`ResolveError::ResolutionFailed`] once every attempt has failed.
    pub fn resolve(&self, public_url: &str) -> Result<String, ResolveError> {
        if !provider::is_supported_host(public_url) {
            tracing::warn!(url = %public_url, "not a Yandex.Disk link");
            return Err(ResolveError::UnsupportedHost);
        }

        let attempts = self.attempts_for(public_url);
        let total = attempts.len();
        for (i, query) in attempts.iter().enumerate() {
            let n = i + 1;
            tracing::debug!(attempt = n, total, %query, "lookup");
            match self.try_lookup(query) {
                Ok(href) => {
                    tracing::info!(attempt = n, url = %public_url, "resolved direct link");
                    return Ok(href);
                }
                Err(e) => {
                    let reason = format!("{:#}", e);
                    tracing::debug!(attempt = n, error = %reason, "lookup failed");
                }
            }
        }

        tracing::warn!(url = %public_url, attempts = total, "all lookups failed");
        Err(ResolveError::ResolutionFailed)
    }

    fn try_lookup(&self, query: &LookupQuery) -> anyhow::Result<String> {
        let url = query.to_url(&self.options.api_base)?;
        let reply = self.transport.get(url.as_str())?;
        lookup::href_from_reply(&reply)
    }
}
