//! Caller side of resolution: pick the link to open, remember it, and decide
//! whether it needs the resolver at all.

use crate::error::ResolveError;
use crate::lookup::LookupTransport;
use crate::media;
use crate::provider;
use crate::resolve::Resolver;
use crate::store::LinkStore;

/// What to hand to a player for one submitted link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    /// Link as submitted (trimmed).
    pub source: String,
    /// URL the player should open.
    pub url: String,
    /// True if `url` came from the lookup API rather than `source` itself.
    pub resolved: bool,
}

/// True if `link` must go through the resolver before it can be played.
///
/// Yandex.Disk links always do; anything else only when it does not already
/// look like a video file.
pub fn needs_resolution(link: &str) -> bool {
    provider::is_supported_host(link) || !media::looks_like_direct_media(link)
}

/// Link to open on startup: the saved one, else `default_link`.
///
/// A store that cannot be read counts as empty.
pub fn initial_link<S: LinkStore + ?Sized>(store: &S, default_link: Option<&str>) -> Option<String> {
    let saved = match store.load_last() {
        Ok(saved) => saved,
        Err(e) => {
            tracing::warn!("could not load last link: {:#}", e);
            None
        }
    };
    saved
        .filter(|s| !s.trim().is_empty())
        .or_else(|| default_link.map(str::to_string))
        .filter(|s| !s.trim().is_empty())
}

/// A resolver paired with the store that remembers submitted links.
pub struct Session<S, T> {
    resolver: Resolver<T>,
    store: S,
}

impl<S: LinkStore, T: LookupTransport> Session<S, T> {
    pub fn new(resolver: Resolver<T>, store: S) -> Self {
        Self { resolver, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Opens a submitted link. Blank input is ignored (`Ok(None)`).
    ///
    /// The trimmed link is saved before resolution so it is remembered even
    /// when resolution fails; a failed save is logged and does not stop playback.
    pub fn open(&self, input: &str) -> Result<Option<Playback>, ResolveError> {
        let link = input.trim();
        if link.is_empty() {
            return Ok(None);
        }

        if let Err(e) = self.store.save_last(link) {
            tracing::warn!("could not save last link: {:#}", e);
        }

        let (url, resolved) = if needs_resolution(link) {
            (self.resolver.resolve(link)?, true)
        } else {
            tracing::debug!(url = %link, "playing direct media link as-is");
            (link.to_string(), false)
        };

        Ok(Some(Playback {
            source: link.to_string(),
            url,
            resolved,
        }))
    }
}
