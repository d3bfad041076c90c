//! Share key and sub-path extraction from `/d/<key>[/<path...>]` links.

use percent_encoding::percent_decode_str;

/// A public link split into its share key and optional path inside the share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Opaque share identifier, kept exactly as it appeared in the URL.
    pub key: String,
    /// Decoded sub-path inside the share (leading `/`), or `None` for the share root.
    pub path: Option<String>,
    /// Scheme and host of the original link, e.g. `https://disk.yandex.ru`.
    pub origin: String,
}

impl ShareLink {
    /// `origin/d/key` on the host the link was shared from.
    pub fn share_url(&self) -> String {
        format!("{}/d/{}", self.origin, self.key)
    }

    /// `canonical_origin/d/key`, for mirrors the lookup API does not accept.
    pub fn canonical_share_url(&self, canonical_origin: &str) -> String {
        format!("{}/d/{}", canonical_origin.trim_end_matches('/'), self.key)
    }
}

/// Splits a `/d/` share link into key, sub-path and origin.
///
/// Returns `None` if the URL does not parse, has no `d` segment followed by a
/// key (e.g. `/i/` direct-file links), or if the sub-path has a malformed
/// `%` escape or does not decode to valid UTF-8.
pub fn extract_key_and_path(url: &str) -> Option<ShareLink> {
    let parsed = url::Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path().split('/').filter(|s| !s.is_empty()).collect();

    let d_index = segments.iter().position(|s| *s == "d")?;
    let key = segments.get(d_index + 1)?;

    let tail = segments[d_index + 2..].join("/");
    let path = if tail.is_empty() {
        None
    } else {
        if !escapes_well_formed(&tail) {
            return None;
        }
        let decoded = percent_decode_str(&tail).decode_utf8().ok()?;
        Some(format!("/{}", decoded))
    };

    Some(ShareLink {
        key: key.to_string(),
        path,
        origin: parsed.origin().ascii_serialization(),
    })
}

/// Every `%` is followed by two hex digits.
fn escapes_well_formed(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
