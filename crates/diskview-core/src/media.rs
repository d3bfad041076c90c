//! Extension-based guess whether a URL already points at a playable video.

/// Video container extensions a player can open directly.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "m4v"];

/// True if the last path segment of `url` ends in a known video extension.
///
/// Case-insensitive. Returns `false` when the URL does not parse, the path
/// ends with `/`, or the segment has no extension.
pub fn looks_like_direct_media(url: &str) -> bool {
    match extension_of(url) {
        Some(ext) => VIDEO_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

fn extension_of(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    // `/video.mp4/` names a directory, not a file.
    if parsed.path().ends_with('/') {
        return None;
    }
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
