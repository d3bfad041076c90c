//! User-facing resolution failures.

use thiserror::Error;

/// Why a public link could not be turned into a direct media URL.
///
/// The display text is shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The link is not on `disk.yandex.ru` or one of its regional mirrors.
    /// No request is made in this case.
    #[error("expected a disk.yandex.ru public link")]
    UnsupportedHost,
    /// Every lookup attempt failed or returned no `href`.
    #[error("could not obtain a direct link from Yandex.Disk")]
    ResolutionFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_readable() {
        assert_eq!(
            ResolveError::UnsupportedHost.to_string(),
            "expected a disk.yandex.ru public link"
        );
        assert_eq!(
            ResolveError::ResolutionFailed.to_string(),
            "could not obtain a direct link from Yandex.Disk"
        );
    }
}
