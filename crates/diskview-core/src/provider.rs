//! Yandex.Disk host classification.
//!
//! Public shares are served from `disk.yandex.ru` and from regional mirrors
//! such as `disk.xx.yandex.ru`; both forms are accepted.

/// Host serving public shares on the main domain.
pub const PROVIDER_HOST: &str = "disk.yandex.ru";

/// Origin the lookup API always recognizes as a share prefix.
pub const CANONICAL_ORIGIN: &str = "https://disk.yandex.ru";

const SUBDOMAIN_PREFIX: &str = "disk.";
const ROOT_SUFFIX: &str = ".yandex.ru";

/// True if `url` parses and its host belongs to the Yandex.Disk family.
///
/// Never fails: malformed input is simply not a supported host.
pub fn is_supported_host(url: &str) -> bool {
    let parsed = match url::Url::parse(url) {
        Ok(u) => u,
        Err(_) => return false,
    };
    match parsed.host_str() {
        Some(host) => host_matches(&host.to_ascii_lowercase()),
        None => false,
    }
}

fn host_matches(host: &str) -> bool {
    host == PROVIDER_HOST || (host.starts_with(SUBDOMAIN_PREFIX) && host.ends_with(ROOT_SUFFIX))
}
