use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());
static HOST_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9.-]+$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("enter a domain to add")]
    Empty,
    #[error("use a valid domain like youtube.com")]
    Invalid,
}

/// Normalize user-entered domain text to a bare lowercase hostname:
/// strip an optional http(s) scheme, cut at the first path/query/fragment
/// separator, drop the port. Accepts `localhost` or dotted hostnames of
/// `[a-z0-9.-]` only.
pub fn normalize_domain(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Empty);
    }
    let without_scheme = SCHEME.replace(trimmed, "");
    let host_and_port = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host_and_port
        .split(':')
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let allowed_host = host == "localhost" || host.contains('.');
    if host.is_empty() || !allowed_host || !HOST_CHARS.is_match(&host) {
        return Err(DomainError::Invalid);
    }
    Ok(host)
}

pub fn normalize_hostname(raw: &str) -> Option<String> {
    normalize_domain(raw).ok()
}

/// True when `hostname` equals a target domain or is a subdomain of one.
/// Both sides are normalized first; unparseable entries never match.
pub fn matches_target_domain(hostname: &str, target_domains: &[String]) -> bool {
    let Some(host) = normalize_hostname(hostname) else {
        return false;
    };
    target_domains
        .iter()
        .any(|target| match normalize_hostname(target) {
            Some(target) => host == target || host.ends_with(&format!(".{target}")),
            None => false,
        })
}
