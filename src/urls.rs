//! URL normalization helpers
//!
//! Everything here fails open: a string that does not parse as a URL is
//! handed back (or reported absent) rather than turned into an error, because
//! tab and history rows routinely contain junk like `favorites://` or bare
//! search terms.

use url::Url;

/// Scheme used by Tab Suspender for Safari to wrap the real address.
const SUSPENDED_SCHEME: &str = "safari-extension";

fn parse_url(url: &str) -> Option<Url> {
    Url::parse(url).ok()
}

/// Returns the real address of a tab, unwrapping suspended tabs.
///
/// Suspended tabs carry the original address in a `url` query parameter of a
/// `safari-extension:` page; that parameter is returned percent-decoded.
/// Anything else, including unparsable input, passes through unchanged.
pub fn get_tab_url(url: &str) -> String {
    if let Some(parsed) = parse_url(url) {
        if parsed.scheme() == SUSPENDED_SCHEME {
            let wrapped = parsed
                .query_pairs()
                .find(|(key, _)| key == "url")
                .map(|(_, value)| value.into_owned());
            if let Some(wrapped) = wrapped {
                if !wrapped.is_empty() {
                    return wrapped;
                }
            }
        }
    }

    url.to_string()
}

/// Returns the host of `url` with a leading `www.` stripped.
///
/// `None` when the input does not parse or has no host.
pub fn get_url_domain(url: &str) -> Option<String> {
    let parsed = parse_url(url)?;
    let host = parsed.host_str()?;
    if host.is_empty() {
        return None;
    }
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}
