use url::Url;

const RECOGNIZED_SCHEMES: &[&str] = &["http", "https", "ftp", "ws", "wss"];

/// Returns true iff `candidate` is an absolute URL with a recognized scheme
/// and a non-empty authority, e.g. `https://example.com/page`.
///
/// Never fails: anything that does not parse is simply invalid.
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.trim().is_empty()
        || !declares_authority(candidate)
        || has_malformed_percent_encoding(candidate)
    {
        return false;
    }

    match Url::parse(candidate) {
        Ok(url) => {
            RECOGNIZED_SCHEMES.contains(&url.scheme())
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

// `Url::parse` accepts `https:example.com` for special schemes; require the
// `scheme://` form explicitly.
fn declares_authority(candidate: &str) -> bool {
    candidate
        .trim_start()
        .split_once("://")
        .is_some_and(|(scheme, _)| {
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        })
}

fn has_malformed_percent_encoding(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
            if !well_formed {
                return true;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    false
}
