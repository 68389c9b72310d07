//! Client key derivation from request origin.

/// Address used when no origin information is present at all.
pub const FALLBACK_ADDR: &str = "127.0.0.1";

/// Derive the rate-limit key for a request from its origin headers.
///
/// Precedence: first entry of a comma-separated forwarded-for value, else a
/// real-ip value, else [`FALLBACK_ADDR`]. Candidates are trimmed and empty
/// ones fall through to the next. The result is best-effort identity only --
/// these headers are client-controlled unless a trusted reverse proxy sets
/// them.
///
/// Takes plain string values rather than a header map so the calling HTTP
/// layer can use whatever header types it likes.
pub fn derive_client_key(forwarded_for: Option<&str>, real_ip: Option<&str>) -> String {
    if let Some(forwarded) = forwarded_for {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(ip) = real_ip {
        let ip = ip.trim();
        if !ip.is_empty() {
            return ip.to_string();
        }
    }

    FALLBACK_ADDR.to_string()
}
