//! Outward URL building and redirects.

use crate::logging::RouterLogger;
use crate::response::HttpResponse;
use log::Level;

/// Status code written by [`redirect`].
pub const REDIRECT_STATUS: u16 = 302;

/// Signal that the response has been finalized (for example by a redirect)
/// and nothing else in the current handler may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt;

/// What every handler returns. `Err(Halt)` ends the handler early; the
/// dispatch itself still succeeds.
pub type HandlerResult = Result<(), Halt>;

/// Prepends the base path to `pattern`, which must start with `/`.
///
/// Placeholders are not substituted: `url_for(None, "/user/{id}")` returns
/// the pattern unchanged.
pub fn url_for(base_path: Option<&str>, pattern: &str) -> String {
    match base_path {
        Some(base) if !base.is_empty() => format!("{}{}", base, pattern),
        _ => pattern.to_string(),
    }
}

/// Builds a `Location` value from `url` plus optional query parameters.
/// Keys and values are percent-encoded; an empty list adds nothing.
pub fn build_location<K, V>(url: &str, query: Option<&[(K, V)]>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    match query {
        Some(pairs) if !pairs.is_empty() => {
            let encoded: Vec<String> = pairs
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key.as_ref()),
                        urlencoding::encode(value.as_ref())
                    )
                })
                .collect();
            format!("{}?{}", url, encoded.join("&"))
        }
        _ => url.to_string(),
    }
}

/// Writes a 302 with a `Location` header and returns the halt signal.
///
/// Use it as the last expression of a handler or with `?` so that no code
/// after it executes for the current request.
pub fn redirect<K, V>(
    response: &mut HttpResponse,
    logger: &dyn RouterLogger,
    url: &str,
    query: Option<&[(K, V)]>,
) -> HandlerResult
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let location = build_location(url, query);
    logger.log(
        Level::Debug,
        "Redirecting to {location}",
        &[("location", location.clone())],
    );
    response.set_status(REDIRECT_STATUS);
    response.set_header("Location", location);
    Err(Halt)
}

/// Query argument for redirects that carry no parameters.
pub const NO_QUERY: Option<&[(&str, &str)]> = None;
