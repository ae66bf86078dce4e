use std::borrow::Cow;
use std::collections::HashMap;

/// Turns a raw request URI into the path routes are matched against.
///
/// The query is cut off before decoding so an encoded `%3F` stays part of
/// the path. The base path is removed only when the decoded path starts
/// with it as whole segments, so `/app` leaves `/apple` alone. An empty
/// result is treated as `/`.
pub fn normalize_path(raw_path: &str, base_path: Option<&str>) -> String {
    let without_query = raw_path
        .split_once('?')
        .map_or(raw_path, |(path, _)| path);
    let decoded = percent_decode(without_query);
    let decoded: &str = &decoded;

    let stripped = match base_path {
        Some(base) if !base.is_empty() => match decoded.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => decoded,
        },
        _ => decoded,
    };

    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}

/// Percent-decodes `input`, replacing sequences that are not valid UTF-8.
pub fn percent_decode(input: &str) -> Cow<'_, str> {
    match urlencoding::decode(input) {
        Ok(decoded) => decoded,
        Err(_) => {
            let bytes = urlencoding::decode_binary(input.as_bytes());
            Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

pub fn parse_query_string(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if !key.is_empty() => Some((
                    urlencoding::decode(key).ok()?.into_owned(),
                    urlencoding::decode(&value.replace('+', " ")).ok()?.into_owned(),
                )),
                _ => None,
            }
        })
        .collect()
}
