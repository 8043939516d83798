use dify_config::constants::{BUCKET_FILLER, MAX_BUCKET_NAME, MIN_BUCKET_NAME, RESOURCE_PREFIX};
use tracing::debug;

/// Lowercases `s` and maps it onto `[a-z0-9-]`, collapsing separator runs
/// and stripping separators at either end. May return an empty string.
pub fn sanitize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        let c = if c.is_ascii_lowercase() || c.is_ascii_digit() {
            c
        } else {
            '-'
        };

        if c == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(c);
    }

    if out.ends_with('-') {
        out.pop();
    }
    out
}

// Input is already sanitized, so every char is one byte.
fn truncate(name: &str, max_length: usize) -> &str {
    name[..name.len().min(max_length)].trim_end_matches('-')
}

/// Joins the sanitized, non-empty `parts` with `-` and bounds the result to
/// `max_length`. Never returns an empty string and never ends with `-`.
pub fn build_resource_name<S: AsRef<str>>(parts: &[S], max_length: usize) -> String {
    let max_length = max_length.max(1);

    let joined = parts
        .iter()
        .map(|part| sanitize(part.as_ref()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    let joined = sanitize(&joined);
    let name = truncate(&joined, max_length);
    if !name.is_empty() {
        return name.to_string();
    }

    debug!("Resource name parts sanitized to nothing, falling back to prefix");
    let fallback = sanitize(RESOURCE_PREFIX);
    let fallback = truncate(&fallback, max_length);
    if !fallback.is_empty() {
        return fallback.to_string();
    }

    RESOURCE_PREFIX.chars().take(max_length).collect()
}

/// Builds the shared part of every bucket name. Deferred account or region
/// segments are left out.
pub fn bucket_base(prefix: &str, segments: &[Option<&str>]) -> String {
    let mut parts = vec![prefix];
    parts.extend(segments.iter().flatten().copied());
    build_resource_name(&parts, MAX_BUCKET_NAME)
}

/// Like `build_resource_name`, but shortens `head` first so the sanitized
/// `tail` survives truncation. Names that differ only in their tail stay
/// distinct however long `head` is.
pub fn build_scoped_name<S: AsRef<str>>(head: &str, tail: &[S], max_length: usize) -> String {
    let max_length = max_length.max(1);
    let tail = tail
        .iter()
        .map(|part| sanitize(part.as_ref()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    // Tail alone fills the ceiling, nothing to reserve.
    if tail.is_empty() || tail.len() + 1 >= max_length {
        return build_resource_name(&[head, tail.as_str()], max_length);
    }

    let head = sanitize(head);
    let head = truncate(&head, max_length - tail.len() - 1);
    build_resource_name(&[head, tail.as_str()], max_length)
}

pub fn build_bucket_name(base: &str, suffix: &str) -> String {
    pad_bucket_name(build_scoped_name(base, &[suffix], MAX_BUCKET_NAME))
}

pub(crate) fn pad_bucket_name(mut name: String) -> String {
    while name.len() < MIN_BUCKET_NAME {
        name.push(BUCKET_FILLER);
    }
    name
}

/// Builds a `/`-separated parameter-store path from sanitized segments.
pub fn build_parameter_path<S: AsRef<str>>(parts: &[S], max_length: usize) -> String {
    let segments = parts
        .iter()
        .map(|part| sanitize(part.as_ref()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();

    let segments = if segments.is_empty() {
        vec![RESOURCE_PREFIX.to_string()]
    } else {
        segments
    };

    // Every segment starts with [a-z0-9], so at least "/x" survives.
    let path = format!("/{}", segments.join("/"));
    let max_length = max_length.max(2);
    path[..path.len().min(max_length)]
        .trim_end_matches(['-', '/'])
        .to_string()
}
