use crate::params::{PATH_PARAMS, RequestParams};

const DEFAULT_SCHEME: &str = "https";

/// Substitute path placeholders in a full URL template.
///
/// Every path segment that is spelled exactly like one of [`PATH_PARAMS`]
/// and whose key is present in `params` is replaced with the value's string
/// form. Other segments are left untouched, including placeholders the
/// caller did not supply. Values are inserted verbatim: nothing is
/// percent-encoded, so values containing `/` or reserved characters must be
/// encoded by the caller.
///
/// A blank template yields an empty string. The scheme is kept as given;
/// a template without one is treated as `https`.
///
/// # Example
///
/// ```
/// use tunesrs::{RequestParams, substitute_path_params};
///
/// let params = RequestParams::new()
///     .with("playlist_id", "P1")
///     .with("market", "SE");
///
/// assert_eq!(
///     substitute_path_params(&params, "https://x/playlists/playlist_id/tracks"),
///     "https://x/playlists/P1/tracks",
/// );
/// ```
pub fn substitute_path_params(params: &RequestParams, template: &str) -> String {
    if template.trim().is_empty() {
        return String::new();
    }

    let (scheme, rest) = template
        .split_once("://")
        .unwrap_or((DEFAULT_SCHEME, template));

    let lookup = params.restrict(PATH_PARAMS);

    let path = rest
        .split('/')
        .map(|segment| match lookup.get(segment) {
            Some(value) => value.to_string(),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/");

    format!("{scheme}://{path}")
}

/// Placeholder segments still present in an already substituted URL.
pub(crate) fn unresolved_placeholders(url: &str) -> Vec<&str> {
    let path = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    path.split('/')
        .filter(|segment| PATH_PARAMS.contains(segment))
        .collect()
}
