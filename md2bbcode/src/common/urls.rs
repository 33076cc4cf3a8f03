//! URL policy shared by both renderers.
//!
//! Every link and image URL goes through [`resolve`]; image URLs then go through
//! [`rasterize`], because forum image tags cannot embed SVG.
//!
//! | Input                                               | Rasterized to                          |
//! |-----------------------------------------------------|----------------------------------------|
//! | `github.com/{o}/{r}/actions/workflows/{w}/badge.svg` | raster.shields.io workflow status PNG  |
//! | any other http(s) `*.svg`                           | images.weserv.nl PNG proxy             |
//! | non-http(s) `*.svg`                                 | not embeddable (`None`)                |
//! | `*.redguides.com/...-sparkline`                     | same URL with `format=png`             |
//! | anything else                                       | unchanged                              |

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Replacement for links with a denied scheme
pub const HARMFUL_LINK: &str = "#harmful-link";

const DENIED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];
const RASTER_SHIELDS_BASE: &str = "https://raster.shields.io";
const WESERV_BASE: &str = "https://images.weserv.nl/";
const SPARKLINE_HOST: &str = "redguides.com";

/// Everything except ASCII alphanumerics and `-._~` is percent-encoded
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// True for `javascript:`, `vbscript:` and `data:` URLs, ignoring case and leading whitespace.
pub fn is_denied(url: &str) -> bool {
    let lowered = url.trim_start().to_ascii_lowercase();
    DENIED_SCHEMES
        .iter()
        .any(|scheme| lowered.starts_with(scheme))
}

/// Sanitizes a URL and resolves it against `domain` when it has no network location.
///
/// An unparseable domain leaves the URL as it is.
pub fn resolve(url: &str, domain: Option<&str>) -> String {
    if is_denied(url) {
        return HARMFUL_LINK.to_string();
    }

    let Some(domain) = domain.filter(|domain| !domain.is_empty()) else {
        return url.to_string();
    };
    if has_network_location(url) {
        return url.to_string();
    }

    match Url::parse(domain).and_then(|base| base.join(url)) {
        Ok(joined) => joined.to_string(),
        Err(err) => {
            tracing::warn!(%domain, %url, %err, "cannot resolve URL against domain");
            url.to_string()
        }
    }
}

fn has_network_location(url: &str) -> bool {
    url.starts_with("//") || Url::parse(url).map(|u| u.has_host()).unwrap_or(false)
}

/// Rewrites an image URL into something a forum can embed.
///
/// Returns `None` when the image is an SVG that cannot be proxied; callers degrade it to a link.
pub fn rasterize(url: &str) -> Option<String> {
    if url.is_empty() {
        return Some(String::new());
    }

    let parsed = Url::parse(url).ok();
    if let Some(badge) = parsed.as_ref().and_then(actions_badge) {
        return Some(badge);
    }

    if path_of(url, parsed.as_ref())
        .to_ascii_lowercase()
        .ends_with(".svg")
    {
        return match &parsed {
            Some(parsed) if is_http(parsed) => Some(format!(
                "{WESERV_BASE}?url={}&output=png",
                utf8_percent_encode(url, URL_COMPONENT)
            )),
            _ => None,
        };
    }

    if let Some(sparkline) = parsed.as_ref().and_then(sparkline_png) {
        return Some(sparkline);
    }

    Some(url.to_string())
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

fn path_of<'a>(raw: &'a str, parsed: Option<&'a Url>) -> &'a str {
    match parsed {
        Some(parsed) => parsed.path(),
        None => {
            let raw = raw.split('#').next().unwrap_or(raw);
            raw.split('?').next().unwrap_or(raw)
        }
    }
}

/// GitHub Actions workflow badges are served as SVG only; shields.io renders the same status as PNG.
fn actions_badge(url: &Url) -> Option<String> {
    if !is_http(url) || url.host_str() != Some("github.com") || url.port().is_some() {
        return None;
    }

    let parts: Vec<&str> = url.path().trim_matches('/').split('/').collect();
    if parts.len() < 6
        || parts[2] != "actions"
        || parts[3] != "workflows"
        || !parts[5].eq_ignore_ascii_case("badge.svg")
    {
        return None;
    }

    let (owner, repo, workflow) = (parts[0], parts[1], parts[4]);
    let mut badge =
        format!("{RASTER_SHIELDS_BASE}/github/actions/workflow/status/{owner}/{repo}/{workflow}.png");

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    let mut kept = 0;
    for key in ["branch", "event"] {
        let value = url
            .query_pairs()
            .find(|(name, value)| name == key && !value.is_empty())
            .map(|(_, value)| value.into_owned());
        if let Some(value) = value {
            query.append_pair(key, &value);
            kept += 1;
        }
    }
    if kept > 0 {
        badge.push('?');
        badge.push_str(&query.finish());
    }

    Some(badge)
}

/// Forum resource sparklines default to SVG; `format=png` asks for a raster.
fn sparkline_png(url: &Url) -> Option<String> {
    if !is_http(url) {
        return None;
    }
    let host = url.host_str()?;
    let on_forum = host == SPARKLINE_HOST || host.ends_with(&format!(".{SPARKLINE_HOST}"));
    if !on_forum || !url.path().trim_end_matches('/').ends_with("-sparkline") {
        return None;
    }
    if url.query_pairs().any(|(name, _)| name == "format") {
        return None;
    }

    let mut rewritten = url.clone();
    rewritten.query_pairs_mut().append_pair("format", "png");
    Some(rewritten.to_string())
}
