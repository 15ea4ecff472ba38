//! Page URL parameters.

use huewheel_core::HarmonyMode;

/// Picker settings passed in the page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    /// Initial harmony mode (`mode=triadic`)
    pub mode: Option<HarmonyMode>,
    /// Wheel diameter in pixels (`size=400`)
    pub size: Option<u32>,
}

impl UrlParams {
    /// Fill fields missing here from `other`.
    pub fn or(self, other: UrlParams) -> UrlParams {
        UrlParams {
            mode: self.mode.or(other.mode),
            size: self.size.or(other.size),
        }
    }
}

/// Parse mode and size parameters from a query string or hash.
/// Supports formats like `?mode=triadic&size=400` and `#mode=analogous`.
pub fn parse_params(s: &str) -> UrlParams {
    // Remove leading ? or #
    let s = s.trim_start_matches(['?', '#']);

    let mut params = UrlParams::default();

    for pair in s.split('&') {
        let mut parts = pair.splitn(2, '=');
        if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
            if value.is_empty() {
                continue;
            }
            match key {
                "mode" => match value.parse() {
                    Ok(mode) => params.mode = Some(mode),
                    Err(e) => log::warn!("Ignoring URL parameter: {}", e),
                },
                "size" => match value.parse::<u32>() {
                    Ok(size) if size > 0 => params.size = Some(size),
                    _ => log::warn!("Ignoring invalid size: {}", value),
                },
                _ => {}
            }
        }
    }

    params
}
