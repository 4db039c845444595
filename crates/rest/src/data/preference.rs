//! Client preferences carried by `Accept` and `Accept-Language`.

use crate::data::Language;
use http::HeaderMap;
use http::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderName};
use mime::Mime;
use tracing::debug;

/// A preferred value with its quality factor in `0.0..=1.0`, NaN counts as `0.0`
#[derive(Debug, Clone, PartialEq)]
pub struct Preference<T> {
    pub value: T,
    pub quality: f32,
}

impl<T> Preference<T> {
    pub fn new(value: T, quality: f32) -> Self {
        let quality = if quality.is_nan() { 0.0 } else { quality.clamp(0.0, 1.0) };
        Self { value, quality }
    }
}

/// Media ranges from the `Accept` headers, in header order.
pub fn accepted_media_types(headers: &HeaderMap) -> Vec<Preference<Mime>> {
    parse_preferences(headers, &ACCEPT, |value| value.parse::<Mime>().ok())
}

/// Language ranges from the `Accept-Language` headers, in header order.
pub fn accepted_languages(headers: &HeaderMap) -> Vec<Preference<Language>> {
    parse_preferences(headers, &ACCEPT_LANGUAGE, |value| Some(Language::new(value)))
}

fn parse_preferences<T, F>(headers: &HeaderMap, name: &HeaderName, parse_value: F) -> Vec<Preference<T>>
where
    F: Fn(&str) -> Option<T>,
{
    let mut preferences = Vec::new();

    for header_value in headers.get_all(name) {
        let Ok(text) = header_value.to_str() else {
            debug!(header = %name, "skip non visible ascii preference header");
            continue;
        };

        for entry in text.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            let mut parts = entry.split(';').map(str::trim);
            let raw_value = parts.next().unwrap_or_default();

            let quality = parts
                .filter_map(|param| param.split_once('='))
                .find(|(key, _)| key.trim().eq_ignore_ascii_case("q"))
                .map_or(Some(1.0), |(_, q)| q.trim().parse::<f32>().ok())
                .filter(|q| (0.0..=1.0).contains(q));

            match (parse_value(raw_value), quality) {
                (Some(value), Some(quality)) => preferences.push(Preference::new(value, quality)),
                _ => debug!(header = %name, entry, "skip invalid preference"),
            }
        }
    }

    preferences
}
