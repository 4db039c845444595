//! Selection of the best variant of a resource according to the client
//! preferences.
//!
//! Each variant is scored with `media quality × language quality`:
//!
//! - media quality is the `q` of the most specific `Accept` range matching the
//!   variant media type (`text/html` beats `text/*` beats `*/*`), `1.0` when
//!   the client sent no `Accept`. A variant without media type only matches `*/*`.
//! - language quality is the `q` of the most specific `Accept-Language` range
//!   matching one of the variant languages, `1.0` when the client sent no
//!   `Accept-Language` or when the variant is language neutral. A variant in
//!   the fallback language that matches no range still gets [`FALLBACK_QUALITY`].
//!
//! The highest score wins, ties go to the fallback language then to the
//! earliest variant. A score of zero is never acceptable.

use crate::data::{Language, Preference};
use crate::representation::Representation;
use mime::Mime;
use tracing::debug;

/// Language quality given to fallback language variants no range matched
pub const FALLBACK_QUALITY: f32 = 0.001;

/// Outcome of the variant selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Negotiation {
    /// index of the chosen variant
    Selected(usize),
    /// the resource has no variant at all
    NotFound,
    /// variants exist but none is acceptable to the client
    NotAcceptable,
}

pub fn select_variant(
    variants: &[Representation],
    accept: &[Preference<Mime>],
    accept_language: &[Preference<Language>],
    fallback_language: Option<&Language>,
) -> Negotiation {
    if variants.is_empty() {
        debug!("no variant available");
        return Negotiation::NotFound;
    }

    let mut best: Option<(usize, f32, bool)> = None;

    for (index, variant) in variants.iter().enumerate() {
        let score = media_quality(variant, accept) * language_quality(variant, accept_language, fallback_language);
        if score <= 0.0 {
            continue;
        }

        let in_fallback = fallback_language.is_some_and(|fallback| speaks(variant, fallback));

        let replace = match best {
            None => true,
            Some((_, best_score, best_in_fallback)) => {
                score > best_score + f32::EPSILON
                    || ((score - best_score).abs() <= f32::EPSILON && in_fallback && !best_in_fallback)
            }
        };

        if replace {
            best = Some((index, score, in_fallback));
        }
    }

    match best {
        Some((index, score, _)) => {
            debug!(index, score, "variant selected");
            Negotiation::Selected(index)
        }
        None => {
            debug!(variants = variants.len(), "no acceptable variant");
            Negotiation::NotAcceptable
        }
    }
}

fn media_quality(variant: &Representation, accept: &[Preference<Mime>]) -> f32 {
    if accept.is_empty() {
        return 1.0;
    }

    // (specificity, quality)
    let mut matched: Option<(u8, f32)> = None;

    for pref in accept {
        let range = &pref.value;
        let specificity = match variant.media_type() {
            _ if range.type_() == mime::STAR => 0,
            Some(media_type) if range.type_() == media_type.type_() && range.subtype() == mime::STAR => 1,
            Some(media_type) if range.type_() == media_type.type_() && range.subtype() == media_type.subtype() => 2,
            _ => continue,
        };

        if matched.is_none_or(|(current, _)| specificity > current) {
            matched = Some((specificity, pref.quality));
        }
    }

    matched.map_or(0.0, |(_, quality)| quality)
}

fn language_quality(
    variant: &Representation,
    accept_language: &[Preference<Language>],
    fallback_language: Option<&Language>,
) -> f32 {
    if accept_language.is_empty() || variant.languages().is_empty() {
        return 1.0;
    }

    let mut quality: Option<f32> = None;

    for language in variant.languages() {
        // (specificity, quality)
        let mut matched: Option<(usize, f32)> = None;
        for pref in accept_language {
            if !language.matches_range(&pref.value) {
                continue;
            }

            let specificity = if pref.value.tag() == Language::ALL { 0 } else { pref.value.tag().len() };
            if matched.is_none_or(|(current, _)| specificity > current) {
                matched = Some((specificity, pref.quality));
            }
        }

        if let Some((_, q)) = matched {
            quality = Some(quality.map_or(q, |current| current.max(q)));
        }
    }

    match quality {
        Some(q) => q,
        None if fallback_language.is_some_and(|fallback| speaks(variant, fallback)) => FALLBACK_QUALITY,
        None => 0.0,
    }
}

fn speaks(variant: &Representation, language: &Language) -> bool {
    variant.languages().iter().any(|l| l.matches_range(language))
}
