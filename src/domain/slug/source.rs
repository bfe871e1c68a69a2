// src/domain/slug/source.rs
use crate::domain::slug::options::{SlugOptions, SlugSource};
use crate::domain::slug::record::Sluggable;

/// True when the caller wrote the slug field since the last save.
///
/// An absent value compares equal to an empty one, so a fresh record whose
/// slug was never touched is not treated as custom.
pub fn has_custom_slug_been_used<R: Sluggable>(record: &R, options: &SlugOptions<R>) -> bool {
    let original = record.original_field(&options.slug_field).unwrap_or_default();
    let current = record.field(&options.slug_field).unwrap_or_default();
    original != current
}

/// Raw, pre-normalization text capped at `maximum_length` characters.
pub fn slug_source_string<R: Sluggable>(record: &R, options: &SlugOptions<R>) -> String {
    let source = match &options.source {
        SlugSource::Derivation(derive) => derive(record),
        SlugSource::Fields(fields) => fields
            .iter()
            .map(|name| record.field(name).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("-"),
    };

    truncate_chars(&source, options.maximum_length)
}

fn truncate_chars(value: &str, maximum_length: i64) -> String {
    let limit = usize::try_from(maximum_length).unwrap_or(0);
    match value.char_indices().nth(limit) {
        Some((cut, _)) => value[..cut].to_string(),
        None => value.to_string(),
    }
}
