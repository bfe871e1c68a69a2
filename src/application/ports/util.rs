// src/application/ports/util.rs

/// Turns arbitrary text into a lowercase, hyphen-separated, URL-safe token.
///
/// Implementations must be pure: the same input always yields the same
/// output and no I/O is performed.
pub trait Slugifier: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
