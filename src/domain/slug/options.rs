// src/domain/slug/options.rs
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_MAXIMUM_LENGTH: i64 = 250;

/// Callback producing the raw slug source from a record.
pub type SlugDerivation<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Where the raw slug text comes from.
pub enum SlugSource<R> {
    /// Field values read in order and joined with `-`.
    Fields(Vec<String>),
    /// A record-specific function.
    Derivation(SlugDerivation<R>),
}

impl<R> Clone for SlugSource<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Fields(fields) => Self::Fields(fields.clone()),
            Self::Derivation(derive) => Self::Derivation(Arc::clone(derive)),
        }
    }
}

impl<R> fmt::Debug for SlugSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            Self::Derivation(_) => f.write_str("Derivation(..)"),
        }
    }
}

/// Deployment-wide knobs a record type may fold into its options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugDefaults {
    pub maximum_length: i64,
    pub generate_unique_slugs: bool,
}

impl Default for SlugDefaults {
    fn default() -> Self {
        Self {
            maximum_length: DEFAULT_MAXIMUM_LENGTH,
            generate_unique_slugs: true,
        }
    }
}

/// Per-call slug configuration produced by a record type.
///
/// Nothing here is validated on construction; the generator guards the
/// options at the start of every attempt so a misconfigured record type
/// fails before any field or storage is touched.
#[derive(Debug)]
pub struct SlugOptions<R> {
    pub source: SlugSource<R>,
    pub slug_field: String,
    pub generate_unique_slugs: bool,
    pub maximum_length: i64,
    pub generate_slugs_on_create: bool,
    pub generate_slugs_on_update: bool,
}

impl<R> Clone for SlugOptions<R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            slug_field: self.slug_field.clone(),
            generate_unique_slugs: self.generate_unique_slugs,
            maximum_length: self.maximum_length,
            generate_slugs_on_create: self.generate_slugs_on_create,
            generate_slugs_on_update: self.generate_slugs_on_update,
        }
    }
}

impl<R> Default for SlugOptions<R> {
    fn default() -> Self {
        Self {
            source: SlugSource::Fields(Vec::new()),
            slug_field: String::new(),
            generate_unique_slugs: true,
            maximum_length: DEFAULT_MAXIMUM_LENGTH,
            generate_slugs_on_create: true,
            generate_slugs_on_update: true,
        }
    }
}

impl<R> SlugOptions<R> {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn generate_slugs_from<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = SlugSource::Fields(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn generate_slugs_from_fn<F>(mut self, derive: F) -> Self
    where
        F: Fn(&R) -> String + Send + Sync + 'static,
    {
        self.source = SlugSource::Derivation(Arc::new(derive));
        self
    }

    pub fn save_slugs_to(mut self, field: impl Into<String>) -> Self {
        self.slug_field = field.into();
        self
    }

    pub fn allow_duplicate_slugs(mut self) -> Self {
        self.generate_unique_slugs = false;
        self
    }

    pub fn slugs_should_be_no_longer_than(mut self, maximum_length: i64) -> Self {
        self.maximum_length = maximum_length;
        self
    }

    pub fn do_not_generate_slugs_on_create(mut self) -> Self {
        self.generate_slugs_on_create = false;
        self
    }

    pub fn do_not_generate_slugs_on_update(mut self) -> Self {
        self.generate_slugs_on_update = false;
        self
    }

    pub fn with_defaults(mut self, defaults: SlugDefaults) -> Self {
        self.maximum_length = defaults.maximum_length;
        self.generate_unique_slugs = defaults.generate_unique_slugs;
        self
    }
}
