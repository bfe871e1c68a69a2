pub mod options;
pub mod record;
pub mod repository;
pub mod services;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use options::{SlugDefaults, SlugDerivation, SlugOptions, SlugSource};
pub use record::Sluggable;
pub use repository::{SlugQuery, SlugRepository};
pub use services::SlugUniquenessService;
