// src/domain/slug/testing.rs
use std::collections::HashMap;

use crate::domain::errors::DomainResult;
use crate::domain::slug::options::SlugOptions;
use crate::domain::slug::record::Sluggable;

/// Map-backed record used by unit tests.
#[derive(Clone)]
pub struct Post {
    pub id: Option<i64>,
    attributes: HashMap<String, String>,
    original: HashMap<String, String>,
    options: SlugOptions<Post>,
}

impl Post {
    pub fn new() -> Self {
        Self {
            id: None,
            attributes: HashMap::new(),
            original: HashMap::new(),
            options: SlugOptions::create()
                .generate_slugs_from(["title"])
                .save_slugs_to("slug"),
        }
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.put(name, value);
        self
    }

    pub fn with_options(mut self, options: SlugOptions<Self>) -> Self {
        self.options = options;
        self
    }

    /// Marks the current attributes as the last persisted state.
    pub fn persisted(mut self, id: i64) -> Self {
        self.id = Some(id);
        self.original = self.attributes.clone();
        self
    }

    pub fn put(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> String {
        self.attributes.get(name).cloned().unwrap_or_default()
    }
}

impl Sluggable for Post {
    fn record_type() -> &'static str {
        "posts"
    }

    fn slug_options(&self) -> SlugOptions<Self> {
        self.options.clone()
    }

    fn field(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_field(&mut self, name: &str, value: String) -> DomainResult<()> {
        self.attributes.insert(name.to_string(), value);
        Ok(())
    }

    fn original_field(&self, name: &str) -> Option<String> {
        self.original.get(name).cloned()
    }

    fn primary_key(&self) -> Option<i64> {
        self.id
    }
}

/// Same as [`Post`] but participates in soft deletion.
pub struct TrashablePost(pub Post);

impl Sluggable for TrashablePost {
    fn record_type() -> &'static str {
        "trashable_posts"
    }

    fn supports_soft_delete() -> bool {
        true
    }

    fn slug_options(&self) -> SlugOptions<Self> {
        SlugOptions::create()
            .generate_slugs_from(["title"])
            .save_slugs_to("slug")
    }

    fn field(&self, name: &str) -> Option<String> {
        self.0.field(name)
    }

    fn set_field(&mut self, name: &str, value: String) -> DomainResult<()> {
        self.0.set_field(name, value)
    }

    fn original_field(&self, name: &str) -> Option<String> {
        self.0.original_field(name)
    }

    fn primary_key(&self) -> Option<i64> {
        self.0.primary_key()
    }
}
