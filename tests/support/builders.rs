// tests/support/builders.rs
use std::collections::HashMap;

use sluggable::domain::errors::DomainResult;
use sluggable::domain::slug::{SlugOptions, Sluggable};

/// Generic record with string attributes, configurable options and an
/// explicit persisted snapshot.
#[derive(Clone)]
pub struct Page {
    pub id: Option<i64>,
    attributes: HashMap<String, String>,
    original: HashMap<String, String>,
    options: SlugOptions<Page>,
}

impl Page {
    pub fn get(&self, name: &str) -> String {
        self.attributes.get(name).cloned().unwrap_or_default()
    }

    pub fn put(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Simulates a completed save.
    pub fn persist(&mut self, id: i64) {
        self.id = Some(id);
        self.original = self.attributes.clone();
    }
}

impl Sluggable for Page {
    fn record_type() -> &'static str {
        "pages"
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

pub struct PageBuilder {
    id: Option<i64>,
    attributes: HashMap<String, String>,
    options: SlugOptions<Page>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            attributes: HashMap::new(),
            options: SlugOptions::create()
                .generate_slugs_from(["title"])
                .save_slugs_to("slug")
                .slugs_should_be_no_longer_than(255),
        }
    }

    pub fn title(self, title: &str) -> Self {
        self.attr("title", title)
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn options(mut self, options: SlugOptions<Page>) -> Self {
        self.options = options;
        self
    }

    /// Builds a record already saved under `id` with the current attributes.
    pub fn saved(mut self, id: i64) -> Page {
        self.id = Some(id);
        let mut page = self.build();
        page.original = page.attributes.clone();
        page
    }

    pub fn build(self) -> Page {
        Page {
            id: self.id,
            attributes: self.attributes,
            original: HashMap::new(),
            options: self.options,
        }
    }
}
