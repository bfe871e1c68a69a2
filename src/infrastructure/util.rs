use crate::application::ports::util::Slugifier;
use slug::slugify;

#[derive(Default, Clone, Copy)]
pub struct DefaultSlugifier;

impl Slugifier for DefaultSlugifier {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
