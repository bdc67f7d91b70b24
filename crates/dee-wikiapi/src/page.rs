use std::fmt;

use image::DynamicImage;

/// A page returned by a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    title: String,
    id: i64,
    summary: String,
    thumbnail: Option<DynamicImage>,
}

impl FetchedPage {
    pub(crate) fn new(
        title: String,
        id: i64,
        summary: String,
        thumbnail: Option<DynamicImage>,
    ) -> Self {
        Self {
            title,
            id,
            summary,
            thumbnail,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Intro text before the first section. Empty when the page has none.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn thumbnail(&self) -> Option<&DynamicImage> {
        self.thumbnail.as_ref()
    }
}

impl fmt::Display for FetchedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={})\n{}", self.title, self.id, self.summary)
    }
}
