use dee_wikiapi::{FetchedPage, WikiError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct OutputMode {
    pub json: bool,
    pub quiet: bool,
    pub verbose: bool,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Wiki(#[from] WikiError),
    #[error("No page titled '{0}'")]
    NotFound(String),
    #[error("Invalid page title: {0}")]
    InvalidTitle(String),
    #[error("Invalid language code")]
    InvalidLanguage,
    #[error("Unknown config key: {0}")]
    UnknownKey(String),
    #[error("Rating file could not be read: {0}")]
    RatingFile(String),
    #[error("{0:#}")]
    Config(anyhow::Error),
    #[error("Output could not be serialized")]
    Serialize,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Wiki(err) => err.code(),
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidTitle(_) => "INVALID_TITLE",
            Self::InvalidLanguage => "INVALID_LANGUAGE",
            Self::UnknownKey(_) => "INVALID_ARGUMENT",
            Self::RatingFile(_) => "INVALID_ARGUMENT",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Serialize => "SERIALIZE",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub ok: bool,
    pub error: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ThumbnailInfo {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize)]
pub struct PageItem {
    pub title: String,
    pub id: i64,
    pub summary: String,
    pub thumbnail: Option<ThumbnailInfo>,
}

impl From<&FetchedPage> for PageItem {
    fn from(page: &FetchedPage) -> Self {
        Self {
            title: page.title().to_string(),
            id: page.id(),
            summary: page.summary().to_string(),
            thumbnail: page.thumbnail().map(|img| ThumbnailInfo {
                width: img.width(),
                height: img.height(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemResponse<T> {
    pub ok: bool,
    pub item: T,
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub ok: bool,
    pub count: usize,
    pub items: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct ConfigShowItem {
    pub path: String,
    pub endpoint: Option<String>,
}
