use serde::Deserialize;
use serde_json::Value;

use crate::{error::Fault, page::FetchedPage, transport::ImageSource};

/// Result of a single-page lookup, keeping the reason a page was not returned.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(FetchedPage),
    /// The title itself is not acceptable to the wiki (e.g. illegal characters).
    Invalid { reason: String },
    /// The title is valid but no page exists under it.
    Missing { title: String },
    /// The response carried no `pages` list.
    NoPages,
}

impl LookupOutcome {
    pub fn found(self) -> Option<FetchedPage> {
        match self {
            Self::Found(page) => Some(page),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LookupEnvelope {
    batchcomplete: bool,
    query: Option<QueryBlock>,
}

#[derive(Debug, Deserialize)]
struct QueryBlock {
    pages: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct PageRecord {
    title: Option<String>,
    pageid: Option<i64>,
    extract: Option<String>,
    thumbnail: Option<ThumbnailRef>,
    invalid: Option<Value>,
    invalidreason: Option<String>,
    missing: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ThumbnailRef {
    source: Option<String>,
}

/// Interprets a `action=query` payload. Only the first entry of `query.pages` is read.
pub(crate) fn interpret(
    value: Value,
    images: &impl ImageSource,
    debug: bool,
) -> Result<LookupOutcome, Fault> {
    if debug {
        eprintln!("debug: interpreting lookup response");
    }

    let envelope: LookupEnvelope = serde_json::from_value(value)?;
    if !envelope.batchcomplete {
        return Err(Fault::BatchUnsupported);
    }

    let query = envelope.query.ok_or(Fault::Shape("missing 'query'"))?;
    let Some(pages) = query.pages else {
        return Ok(LookupOutcome::NoPages);
    };
    let first = pages
        .into_iter()
        .next()
        .ok_or(Fault::Shape("empty 'query.pages'"))?;
    let page: PageRecord = serde_json::from_value(first)?;

    if page.invalid.is_some() {
        let reason = page.invalidreason.unwrap_or_default();
        if debug {
            eprintln!("debug: page invalid, reason: {reason}");
        }
        return Ok(LookupOutcome::Invalid { reason });
    }

    if page.missing.is_some() {
        let title = page.title.unwrap_or_default();
        if debug {
            eprintln!("debug: page '{title}' does not exist");
        }
        return Ok(LookupOutcome::Missing { title });
    }

    let title = page.title.ok_or(Fault::Shape("page without 'title'"))?;
    let id = page.pageid.ok_or(Fault::Shape("page without 'pageid'"))?;
    let summary = page.extract.unwrap_or_default();

    let thumbnail = match page.thumbnail {
        Some(thumb) => {
            let source = thumb
                .source
                .ok_or(Fault::Shape("thumbnail without 'source'"))?;
            // A broken thumbnail never fails the lookup.
            match images.load_image(&source) {
                Ok(image) => Some(image),
                Err(err) => {
                    if debug {
                        eprintln!("debug: could not load thumbnail of '{title}' from {source}: {err}");
                    }
                    None
                }
            }
        }
        None => None,
    };

    Ok(LookupOutcome::Found(FetchedPage::new(
        title, id, summary, thumbnail,
    )))
}
