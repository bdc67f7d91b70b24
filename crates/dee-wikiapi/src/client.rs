use std::time::Duration;

use crate::{
    error::{Fault, WikiError},
    lookup::{self, LookupOutcome},
    page::FetchedPage,
    params::{self, CallKind},
    search,
    transport::Transport,
};

pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Client for a Wiki platform API (`api.php`).
///
/// Each call is a single blocking attempt. The endpoint and debug flag are plain
/// fields: callers sharing a client across threads serialize changes themselves.
/// The connection pool is released when the client is dropped.
#[derive(Debug, Clone)]
pub struct WikiClient {
    endpoint: String,
    debug: bool,
    transport: Transport,
}

impl WikiClient {
    /// Client for [`DEFAULT_ENDPOINT`].
    pub fn new() -> Result<Self, WikiError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, WikiError> {
        let transport = Transport::new().map_err(WikiError::ClientBuild)?;
        Ok(Self::from_parts(endpoint.into(), transport))
    }

    /// Client whose requests (thumbnails included) give up after `timeout`.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, WikiError> {
        let transport = Transport::with_timeout(timeout).map_err(WikiError::ClientBuild)?;
        Ok(Self::from_parts(endpoint.into(), transport))
    }

    fn from_parts(endpoint: String, transport: Transport) -> Self {
        Self {
            endpoint,
            debug: false,
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Takes effect on the next call.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into();
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Toggles diagnostics on stderr. Returned data is unaffected.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
        if debug {
            eprintln!("debug: wiki client in debug mode (endpoint: {})", self.endpoint);
        }
    }

    /// Page for `title`, or `None` when the title is invalid or has no page.
    pub fn fetch_page(&self, title: &str) -> Result<Option<FetchedPage>, WikiError> {
        self.lookup(title).map(LookupOutcome::found)
    }

    /// Like [`WikiClient::fetch_page`] but keeps the reason a page was not returned.
    pub fn lookup(&self, title: &str) -> Result<LookupOutcome, WikiError> {
        self.run(title, |client| {
            if client.debug {
                eprintln!("debug: building lookup parameters for title='{title}'");
            }
            let params = params::build(CallKind::Lookup, title);
            let value = client
                .transport
                .execute(&client.endpoint, &params, client.debug)?;
            lookup::interpret(value, &client.transport, client.debug)
        })
    }

    /// Candidate page titles for `term`, in the order the wiki ranks them.
    pub fn search_titles(&self, term: &str) -> Result<Vec<String>, WikiError> {
        self.run(term, |client| {
            if client.debug {
                eprintln!("debug: building search parameters for term='{term}'");
            }
            let params = params::build(CallKind::Search, term);
            let value = client
                .transport
                .execute(&client.endpoint, &params, client.debug)?;
            search::interpret(&value, client.debug)
        })
    }

    fn run<T>(
        &self,
        term: &str,
        call: impl FnOnce(&Self) -> Result<T, Fault>,
    ) -> Result<T, WikiError> {
        call(self).map_err(|fault| WikiError::from_fault(fault, term, &self.endpoint))
    }
}
