//! Client for Wiki platform APIs such as Wikipedia's `api.php`.
//!
//! ```no_run
//! use dee_wikiapi::WikiClient;
//!
//! # fn main() -> Result<(), dee_wikiapi::WikiError> {
//! let client = WikiClient::with_endpoint("https://en.wikipedia.org/w/api.php")?;
//! if let Some(page) = client.fetch_page("Rust (programming language)")? {
//!     println!("{page}");
//! }
//! for title in client.search_titles("ferris")? {
//!     println!("{title}");
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod lookup;
mod page;
pub mod params;
pub mod ratings;
mod search;
mod transport;

pub use client::{WikiClient, DEFAULT_ENDPOINT};
pub use error::{Fault, WikiError};
pub use lookup::LookupOutcome;
pub use page::FetchedPage;
pub use transport::Transport;
