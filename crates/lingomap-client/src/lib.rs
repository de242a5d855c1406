//! Language lookup client for Lingo-Map.
//!
//! - [`LanguageLookup`] is the seam between the hover logic and the network.
//! - [`HttpLanguageClient`] implements it with a single JSON `POST` to the
//!   `most_spoken_languages` backend.
//! - [`HoverSession`] glues a [`lingomap_core::HoverController`] to a lookup
//!   implementation: hovers spawn lookups on a tokio runtime and completions
//!   are applied back on the caller's thread via [`HoverSession::poll`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lingomap_client::{HoverSession, HttpLanguageClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HttpLanguageClient::new(HttpLanguageClient::DEFAULT_ENDPOINT)?;
//!     let mut session = HoverSession::new(Arc::new(client), tokio::runtime::Handle::current(), 3);
//!
//!     session.hover("Kerala");
//!     session.settle().await;
//!     for entry in session.controller().results() {
//!         println!("{}", entry.display_line());
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod http;
mod session;

pub use error::{LookupError, LookupResult};
pub use http::HttpLanguageClient;
pub use session::HoverSession;

use async_trait::async_trait;
use lingomap_core::LanguageEntry;

/// Fetches the top spoken languages for a region.
#[async_trait]
pub trait LanguageLookup: Send + Sync {
    /// Return up to `count` languages for `region`, most spoken first.
    async fn fetch(&self, region: &str, count: u32) -> LookupResult<Vec<LanguageEntry>>;
}
