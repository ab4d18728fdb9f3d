pub mod directory;
pub mod http;

pub use directory::DirectorySource;
pub use http::{FetchConfig, HttpSource};

use crate::error::AirframeError;

/// Supplies the markup of an article by its document identifier.
///
/// Implementations are shared across the batch's worker threads, so they
/// carry their own synchronization.
pub trait DocumentSource: Send + Sync {
    fn fetch(&self, document: &str) -> Result<String, AirframeError>;
}
