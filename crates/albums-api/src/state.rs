//! Shared application state.

use std::sync::Arc;

use albums_core::repository::AlbumRepository;

/// Application state shared across all request handlers.
///
/// The album store is owned here and handed to handlers by reference; there
/// is no process-wide global.
#[derive(Clone)]
pub struct AppState {
    /// The authoritative album store.
    pub album_repository: Arc<dyn AlbumRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(album_repository: Arc<dyn AlbumRepository>) -> Self {
        Self { album_repository }
    }
}
