//! Album repository abstraction.

use async_trait::async_trait;

use crate::album::{Album, NewAlbum};
use crate::error::DomainError;

/// The authoritative collection of albums.
///
/// Implementations own identifier assignment: `insert` picks the next id
/// (highest existing id + 1, or 1 when empty) atomically with the append.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Returns all albums in store order.
    async fn list(&self) -> Result<Vec<Album>, DomainError>;

    /// Returns the album with the given id, if any.
    async fn find(&self, id: i64) -> Result<Option<Album>, DomainError>;

    /// Assigns the next id, appends the album and returns the stored record.
    async fn insert(&self, album: NewAlbum) -> Result<Album, DomainError>;

    /// Replaces the stored album that has the same id.
    ///
    /// Returns `DomainError::NotFound` if no such album exists.
    async fn replace(&self, album: Album) -> Result<Album, DomainError>;

    /// Removes and returns the album with the given id, if any.
    async fn remove(&self, id: i64) -> Result<Option<Album>, DomainError>;
}
