//! Test repositories — mock `AlbumRepository` implementations for tests.

use albums_core::album::{Album, NewAlbum};
use albums_core::error::DomainError;
use albums_core::repository::AlbumRepository;
use async_trait::async_trait;

/// An album repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingAlbumRepository;

fn unavailable() -> DomainError {
    DomainError::Infrastructure("album store unavailable".into())
}

#[async_trait]
impl AlbumRepository for FailingAlbumRepository {
    async fn list(&self) -> Result<Vec<Album>, DomainError> {
        Err(unavailable())
    }

    async fn find(&self, _id: i64) -> Result<Option<Album>, DomainError> {
        Err(unavailable())
    }

    async fn insert(&self, _album: NewAlbum) -> Result<Album, DomainError> {
        Err(unavailable())
    }

    async fn replace(&self, _album: Album) -> Result<Album, DomainError> {
        Err(unavailable())
    }

    async fn remove(&self, _id: i64) -> Result<Option<Album>, DomainError> {
        Err(unavailable())
    }
}
