//! In-memory implementation of the `AlbumRepository` trait.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use albums_core::album::{Album, NewAlbum};
use albums_core::error::DomainError;
use albums_core::repository::AlbumRepository;

use crate::seed::sample_albums;

/// Volatile album store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryAlbumRepository {
    albums: Mutex<Vec<Album>>,
}

impl InMemoryAlbumRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given albums, in order.
    #[must_use]
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: Mutex::new(albums),
        }
    }

    /// Creates a store holding the sample catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_albums(sample_albums())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Album>>, DomainError> {
        self.albums
            .lock()
            .map_err(|_| DomainError::Infrastructure("album store lock poisoned".into()))
    }
}

fn next_id(albums: &[Album]) -> i64 {
    albums.iter().map(|a| a.id).max().map_or(1, |max| max + 1)
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumRepository {
    async fn list(&self) -> Result<Vec<Album>, DomainError> {
        Ok(self.lock()?.clone())
    }

    async fn find(&self, id: i64) -> Result<Option<Album>, DomainError> {
        Ok(self.lock()?.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, album: NewAlbum) -> Result<Album, DomainError> {
        let mut albums = self.lock()?;
        let album = album.with_id(next_id(&albums));
        debug!(album_id = album.id, "inserting album");
        albums.push(album.clone());
        Ok(album)
    }

    async fn replace(&self, album: Album) -> Result<Album, DomainError> {
        let mut albums = self.lock()?;
        let slot = albums
            .iter_mut()
            .find(|a| a.id == album.id)
            .ok_or(DomainError::NotFound(Album::RESOURCE_NAME))?;
        *slot = album.clone();
        Ok(album)
    }

    async fn remove(&self, id: i64) -> Result<Option<Album>, DomainError> {
        let mut albums = self.lock()?;
        Ok(albums
            .iter()
            .position(|a| a.id == id)
            .map(|index| albums.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_album(title: &str) -> NewAlbum {
        NewAlbum {
            title: title.to_owned(),
            artist: "Y".to_owned(),
            price: 15.99,
            image_url: "u".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_seeded_store_lists_six_albums_in_order() {
        let repo = InMemoryAlbumRepository::seeded();

        let albums = repo.list().await.unwrap();

        let ids: Vec<i64> = albums.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(albums[0].title, "You, Me and an App Id");
    }

    #[tokio::test]
    async fn test_insert_into_empty_store_assigns_id_1() {
        let repo = InMemoryAlbumRepository::new();

        let album = repo.insert(new_album("X")).await.unwrap();

        assert_eq!(album.id, 1);
        assert_eq!(repo.list().await.unwrap(), vec![album]);
    }

    #[tokio::test]
    async fn test_insert_assigns_max_id_plus_one_even_with_gaps() {
        // Arrange
        let repo = InMemoryAlbumRepository::seeded();
        repo.remove(3).await.unwrap();
        repo.remove(6).await.unwrap();

        // Act
        let album = repo.insert(new_album("X")).await.unwrap();

        // Assert
        assert_eq!(album.id, 6);
        assert_eq!(repo.list().await.unwrap().last(), Some(&album));
    }

    #[tokio::test]
    async fn test_replace_overwrites_matching_album() {
        let repo = InMemoryAlbumRepository::seeded();
        let mut album = repo.find(2).await.unwrap().unwrap();
        album.title = "Renamed".to_owned();

        repo.replace(album.clone()).await.unwrap();

        assert_eq!(repo.find(2).await.unwrap(), Some(album));
    }

    #[tokio::test]
    async fn test_replace_missing_album_returns_not_found() {
        let repo = InMemoryAlbumRepository::new();

        let result = repo.replace(new_album("X").with_id(42)).await;

        assert_eq!(result, Err(DomainError::NotFound("Album")));
    }

    #[tokio::test]
    async fn test_remove_returns_the_removed_album() {
        let repo = InMemoryAlbumRepository::seeded();

        let removed = repo.remove(4).await.unwrap();

        assert_eq!(removed.map(|a| a.title), Some("Lost in Translation".to_owned()));
        assert_eq!(repo.find(4).await.unwrap(), None);
        assert_eq!(repo.remove(4).await.unwrap(), None);
    }
}
