//! Query handlers for the album catalog.

use albums_core::album::Album;
use albums_core::error::DomainError;
use albums_core::repository::AlbumRepository;

/// Returns every album in store order.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn list_albums(repo: &dyn AlbumRepository) -> Result<Vec<Album>, DomainError> {
    repo.list().await
}

/// Retrieves a single album by id.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no album has the id.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn get_album_by_id(
    album_id: i64,
    repo: &dyn AlbumRepository,
) -> Result<Album, DomainError> {
    repo.find(album_id)
        .await?
        .ok_or(DomainError::NotFound(Album::RESOURCE_NAME))
}
