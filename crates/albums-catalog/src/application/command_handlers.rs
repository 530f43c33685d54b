//! Command handlers for the album catalog.
//!
//! Each handler validates in a fixed order: the id has already been parsed by
//! the caller, existence is checked next, and body fields are validated last.
//! An update or delete aimed at a missing album therefore never reports a
//! field error.

use albums_core::album::Album;
use albums_core::error::DomainError;
use albums_core::repository::AlbumRepository;
use tracing::{debug, info};

use crate::domain::commands::{CreateAlbum, DeleteAlbum, UpdateAlbum};
use crate::domain::validation::{album_patch_from_json, new_album_from_json};

/// Handles the `CreateAlbum` command: validates the submitted fields and
/// appends the album with the next free id.
///
/// # Errors
///
/// Returns `DomainError::InvalidInput` if a field is missing or invalid.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn handle_create_album(
    command: &CreateAlbum,
    repo: &dyn AlbumRepository,
) -> Result<Album, DomainError> {
    let album = new_album_from_json(&command.fields)?;
    let created = repo.insert(album).await?;

    info!(
        correlation_id = %command.correlation_id,
        album_id = created.id,
        "album created"
    );
    Ok(created)
}

/// Handles the `UpdateAlbum` command: merges the supplied fields into the
/// stored album and returns the result.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the album does not exist.
/// Returns `DomainError::InvalidInput` naming the first invalid field.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn handle_update_album(
    command: &UpdateAlbum,
    repo: &dyn AlbumRepository,
) -> Result<Album, DomainError> {
    let mut album = repo
        .find(command.album_id)
        .await?
        .ok_or(DomainError::NotFound(Album::RESOURCE_NAME))?;

    let patch = album_patch_from_json(&command.changes)?;
    if patch.is_empty() {
        debug!(album_id = album.id, "empty update, nothing to change");
        return Ok(album);
    }

    album.apply(patch);
    let updated = repo.replace(album).await?;

    info!(
        correlation_id = %command.correlation_id,
        album_id = updated.id,
        "album updated"
    );
    Ok(updated)
}

/// Handles the `DeleteAlbum` command: removes the album permanently and
/// returns the removed record.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if the album does not exist.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn handle_delete_album(
    command: &DeleteAlbum,
    repo: &dyn AlbumRepository,
) -> Result<Album, DomainError> {
    let removed = repo
        .remove(command.album_id)
        .await?
        .ok_or(DomainError::NotFound(Album::RESOURCE_NAME))?;

    info!(
        correlation_id = %command.correlation_id,
        album_id = removed.id,
        "album deleted"
    );
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use albums_core::error::DomainError;
    use albums_core::repository::AlbumRepository;
    use albums_store::memory_album_repository::InMemoryAlbumRepository;
    use albums_test_support::FailingAlbumRepository;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::application::query_handlers::get_album_by_id;
    use crate::domain::validation::INVALID_PRICE;

    fn create(fields: serde_json::Value) -> CreateAlbum {
        CreateAlbum {
            correlation_id: Uuid::new_v4(),
            fields,
        }
    }

    fn update(album_id: i64, changes: serde_json::Value) -> UpdateAlbum {
        UpdateAlbum {
            correlation_id: Uuid::new_v4(),
            album_id,
            changes,
        }
    }

    fn delete(album_id: i64) -> DeleteAlbum {
        DeleteAlbum {
            correlation_id: Uuid::new_v4(),
            album_id,
        }
    }

    #[tokio::test]
    async fn test_create_on_seed_catalog_assigns_id_7() {
        // Arrange
        let repo = InMemoryAlbumRepository::seeded();
        let command = create(json!({
            "title": "X", "artist": "Y", "price": 15.99, "image_url": "u"
        }));

        // Act
        let album = handle_create_album(&command, &repo).await.unwrap();

        // Assert
        assert_eq!(album.id, 7);
        assert_eq!(get_album_by_id(7, &repo).await.unwrap(), album);
    }

    #[tokio::test]
    async fn test_create_id_is_one_more_than_current_max() {
        let repo = InMemoryAlbumRepository::new();
        let fields = json!({ "title": "X", "artist": "Y", "price": 1, "image_url": "u" });

        for expected in 1..=3 {
            let album = handle_create_album(&create(fields.clone()), &repo)
                .await
                .unwrap();
            assert_eq!(album.id, expected);
        }
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price_without_touching_store() {
        let repo = InMemoryAlbumRepository::seeded();
        let command = create(json!({
            "title": "X", "artist": "Y", "price": -10, "image_url": "u"
        }));

        let result = handle_create_album(&command, &repo).await;

        assert_eq!(result, Err(DomainError::invalid(INVALID_PRICE)));
        assert_eq!(repo.list().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        // Arrange
        let repo = InMemoryAlbumRepository::seeded();
        let before = get_album_by_id(1, &repo).await.unwrap();

        // Act
        let updated = handle_update_album(&update(1, json!({ "price": 0 })), &repo)
            .await
            .unwrap();

        // Assert
        assert!(updated.price.abs() < f64::EPSILON);
        assert_eq!(updated.title, before.title);
        assert_eq!(updated.artist, before.artist);
        assert_eq!(updated.image_url, before.image_url);
        assert_eq!(get_album_by_id(1, &repo).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_with_empty_body_leaves_album_identical() {
        let repo = InMemoryAlbumRepository::seeded();
        let before = get_album_by_id(2, &repo).await.unwrap();

        let updated = handle_update_album(&update(2, json!({})), &repo)
            .await
            .unwrap();

        assert_eq!(updated, before);
        assert_eq!(get_album_by_id(2, &repo).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_missing_album_reports_not_found_before_field_errors() {
        let repo = InMemoryAlbumRepository::seeded();

        let result = handle_update_album(&update(999, json!({ "price": -1 })), &repo).await;

        assert_eq!(result, Err(DomainError::NotFound("Album")));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_field_and_keeps_record() {
        let repo = InMemoryAlbumRepository::seeded();
        let before = get_album_by_id(3, &repo).await.unwrap();

        let result =
            handle_update_album(&update(3, json!({ "title": "Ok", "price": -1 })), &repo).await;

        assert_eq!(result, Err(DomainError::invalid(INVALID_PRICE)));
        assert_eq!(get_album_by_id(3, &repo).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_returns_removed_album_and_get_then_fails() {
        // Arrange
        let repo = InMemoryAlbumRepository::seeded();
        let before = get_album_by_id(5, &repo).await.unwrap();

        // Act
        let removed = handle_delete_album(&delete(5), &repo).await.unwrap();

        // Assert
        assert_eq!(removed, before);
        assert_eq!(
            get_album_by_id(5, &repo).await,
            Err(DomainError::NotFound("Album"))
        );
        assert_eq!(
            handle_delete_album(&delete(5), &repo).await,
            Err(DomainError::NotFound("Album"))
        );
    }

    #[tokio::test]
    async fn test_handlers_propagate_repository_failure() {
        let repo = FailingAlbumRepository;
        let fields = json!({ "title": "X", "artist": "Y", "price": 1, "image_url": "u" });

        assert!(matches!(
            handle_create_album(&create(fields), &repo).await,
            Err(DomainError::Infrastructure(_))
        ));
        assert!(matches!(
            handle_update_album(&update(1, json!({})), &repo).await,
            Err(DomainError::Infrastructure(_))
        ));
        assert!(matches!(
            handle_delete_album(&delete(1), &repo).await,
            Err(DomainError::Infrastructure(_))
        ));
    }
}
