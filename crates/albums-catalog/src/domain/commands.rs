//! Commands for the album catalog.
//!
//! Request bodies are carried as raw JSON so that field presence and field
//! types can be validated with client-facing messages.

use serde_json::Value;
use uuid::Uuid;

/// Command to create a new album.
#[derive(Debug, Clone)]
pub struct CreateAlbum {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The submitted album fields.
    pub fields: Value,
}

/// Command to partially update an existing album.
#[derive(Debug, Clone)]
pub struct UpdateAlbum {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The album to update.
    pub album_id: i64,
    /// The submitted subset of album fields.
    pub changes: Value,
}

/// Command to delete an album.
#[derive(Debug, Clone)]
pub struct DeleteAlbum {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The album to delete.
    pub album_id: i64,
}
