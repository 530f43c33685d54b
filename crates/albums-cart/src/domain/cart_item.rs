//! A single cart line.

use albums_core::album::Album;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One album in the cart with its quantity.
///
/// The album is a snapshot taken when the line was created; later catalog
/// edits do not change lines already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the album.
    pub album: Album,
    /// Number of copies, at least 1.
    pub quantity: u32,
    /// When the album was first added.
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a line with quantity 1.
    #[must_use]
    pub fn new(album: Album, added_at: DateTime<Utc>) -> Self {
        Self {
            album,
            quantity: 1,
            added_at,
        }
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.album.price * f64::from(self.quantity)
    }
}
