//! The album record shared by the catalog and the cart.

use serde::{Deserialize, Serialize};

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Unique, store-assigned identifier.
    pub id: i64,
    /// Album title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Unit price, never negative.
    pub price: f64,
    /// Cover art location.
    pub image_url: String,
}

/// A validated album that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlbum {
    /// Album title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Unit price, never negative.
    pub price: f64,
    /// Cover art location.
    pub image_url: String,
}

impl NewAlbum {
    /// Attaches the identifier chosen by the store.
    #[must_use]
    pub fn with_id(self, id: i64) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

/// A validated partial update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlbumPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement artist.
    pub artist: Option<String>,
    /// Replacement price.
    pub price: Option<f64>,
    /// Replacement cover art location.
    pub image_url: Option<String>,
}

impl AlbumPatch {
    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
    }
}

impl Album {
    /// Resource name used in `NotFound` errors.
    pub const RESOURCE_NAME: &'static str = "Album";

    /// Merges a patch into this record. The identifier never changes.
    pub fn apply(&mut self, patch: AlbumPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(artist) = patch.artist {
            self.artist = artist;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}
