//! Wire format of the persisted cart.
//!
//! The cart is stored as a single JSON array of
//! `{ "album": {..}, "quantity": n, "addedAt": "<RFC 3339>" }` records under
//! [`CART_STORAGE_KEY`].

use albums_core::storage::StorageError;

use crate::domain::cart_item::CartItem;

/// Storage key of the cart blob.
pub const CART_STORAGE_KEY: &str = "cart";

/// Serializes the full line sequence.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode(items: &[CartItem]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Parses a stored blob back into lines, reconstructing timestamps.
///
/// # Errors
///
/// Returns the parse error if the blob is not a valid cart.
pub fn decode(raw: &str) -> Result<Vec<CartItem>, serde_json::Error> {
    serde_json::from_str(raw)
}
