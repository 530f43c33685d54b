//! The cart aggregate: an ordered list of lines with derived totals.

use albums_core::album::Album;
use chrono::{DateTime, Utc};

use super::cart_item::CartItem;

/// An ordered sequence of cart lines, at most one per album id.
///
/// Insertion order is display order. `item_count` and `total_price` are
/// computed from the lines on every call and never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from previously persisted lines.
    ///
    /// Lines with a zero quantity and repeated album ids are dropped, keeping
    /// the first occurrence. Returns the cart and the number of dropped lines.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> (Self, usize) {
        let total = items.len();
        let mut cart = Self::new();
        for item in items {
            if item.quantity > 0 && !cart.is_in_cart(item.album.id) {
                cart.items.push(item);
            }
        }
        let dropped = total - cart.items.len();
        (cart, dropped)
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the line for `album_id`, if present.
    #[must_use]
    pub fn get(&self, album_id: i64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.album.id == album_id)
    }

    /// Returns `true` if the album has a line in the cart.
    #[must_use]
    pub fn is_in_cart(&self, album_id: i64) -> bool {
        self.get(album_id).is_some()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Adds one copy of `album`. An existing line is incremented and keeps its
    /// original snapshot and timestamp; otherwise a new line is appended.
    pub fn add(&mut self, album: Album, now: DateTime<Utc>) {
        match self.items.iter_mut().find(|item| item.album.id == album.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartItem::new(album, now)),
        }
    }

    /// Removes the line for `album_id`. Returns `true` if a line was removed.
    pub fn remove(&mut self, album_id: i64) -> bool {
        match self.items.iter().position(|item| item.album.id == album_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Overwrites the quantity of the line for `album_id`. A quantity of zero
    /// or less removes the line. Returns `true` if the cart changed.
    pub fn update_quantity(&mut self, album_id: i64, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(album_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|item| item.album.id == album_id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
