//! The cart store: cart state plus write-through persistence.

use albums_core::album::Album;
use albums_core::clock::{Clock, SystemClock};
use albums_core::storage::{DurableStorage, StorageError};
use tracing::{debug, error, warn};

use crate::application::persistence::{self, CART_STORAGE_KEY};
use crate::domain::cart::Cart;
use crate::domain::cart_item::CartItem;

/// Owns the cart and mirrors it to durable storage after every mutation.
///
/// Mutations update the in-memory cart first and then write the full line
/// sequence synchronously. A failed write is returned to the caller; the
/// in-memory change is kept.
#[derive(Debug)]
pub struct CartStore<S, C> {
    cart: Cart,
    storage: S,
    clock: C,
}

impl<S: DurableStorage> CartStore<S, SystemClock> {
    /// Rehydrates the cart from `storage`, stamping new lines with the system
    /// time.
    #[must_use]
    pub fn open(storage: S) -> Self {
        Self::load(storage, SystemClock)
    }
}

impl<S: DurableStorage, C: Clock> CartStore<S, C> {
    /// Rehydrates the cart from `storage`.
    ///
    /// Never fails: a missing blob yields an empty cart, and an unreadable or
    /// corrupt blob is logged and replaced by an empty cart in memory.
    #[must_use]
    pub fn load(storage: S, clock: C) -> Self {
        let cart = match storage.get_item(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match persistence::decode(&raw) {
                Ok(items) => {
                    let (cart, dropped) = Cart::from_items(items);
                    if dropped > 0 {
                        warn!(dropped, "discarded invalid lines from persisted cart");
                    }
                    cart
                }
                Err(e) => {
                    error!(error = %e, "failed to load cart from storage");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                error!(error = %e, "failed to read cart from storage");
                Cart::new()
            }
        };
        debug!(lines = cart.items().len(), "cart loaded");
        Self {
            cart,
            storage,
            clock,
        }
    }

    /// Current cart state.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Sum of unit price times quantity.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.cart.total_price()
    }

    /// Returns `true` if the album has a line in the cart.
    #[must_use]
    pub fn is_in_cart(&self, album_id: i64) -> bool {
        self.cart.is_in_cart(album_id)
    }

    /// Adds one copy of `album` and persists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be written.
    pub fn add_to_cart(&mut self, album: Album) -> Result<(), StorageError> {
        debug!(album_id = album.id, "adding album to cart");
        self.cart.add(album, self.clock.now());
        self.save()
    }

    /// Removes the album's line. Persists only if a line was removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be written.
    pub fn remove_from_cart(&mut self, album_id: i64) -> Result<(), StorageError> {
        if self.cart.remove(album_id) {
            debug!(album_id, "removed album from cart");
            self.save()?;
        }
        Ok(())
    }

    /// Sets the album's quantity; zero or less removes the line. Persists
    /// only if the album was in the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be written.
    pub fn update_quantity(&mut self, album_id: i64, quantity: i64) -> Result<(), StorageError> {
        if self.cart.update_quantity(album_id, quantity) {
            debug!(album_id, quantity, "updated cart quantity");
            self.save()?;
        }
        Ok(())
    }

    /// Empties the cart and persists.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be written.
    pub fn clear_cart(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.save()
    }

    fn save(&self) -> Result<(), StorageError> {
        let raw = persistence::encode(self.cart.items())?;
        self.storage.set_item(CART_STORAGE_KEY, &raw)
    }
}
