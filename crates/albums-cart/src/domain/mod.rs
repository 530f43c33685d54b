//! Domain layer for the shopping cart.

pub mod cart;
pub mod cart_item;
