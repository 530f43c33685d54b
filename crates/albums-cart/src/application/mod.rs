//! Application layer for the shopping cart.

pub mod cart_store;
pub mod persistence;
