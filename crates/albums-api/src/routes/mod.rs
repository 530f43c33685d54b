//! Route modules.

pub mod albums;
pub mod health;
pub mod index;
