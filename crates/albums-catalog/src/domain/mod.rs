//! Domain layer for the album catalog.

pub mod commands;
pub mod validation;
