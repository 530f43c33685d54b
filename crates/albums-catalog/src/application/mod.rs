//! Application layer for the album catalog.

pub mod command_handlers;
pub mod query_handlers;
