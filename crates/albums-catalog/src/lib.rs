//! Albums Catalog — the album resource bounded context.
//!
//! Validates client-supplied album fields and applies create, update and
//! delete operations to an `AlbumRepository`.

pub mod application;
pub mod domain;
