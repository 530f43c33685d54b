//! Albums Core — shared domain abstractions.
//!
//! This crate defines the album record, the error taxonomy and the seams
//! (clock, album repository, durable key-value storage) that the catalog and
//! cart contexts depend on. It contains no infrastructure code.

pub mod album;
pub mod clock;
pub mod error;
pub mod repository;
pub mod storage;
