//! Albums Store — infrastructure adapters.
//!
//! Provides the volatile in-memory album store (reset on every process
//! restart) and the `DurableStorage` backends used to persist carts.

pub mod file_storage;
pub mod memory_album_repository;
pub mod memory_storage;
pub mod seed;
