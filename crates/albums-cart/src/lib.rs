//! Albums Cart — the shopping cart bounded context.
//!
//! A single-writer state container holding cart line items. Totals are
//! derived from the items on every read, and every mutation is written
//! through to durable storage so the cart survives restarts.

pub mod application;
pub mod domain;
