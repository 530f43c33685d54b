//! Shared test fakes and utilities for the albums workspace.

mod clock;
mod repository;
mod storage;

pub use clock::{FixedClock, fixed_instant};
pub use repository::FailingAlbumRepository;
pub use storage::{FailingStorage, RecordingStorage};
