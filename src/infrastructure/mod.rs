//! Infrastructure layer - External I/O and persistence

pub mod data_dir;
pub mod scratch;
pub mod store;

pub use scratch::ScratchSlot;
pub use store::PageStore;
