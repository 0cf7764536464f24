//! Application layer - Use cases and orchestration

pub mod pages;
pub mod scratch;

pub use pages::PageService;
pub use scratch::{load_scratch, save_scratch};
