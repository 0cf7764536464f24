//! Domain layer - Business logic and domain models

pub mod page;

pub use page::Page;
