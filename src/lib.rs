//! nonepad - Plain-text notebook for the terminal
//!
//! A command-line note-taking application that keeps a collection of pages
//! plus a single scratch buffer in plain JSON and text files under a
//! per-user data directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NonepadError;
