//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nonepad")]
#[command(about = "Plain-text notebook for pages and a scratch buffer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory override (default: per-user config directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all pages
    List,

    /// Create a new empty page and print its id
    New {
        /// Title for the new page
        #[arg(default_value = "New Page")]
        title: String,
    },

    /// Print a single page
    Show {
        /// Id of the page to show
        id: String,
    },

    /// Change a page's title and/or content
    Edit {
        /// Id of the page to edit
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete a page
    Delete {
        /// Id of the page to delete
        id: String,
    },

    /// Save text to the scratch buffer, or print it when no text is given
    Scratch {
        /// Text to save
        text: Option<String>,
    },
}
