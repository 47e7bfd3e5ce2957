//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Memory Lane - photo albums with AI-generated captions and stories
#[derive(Parser, Debug)]
#[command(name = "memory-lane")]
#[command(about = "Photo albums with AI-generated captions and stories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every album with its cover
    Albums,

    /// Show the photos of one album
    Album {
        /// Album id
        id: String,
    },

    /// Show one photo at full size
    Photo {
        /// Photo id
        id: String,

        /// Album the photo was opened from
        #[arg(long)]
        album: Option<String>,
    },

    /// List the photos available for stories
    Photos,

    /// Generate a caption for a local image
    Caption {
        /// Image file
        file: PathBuf,
    },

    /// Queue local images and run a simulated upload
    Upload {
        /// Image files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Generate a caption for every file before uploading
        #[arg(long)]
        caption: bool,
    },

    /// Generate a story from photos and a theme
    Story {
        /// Story theme
        #[arg(long, default_value = "")]
        theme: String,

        /// Photo ids, in story order
        #[arg(long = "photo")]
        photos: Vec<String>,
    },
}
