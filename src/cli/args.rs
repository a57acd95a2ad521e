//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Movie Browser - Browse, search and filter movies from TMDB
#[derive(Parser, Debug)]
#[command(name = "movie-browser")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long, global = true)]
    pub skip_preflight: bool,

    /// Path to config.toml (default: ~/.config/movie_browser/config.toml)
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with an email and password
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Register with an email and password
    Register {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored login
    Logout,

    /// Show login and language
    Status,

    /// Show or change the interface language
    Language {
        /// en, ar or toggle
        #[arg(value_name = "LANGUAGE")]
        language: Option<String>,
    },

    /// List movie genres
    Genres,

    /// Browse movies
    Browse {
        /// Filter by genre id
        #[arg(short = 'g', long, conflicts_with = "search")]
        genre: Option<u64>,

        /// Search by title
        #[arg(short = 's', long)]
        search: Option<String>,

        /// Page to show
        #[arg(short = 'p', long, default_value_t = 1)]
        page: u32,

        /// Show details of a movie from the listing
        #[arg(long, value_name = "MOVIE_ID")]
        open: Option<u64>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Keep reading commands from stdin
        #[arg(short = 'i', long)]
        interactive: bool,
    },
}
