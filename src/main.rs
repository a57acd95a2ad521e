//! Movie Browser CLI
//!
//! A command-line movie browser backed by TMDB.

use clap::Parser;
use movie_browser::cli::{
    args::{Cli, Commands},
    commands::{
        browse::{self, BrowseOptions},
        genres, interactive, language,
        login::{self, AuthMode},
        logout, status,
    },
};
use movie_browser::models::config::{self, Config};
use movie_browser::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = match cli.config {
        Some(ref path) => config::load_config_from(path),
        None => config::load_config(),
    };

    // Run the appropriate command
    match cli.command {
        Commands::Login { email, password } => {
            login::login(&config, AuthMode::Login, &email, &password).await?;
        }

        Commands::Register { email, password } => {
            login::login(&config, AuthMode::Register, &email, &password).await?;
        }

        Commands::Logout => {
            logout::logout(&config).await?;
        }

        Commands::Status => {
            status::status(&config).await?;
        }

        Commands::Language { language: requested } => {
            language::language(&config, requested.as_deref()).await?;
        }

        Commands::Genres => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }
            genres::genres(&config).await?;
        }

        Commands::Browse {
            genre,
            search,
            page,
            open,
            format,
            interactive: is_interactive,
        } => {
            if !cli.skip_preflight {
                run_preflight_checks(&config).await?;
            }

            if is_interactive {
                interactive::run(&config).await?;
            } else {
                browse::execute_browse(
                    &config,
                    BrowseOptions {
                        genre,
                        search,
                        page,
                        open,
                        format,
                    },
                )
                .await?;
            }
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("movie_browser=debug")
    } else {
        EnvFilter::new("movie_browser=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    if let Err(e) = preflight::check_tmdb(config).await {
        preflight::print_failure(&e);
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
