//! Browse command implementation.

use super::{open_session, tmdb_catalog};
use crate::cli::render;
use crate::core::browse::{BrowseController, BrowseState, Completion, Mode};
use crate::core::dispatcher::Dispatcher;
use crate::models::config::Config;
use crate::models::movie::{Genre, Movie};
use crate::services::Catalog;
use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;

/// What to show.
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    pub genre: Option<u64>,
    pub search: Option<String>,
    pub page: u32,
    pub open: Option<u64>,
    pub format: String,
}

/// Execute browse command.
pub async fn execute_browse(config: &Config, options: BrowseOptions) -> Result<()> {
    let session = open_session(config);
    session.require_authenticated()?;
    let language = session.language();

    let catalog = tmdb_catalog(config)?;
    let controller = load_listing(catalog, config.browse.preview_size, &options).await?;

    if options.format == "json" {
        print_json(&controller, config.browse.page_window_radius)?;
    } else {
        render::print_screen(&controller, 0, language, config.browse.page_window_radius);
    }

    if let Some(id) = options.open {
        match controller.find_movie(id) {
            Some(movie) => render::print_details(movie, &config.tmdb.image_base_url),
            None => println!("{}", format!("Movie {} is not on this page.", id).yellow()),
        }
    }

    Ok(())
}

/// Activate a controller and walk it to the requested listing.
pub async fn load_listing(
    catalog: Arc<dyn Catalog>,
    preview_size: usize,
    options: &BrowseOptions,
) -> Result<BrowseController> {
    let mut controller = BrowseController::new(preview_size);
    let mut dispatcher = Dispatcher::new(catalog);

    dispatcher.dispatch_all(controller.activate());
    report(dispatcher.settle(&mut controller).await);

    if let Some(genre_id) = options.genre {
        dispatcher.dispatch(controller.select_genre(Some(genre_id)));
        report(dispatcher.settle(&mut controller).await);
    }

    if let Some(ref query) = options.search {
        dispatcher.dispatch(controller.submit_search(query));
        report(dispatcher.settle(&mut controller).await);
    }

    if options.page > 1 {
        match controller.go_to_page(options.page) {
            Some(request) => {
                dispatcher.dispatch(request);
                report(dispatcher.settle(&mut controller).await);
            }
            None => println!(
                "{}",
                format!(
                    "Page {} is out of range (1-{}).",
                    options.page,
                    controller.state().total_pages
                )
                .yellow()
            ),
        }
    }

    Ok(controller)
}

/// Surface failed queries. The listing keeps whatever it had.
fn report(completions: Vec<Completion>) {
    for completion in completions {
        if let Completion::Failed(e) = completion {
            eprintln!("{} {}", "[FAIL]".red(), e);
        }
    }
}

/// Print the listing as JSON.
fn print_json(controller: &BrowseController, radius: u32) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        mode: &'static str,
        genre: Option<u64>,
        query: Option<&'a str>,
        page: u32,
        total_pages: u32,
        page_window: Vec<u32>,
        movies: &'a [Movie],
        preview: &'a [Movie],
        genres: &'a [Genre],
    }

    let state: &BrowseState = controller.state();
    let (mode, query) = match &state.mode {
        Mode::Popular => ("popular", None),
        Mode::Genre(_) => ("genre", None),
        Mode::Search(q) => ("search", Some(q.as_str())),
    };

    let output = JsonOutput {
        mode,
        genre: controller.selected_genre(),
        query,
        page: state.current_page,
        total_pages: state.total_pages,
        page_window: controller.page_window(radius),
        movies: controller.movies(),
        preview: controller.preview(),
        genres: controller.genres(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
