//! Interactive browse session.
//!
//! Reads one command per line from stdin. Queries are dispatched without
//! waiting, so new commands can be typed while earlier ones are in flight;
//! the controller drops any response that was superseded.

use super::{open_session, tmdb_catalog};
use crate::cli::render;
use crate::core::browse::{BrowseController, Completion, FetchRequest, Slot};
use crate::core::carousel::Carousel;
use crate::core::dispatcher::Dispatcher;
use crate::core::session::SessionStore;
use crate::models::config::Config;
use crate::utils::i18n;
use anyhow::Result;
use colored::Colorize;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// `genre <id>`, or `genre all` for `None`.
    Genre(Option<u64>),
    /// `search <text>`; empty text clears the search.
    Search(String),
    Page(u32),
    Next,
    Prev,
    Refresh,
    Open(u64),
    Genres,
    Show,
    Lang,
    Logout,
    Help,
    Quit,
}

impl Input {
    /// Parse a command line.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match cmd.to_lowercase().as_str() {
            "" | "show" | "ls" => Ok(Input::Show),
            "genre" | "g" => match rest.to_lowercase().as_str() {
                "" | "all" => Ok(Input::Genre(None)),
                id => id
                    .parse()
                    .map(|id| Input::Genre(Some(id)))
                    .map_err(|_| format!("Invalid genre id: {}", rest)),
            },
            "search" | "s" | "/" => Ok(Input::Search(rest.to_string())),
            "page" | "p" => rest
                .parse()
                .map(Input::Page)
                .map_err(|_| format!("Invalid page: {}", rest)),
            "next" | "n" => Ok(Input::Next),
            "prev" | "b" => Ok(Input::Prev),
            "refresh" | "r" => Ok(Input::Refresh),
            "open" | "o" => rest
                .parse()
                .map(Input::Open)
                .map_err(|_| format!("Invalid movie id: {}", rest)),
            "genres" => Ok(Input::Genres),
            "lang" | "language" => Ok(Input::Lang),
            "logout" => Ok(Input::Logout),
            "help" | "?" => Ok(Input::Help),
            "quit" | "exit" | "q" => Ok(Input::Quit),
            other => Err(format!("Unknown command: {} (type help)", other)),
        }
    }
}

const HELP: &str = "\
  genre <id|all>   filter by genre
  search <text>    search titles (empty text clears)
  page <n>         go to page n
  next | prev      step one page
  refresh          reload page 1
  open <id>        movie details
  genres           list genres
  lang             toggle language
  show             redraw
  logout           log out and quit
  quit             exit";

/// Run the interactive loop until `quit`, `logout` or end of input.
pub async fn run(config: &Config) -> Result<()> {
    let mut session = open_session(config);
    session.require_authenticated()?;

    let mut controller = BrowseController::new(config.browse.preview_size);
    let mut dispatcher = Dispatcher::new(tmdb_catalog(config)?);
    let mut carousel = Carousel::new(Duration::from_secs(config.browse.carousel_interval_secs));

    dispatcher.dispatch_all(controller.activate());
    println!("{}", i18n::translate(session.language(), "loading").dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Input::parse(&line) {
                    Ok(Input::Quit) => break,
                    Ok(Input::Logout) => {
                        session.logout();
                        println!("{} {}", "✓".green(), i18n::translate(session.language(), "logout"));
                        break;
                    }
                    Ok(input) => {
                        if let Some(request) = handle(input, &mut controller, &mut session, &carousel, config) {
                            dispatcher.dispatch(request);
                        }
                    }
                    Err(message) => println!("{}", message.yellow()),
                }
            }
            Some(done) = dispatcher.next(), if dispatcher.in_flight() > 0 => {
                let slot = done.ticket.slot();
                match controller.complete(done.ticket, done.result) {
                    Completion::Applied => match slot {
                        Slot::Preview => carousel.mount(controller.preview().to_vec()),
                        Slot::Movies => redraw(&controller, &carousel, &session, config),
                        Slot::Genres => {}
                    },
                    Completion::Failed(e) => eprintln!("{} {}", "[FAIL]".red(), e),
                    Completion::Stale => {}
                }
            }
        }
    }

    carousel.unmount();
    Ok(())
}

/// Apply one command. Returns the query to dispatch, if any.
fn handle(
    input: Input,
    controller: &mut BrowseController,
    session: &mut SessionStore,
    carousel: &Carousel,
    config: &Config,
) -> Option<FetchRequest> {
    match input {
        Input::Genre(id) => Some(controller.select_genre(id)),
        Input::Search(text) => Some(controller.submit_search(&text)),
        Input::Page(page) => page_request(controller, page),
        Input::Next => {
            let next = controller.state().current_page.saturating_add(1);
            page_request(controller, next)
        }
        Input::Prev => {
            let prev = controller.state().current_page.saturating_sub(1);
            page_request(controller, prev)
        }
        Input::Refresh => Some(controller.refresh()),
        Input::Open(id) => {
            match controller.find_movie(id) {
                Some(movie) => render::print_details(movie, &config.tmdb.image_base_url),
                None => println!("{}", format!("Movie {} is not on this page.", id).yellow()),
            }
            None
        }
        Input::Genres => {
            render::print_genres(controller.genres(), controller.selected_genre());
            None
        }
        Input::Lang => {
            session.toggle_language();
            redraw(controller, carousel, session, config);
            None
        }
        Input::Show => {
            redraw(controller, carousel, session, config);
            None
        }
        Input::Help => {
            println!("{}", HELP);
            None
        }
        Input::Quit | Input::Logout => None,
    }
}

fn page_request(controller: &mut BrowseController, page: u32) -> Option<FetchRequest> {
    let request = controller.go_to_page(page);
    if request.is_none() {
        println!(
            "{}",
            format!(
                "Page {} is out of range (1-{}).",
                page,
                controller.state().total_pages
            )
            .yellow()
        );
    }
    request
}

fn redraw(controller: &BrowseController, carousel: &Carousel, session: &SessionStore, config: &Config) {
    println!();
    render::print_screen(
        controller,
        carousel.index(),
        session.language(),
        config.browse.page_window_radius,
    );
    println!(
        "{}  {}",
        i18n::toggle_label(session.language()).dimmed(),
        "(type help for commands)".dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("genre 28"), Ok(Input::Genre(Some(28))));
        assert_eq!(Input::parse("genre all"), Ok(Input::Genre(None)));
        assert_eq!(Input::parse("g"), Ok(Input::Genre(None)));
        assert_eq!(
            Input::parse("search  the dark knight "),
            Ok(Input::Search("the dark knight".to_string()))
        );
        assert_eq!(Input::parse("search"), Ok(Input::Search(String::new())));
        assert_eq!(Input::parse("page 3"), Ok(Input::Page(3)));
        assert_eq!(Input::parse("NEXT"), Ok(Input::Next));
        assert_eq!(Input::parse("open 550"), Ok(Input::Open(550)));
        assert_eq!(Input::parse(""), Ok(Input::Show));
        assert_eq!(Input::parse("quit"), Ok(Input::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(Input::parse("page two").is_err());
        assert!(Input::parse("genre action").is_err());
        assert!(Input::parse("dance").is_err());
    }

    #[test]
    fn test_page_request_out_of_range() {
        let mut controller = BrowseController::new(8);
        assert!(page_request(&mut controller, 2).is_none());
        assert!(page_request(&mut controller, 1).is_some());
    }
}
