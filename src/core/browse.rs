//! Browse controller.
//!
//! Owns the browse screen state (mode, page, total pages, loading flags)
//! and decides which catalog query runs on each user event. The controller
//! never performs I/O itself: every event returns the [`FetchRequest`] to
//! run, and the caller hands the outcome back through
//! [`BrowseController::complete`].
//!
//! Each request carries a [`Ticket`] with a per-slot generation number.
//! Only the latest ticket issued for a slot may change state, so a slow
//! response can never overwrite the result of a query started after it.

use crate::core::pager;
use crate::models::movie::{Genre, Movie, PagedResult};
use crate::services::catalog::Catalog;
use crate::{Error, Result};

/// Which listing is active. Exactly one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Popular,
    Genre(u64),
    Search(String),
}

/// Independent result slots, each with its own generation counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Movies,
    Preview,
    Genres,
}

/// Identifies one issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: Slot,
    generation: u64,
    page: u32,
}

impl Ticket {
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Page that was requested (1 for the genre list).
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// A catalog query to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    Popular { page: u32 },
    Search { query: String, page: u32 },
    Discover { genre_id: u64, page: u32 },
    Genres,
}

impl CatalogQuery {
    /// The listing query for a mode.
    pub fn for_mode(mode: &Mode, page: u32) -> Self {
        match mode {
            Mode::Popular => CatalogQuery::Popular { page },
            Mode::Genre(genre_id) => CatalogQuery::Discover {
                genre_id: *genre_id,
                page,
            },
            Mode::Search(query) => CatalogQuery::Search {
                query: query.clone(),
                page,
            },
        }
    }

    /// Requested page, if the query is paged.
    pub fn page(&self) -> Option<u32> {
        match self {
            CatalogQuery::Popular { page }
            | CatalogQuery::Search { page, .. }
            | CatalogQuery::Discover { page, .. } => Some(*page),
            CatalogQuery::Genres => None,
        }
    }

    /// Run the query against a catalog.
    pub async fn run(&self, catalog: &dyn Catalog) -> Result<Fetched> {
        match self {
            CatalogQuery::Popular { page } => catalog.popular(*page).await.map(Fetched::Page),
            CatalogQuery::Search { query, page } => {
                catalog.search(query, *page).await.map(Fetched::Page)
            }
            CatalogQuery::Discover { genre_id, page } => catalog
                .discover_by_genre(*genre_id, *page)
                .await
                .map(Fetched::Page),
            CatalogQuery::Genres => catalog.genres().await.map(Fetched::Genres),
        }
    }
}

/// Successful query output.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    Page(PagedResult),
    Genres(Vec<Genre>),
}

/// A query paired with the ticket its result must be returned with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: Ticket,
    pub query: CatalogQuery,
}

/// What happened to a completed query.
#[derive(Debug)]
pub enum Completion {
    /// The result replaced the slot's contents.
    Applied,
    /// The query failed; previous contents are kept.
    Failed(Error),
    /// A newer query for the same slot was issued; result ignored.
    Stale,
}

impl Completion {
    pub fn is_applied(&self) -> bool {
        matches!(self, Completion::Applied)
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Completion::Stale)
    }
}

/// Loading indicator flavour for a movies load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Indicator {
    Spinner,
    PullToRefresh,
}

/// Paging and mode state shown by the browse screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    pub mode: Mode,
    pub current_page: u32,
    pub total_pages: u32,
    pub is_loading: bool,
    pub is_refreshing: bool,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            mode: Mode::Popular,
            current_page: 1,
            total_pages: 1,
            is_loading: false,
            is_refreshing: false,
        }
    }
}

#[derive(Debug, Default)]
struct Generations {
    movies: u64,
    preview: u64,
    genres: u64,
}

impl Generations {
    fn counter(&mut self, slot: Slot) -> &mut u64 {
        match slot {
            Slot::Movies => &mut self.movies,
            Slot::Preview => &mut self.preview,
            Slot::Genres => &mut self.genres,
        }
    }

    fn issue(&mut self, slot: Slot, page: u32) -> Ticket {
        let counter = self.counter(slot);
        *counter += 1;
        Ticket {
            slot,
            generation: *counter,
            page,
        }
    }

    fn is_current(&self, ticket: &Ticket) -> bool {
        let latest = match ticket.slot {
            Slot::Movies => self.movies,
            Slot::Preview => self.preview,
            Slot::Genres => self.genres,
        };
        latest == ticket.generation
    }
}

/// Browse screen controller.
#[derive(Debug)]
pub struct BrowseController {
    state: BrowseState,
    search_text: String,
    movies: Vec<Movie>,
    preview: Vec<Movie>,
    genres: Vec<Genre>,
    preview_size: usize,
    generations: Generations,
}

impl BrowseController {
    /// Create a controller whose preview keeps the first `preview_size` movies.
    pub fn new(preview_size: usize) -> Self {
        Self {
            state: BrowseState::default(),
            search_text: String::new(),
            movies: Vec::new(),
            preview: Vec::new(),
            genres: Vec::new(),
            preview_size,
            generations: Generations::default(),
        }
    }

    /// First activation: popular page 1, the preview subset and the genre list.
    pub fn activate(&mut self) -> Vec<FetchRequest> {
        self.enter_mode(Mode::Popular);
        self.search_text.clear();

        let movies = self.load(1, Indicator::Spinner);
        let preview = FetchRequest {
            ticket: self.generations.issue(Slot::Preview, 1),
            query: CatalogQuery::Popular { page: 1 },
        };
        let genres = FetchRequest {
            ticket: self.generations.issue(Slot::Genres, 1),
            query: CatalogQuery::Genres,
        };

        vec![movies, preview, genres]
    }

    /// Filter by genre, or return to popular with `None`. Clears any search.
    pub fn select_genre(&mut self, genre_id: Option<u64>) -> FetchRequest {
        self.search_text.clear();
        self.enter_mode(match genre_id {
            Some(id) => Mode::Genre(id),
            None => Mode::Popular,
        });
        self.load(1, Indicator::Spinner)
    }

    /// Update the search box without submitting.
    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    /// Submit a search. Clears the genre filter; blank text falls back to popular.
    pub fn submit_search(&mut self, query: &str) -> FetchRequest {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            self.search_text.clear();
            self.enter_mode(Mode::Popular);
        } else {
            self.search_text = query.to_string();
            self.enter_mode(Mode::Search(trimmed.to_string()));
        }
        self.load(1, Indicator::Spinner)
    }

    /// Submit whatever is in the search box.
    pub fn submit_search_text(&mut self) -> FetchRequest {
        let query = std::mem::take(&mut self.search_text);
        self.submit_search(&query)
    }

    /// Load page `page` of the current mode. `None` when out of range.
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchRequest> {
        if page < 1 || page > self.state.total_pages {
            tracing::debug!(
                "Ignoring page {} (total pages {})",
                page,
                self.state.total_pages
            );
            return None;
        }
        Some(self.load(page, Indicator::Spinner))
    }

    /// Load the page after the current one.
    pub fn next_page(&mut self) -> Option<FetchRequest> {
        self.go_to_page(self.state.current_page.saturating_add(1))
    }

    /// Load the page before the current one.
    pub fn prev_page(&mut self) -> Option<FetchRequest> {
        self.go_to_page(self.state.current_page.saturating_sub(1))
    }

    /// Reload page 1 of the current mode with the pull-to-refresh indicator.
    pub fn refresh(&mut self) -> FetchRequest {
        self.load(1, Indicator::PullToRefresh)
    }

    /// Page bounds are unknown until the new mode's first page arrives.
    fn enter_mode(&mut self, mode: Mode) {
        self.state.mode = mode;
        self.state.current_page = 1;
        self.state.total_pages = 1;
    }

    fn load(&mut self, page: u32, indicator: Indicator) -> FetchRequest {
        match indicator {
            Indicator::Spinner => {
                self.state.is_loading = true;
                self.state.is_refreshing = false;
            }
            Indicator::PullToRefresh => {
                self.state.is_loading = false;
                self.state.is_refreshing = true;
            }
        }

        let ticket = self.generations.issue(Slot::Movies, page);
        let query = CatalogQuery::for_mode(&self.state.mode, page);
        tracing::debug!("Issuing {:?} (generation {})", query, ticket.generation);
        FetchRequest { ticket, query }
    }

    /// Apply the outcome of a query issued by this controller.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Fetched>) -> Completion {
        if !self.generations.is_current(&ticket) {
            tracing::debug!(
                "Discarding stale {:?} response (generation {})",
                ticket.slot,
                ticket.generation
            );
            return Completion::Stale;
        }

        match ticket.slot {
            Slot::Movies => self.complete_movies(ticket, result),
            Slot::Preview => match result {
                Ok(Fetched::Page(page)) => {
                    self.preview = page.results;
                    self.preview.truncate(self.preview_size);
                    Completion::Applied
                }
                other => failed("carousel items", other),
            },
            Slot::Genres => match result {
                Ok(Fetched::Genres(genres)) => {
                    self.genres = genres;
                    Completion::Applied
                }
                other => failed("genres", other),
            },
        }
    }

    fn complete_movies(&mut self, ticket: Ticket, result: Result<Fetched>) -> Completion {
        self.state.is_loading = false;
        self.state.is_refreshing = false;

        match result {
            Ok(Fetched::Page(page)) => {
                let total = page.total_pages_or_one();
                self.state.total_pages = total;
                self.state.current_page = page.page_or(ticket.page).clamp(1, total);
                self.movies = page.results;
                Completion::Applied
            }
            other => failed("movies", other),
        }
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }

    /// Movies currently shown in the grid.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Movies shown in the preview carousel.
    pub fn preview(&self) -> &[Movie] {
        &self.preview
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_search_active(&self) -> bool {
        matches!(self.state.mode, Mode::Search(_))
    }

    pub fn selected_genre(&self) -> Option<u64> {
        match self.state.mode {
            Mode::Genre(id) => Some(id),
            _ => None,
        }
    }

    /// Name of the selected genre, once the genre list has loaded.
    pub fn selected_genre_name(&self) -> Option<&str> {
        let id = self.selected_genre()?;
        self.genres
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }

    /// Page numbers to render around the current page.
    pub fn page_window(&self, radius: u32) -> Vec<u32> {
        pager::page_window(self.state.current_page, self.state.total_pages, radius)
    }

    /// Look up a movie in the grid or the preview for the details view.
    pub fn find_movie(&self, id: u64) -> Option<&Movie> {
        self.movies
            .iter()
            .chain(self.preview.iter())
            .find(|m| m.id == id)
    }
}

fn failed(what: &str, result: Result<Fetched>) -> Completion {
    let err = match result {
        Err(e) => e,
        Ok(other) => Error::other(format!("unexpected response for {}: {:?}", what, other)),
    };
    tracing::error!("Failed loading {}: {}", what, err);
    Completion::Failed(err)
}
