//! Query dispatcher.
//!
//! Runs each [`FetchRequest`] on its own task and delivers completions over
//! a channel in the order they finish. Pairs with [`BrowseController`],
//! which decides whether a completion is still wanted.

use crate::core::browse::{BrowseController, Completion, FetchRequest, Fetched, Ticket};
use crate::services::catalog::Catalog;
use crate::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// A finished query.
#[derive(Debug)]
pub struct Completed {
    pub ticket: Ticket,
    pub result: Result<Fetched>,
}

/// Spawns catalog queries without blocking the caller.
pub struct Dispatcher {
    catalog: Arc<dyn Catalog>,
    tx: mpsc::UnboundedSender<Completed>,
    rx: mpsc::UnboundedReceiver<Completed>,
    in_flight: usize,
}

impl Dispatcher {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// Start a query. Returns immediately.
    pub fn dispatch(&mut self, request: FetchRequest) {
        let catalog = Arc::clone(&self.catalog);
        let tx = self.tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = request.query.run(catalog.as_ref()).await;
            // The receiver only goes away with the dispatcher itself.
            let _ = tx.send(Completed {
                ticket: request.ticket,
                result,
            });
        });
    }

    /// Start several queries.
    pub fn dispatch_all(&mut self, requests: impl IntoIterator<Item = FetchRequest>) {
        for request in requests {
            self.dispatch(request);
        }
    }

    /// Queries started but not yet received.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Wait for the next query to finish. `None` when nothing is in flight.
    pub async fn next(&mut self) -> Option<Completed> {
        if self.in_flight == 0 {
            return None;
        }
        let completed = self.rx.recv().await?;
        self.in_flight -= 1;
        Some(completed)
    }

    /// Apply completions to the controller until nothing is in flight.
    pub async fn settle(&mut self, controller: &mut BrowseController) -> Vec<Completion> {
        let mut completions = Vec::new();
        while let Some(done) = self.next().await {
            completions.push(controller.complete(done.ticket, done.result));
        }
        completions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::movie::{Genre, Movie, PagedResult};
    use async_trait::async_trait;
    use std::time::Duration;

    /// Page 1 answers slowly, everything else immediately.
    struct SlowFirstPage;

    fn one_movie_page(page: u32) -> PagedResult {
        PagedResult {
            page: Some(page),
            results: vec![Movie {
                id: u64::from(page),
                title: format!("Page {}", page),
                poster_path: None,
                overview: None,
                release_date: None,
                vote_average: None,
                genre_ids: None,
            }],
            total_pages: Some(5),
            total_results: Some(5),
        }
    }

    #[async_trait]
    impl Catalog for SlowFirstPage {
        async fn popular(&self, page: u32) -> Result<PagedResult> {
            if page == 1 {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            Ok(one_movie_page(page))
        }

        async fn search(&self, _query: &str, page: u32) -> Result<PagedResult> {
            Ok(one_movie_page(page))
        }

        async fn genres(&self) -> Result<Vec<Genre>> {
            Ok(Vec::new())
        }

        async fn discover_by_genre(&self, _genre_id: u64, page: u32) -> Result<PagedResult> {
            Ok(one_movie_page(page))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_first_page_does_not_win() {
        let mut controller = BrowseController::new(8);
        let mut dispatcher = Dispatcher::new(Arc::new(SlowFirstPage));

        dispatcher.dispatch_all(controller.activate());
        dispatcher.settle(&mut controller).await;
        assert_eq!(controller.state().total_pages, 5);

        dispatcher.dispatch(controller.refresh());
        dispatcher.dispatch(controller.go_to_page(2).unwrap());
        let completions = dispatcher.settle(&mut controller).await;

        assert_eq!(completions.len(), 2);
        assert!(completions[0].is_applied());
        assert!(completions[1].is_stale());
        assert_eq!(controller.state().current_page, 2);
        assert_eq!(controller.movies()[0].id, 2);
    }

    #[tokio::test]
    async fn test_next_on_idle_dispatcher() {
        let mut dispatcher = Dispatcher::new(Arc::new(SlowFirstPage));
        assert_eq!(dispatcher.in_flight(), 0);
        assert!(dispatcher.next().await.is_none());
    }
}
