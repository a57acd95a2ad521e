//! Preview carousel.
//!
//! Holds the preview movies and a rotating index. While mounted with a
//! non-empty item set, a background task advances the index on a fixed
//! interval. The task is aborted on unmount, on every re-mount and on drop.

use crate::models::movie::Movie;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Handle to the auto-advance task. Aborts the task when dropped.
#[derive(Debug)]
struct AutoAdvance {
    handle: JoinHandle<()>,
}

impl AutoAdvance {
    fn start(index: Arc<AtomicUsize>, len: usize, every: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            // First tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let _ = index.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| {
                    Some((i + 1) % len)
                });
            }
        });
        Self { handle }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Rotating preview of highlighted movies.
#[derive(Debug)]
pub struct Carousel {
    items: Vec<Movie>,
    index: Arc<AtomicUsize>,
    interval: Duration,
    task: Option<AutoAdvance>,
}

impl Carousel {
    /// Create an unmounted carousel advancing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            items: Vec::new(),
            index: Arc::new(AtomicUsize::new(0)),
            interval,
            task: None,
        }
    }

    /// Show `items` from the first one and (re)arm auto-advance.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn mount(&mut self, items: Vec<Movie>) {
        self.task = None;
        self.items = items;
        self.index.store(0, Ordering::Relaxed);

        if !self.items.is_empty() && !self.interval.is_zero() {
            self.task = Some(AutoAdvance::start(
                Arc::clone(&self.index),
                self.items.len(),
                self.interval,
            ));
        }
    }

    /// Stop auto-advance. Items stay visible.
    pub fn unmount(&mut self) {
        self.task = None;
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index.load(Ordering::Relaxed)
    }

    /// Movie at the current position.
    pub fn current(&self) -> Option<&Movie> {
        self.items.get(self.index())
    }

    /// Step forward by hand, wrapping at the end.
    pub fn advance(&self) {
        let len = self.items.len();
        if len > 0 {
            let _ = self
                .index
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| Some((i + 1) % len));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies(n: u64) -> Vec<Movie> {
        (1..=n)
            .map(|id| Movie {
                id,
                title: format!("Preview {}", id),
                poster_path: Some(format!("/p{}.jpg", id)),
                overview: None,
                release_date: None,
                vote_average: Some(7.5),
                genre_ids: None,
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_wraps() {
        let mut carousel = Carousel::new(Duration::from_secs(4));
        carousel.mount(movies(3));
        assert!(carousel.is_running());
        assert_eq!(carousel.current().map(|m| m.id), Some(1));

        tokio::time::sleep(Duration::from_secs(9)).await;
        assert_eq!(carousel.index(), 2);

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(carousel.index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_advancing() {
        let mut carousel = Carousel::new(Duration::from_secs(4));
        carousel.mount(movies(3));
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(carousel.index(), 1);

        carousel.unmount();
        assert!(!carousel.is_running());
        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(carousel.index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_resets_and_rearms() {
        let mut carousel = Carousel::new(Duration::from_secs(4));
        carousel.mount(movies(3));
        tokio::time::sleep(Duration::from_secs(5)).await;

        carousel.mount(movies(2));
        assert_eq!(carousel.index(), 0);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(carousel.index(), 1);
        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(carousel.index(), 0);
    }

    #[tokio::test]
    async fn test_empty_items_never_start() {
        let mut carousel = Carousel::new(Duration::from_secs(4));
        carousel.mount(Vec::new());
        assert!(!carousel.is_running());
        assert!(carousel.current().is_none());
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[tokio::test]
    async fn test_manual_advance() {
        let mut carousel = Carousel::new(Duration::from_secs(3600));
        carousel.mount(movies(2));
        carousel.advance();
        assert_eq!(carousel.current().map(|m| m.id), Some(2));
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }
}
