use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::plugins::items::models::ListItem;
use crate::scroll::source::PageSource;

/// Distance from the bottom of the container, in pixels, that counts as "reached the end".
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Geometry of the scrollable container at the time of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn near_bottom(&self) -> bool {
        self.scroll_height - self.scroll_top - self.client_height < SCROLL_THRESHOLD_PX
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and this many items were appended.
    Loaded(usize),
    /// Another fetch was already outstanding; nothing was started.
    Skipped,
    /// The fetch failed; the cursor did not move.
    Failed,
}

#[derive(Debug)]
struct Feed {
    items: Vec<ListItem>,
    cursor: u64,
}

/// Pages through a [`PageSource`] one page at a time.
///
/// The cursor starts at 1 and only ever moves forward, by exactly one per
/// successful fetch. At most one fetch is outstanding per controller.
pub struct ScrollController<S> {
    source: S,
    page_size: u32,
    feed: Mutex<Feed>,
    in_flight: AtomicBool,
    loading_more: AtomicBool,
}

/// Holds the single fetch slot. Dropping it releases the slot whether the
/// fetch settled or its future was dropped.
struct InFlight<'a> {
    in_flight: &'a AtomicBool,
    loading_more: &'a AtomicBool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.loading_more.store(false, Ordering::Release);
        self.in_flight.store(false, Ordering::Release);
    }
}

impl<S: PageSource> ScrollController<S> {
    pub fn new(source: S) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(source: S, page_size: u32) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            feed: Mutex::new(Feed { items: Vec::new(), cursor: 1 }),
            in_flight: AtomicBool::new(false),
            loading_more: AtomicBool::new(false),
        }
    }

    /// Initial load when the list first becomes visible.
    pub async fn mount(&self) -> LoadOutcome {
        self.load_more().await
    }

    /// Handles a scroll event. Returns `None` when the container is not close
    /// enough to the bottom to trigger a fetch.
    pub async fn on_scroll(&self, metrics: ScrollMetrics) -> Option<LoadOutcome> {
        if !metrics.near_bottom() {
            return None;
        }
        Some(self.load_more().await)
    }

    /// Fetches the page at the cursor unless a fetch is already outstanding.
    pub async fn load_more(&self) -> LoadOutcome {
        let Some(_slot) = self.try_acquire() else {
            tracing::trace!("fetch already in flight, skipping trigger");
            return LoadOutcome::Skipped;
        };

        let page = self.feed.lock().cursor;
        match self.source.fetch_page(page, self.page_size).await {
            Ok(resp) => {
                let count = resp.items.len();
                let mut feed = self.feed.lock();
                feed.items.extend(resp.items);
                feed.cursor += 1;
                tracing::debug!(page, count, total = feed.items.len(), "appended page");
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                tracing::warn!(page, "failed to load items: {:#}", e);
                LoadOutcome::Failed
            }
        }
    }

    fn try_acquire(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.loading_more.store(true, Ordering::Release);
        Some(InFlight { in_flight: &self.in_flight, loading_more: &self.loading_more })
    }

    /// Whether the "loading more" spinner should be shown.
    pub fn is_loading_more(&self) -> bool {
        self.loading_more.load(Ordering::Acquire)
    }

    /// The next page number to fetch.
    pub fn cursor(&self) -> u64 {
        self.feed.lock().cursor
    }

    pub fn len(&self) -> usize {
        self.feed.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every item displayed so far, in fetch order.
    pub fn items(&self) -> Vec<ListItem> {
        self.feed.lock().items.clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
