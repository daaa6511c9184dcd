//! Client-side infinite scroll: a page cursor over `GET /api/items` with a
//! single-slot guard so overlapping triggers never fetch the same page twice.

mod controller;
mod source;

pub use controller::{LoadOutcome, ScrollController, ScrollMetrics, DEFAULT_PAGE_SIZE, SCROLL_THRESHOLD_PX};
pub use source::{HttpPageSource, PageSource};
