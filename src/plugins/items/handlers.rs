use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::{Extension, Json};
use std::str::FromStr;
use crate::http_error::AppError;
use crate::plugins::items::models::{ListQuery, PaginatedResponse};
use crate::store::{page_in_range, DynStorage};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Optional upper bound on `limit`. `None` serves whatever was asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageLimits {
    pub max_page_size: Option<u32>,
}

fn positive_or<T>(name: &str, raw: Option<&str>, default: T) -> T
where
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = raw else { return default };
    match raw.trim().parse::<T>() {
        Ok(n) if n > T::default() => n,
        _ => {
            tracing::debug!(param = name, value = raw, "unusable pagination value, using default");
            default
        }
    }
}

/// Resolves the requested page and limit, applying defaults and the optional page size cap.
pub fn resolve_page(q: &ListQuery, limits: PageLimits) -> (u64, u32) {
    let mut limit = positive_or("limit", q.limit.as_deref(), DEFAULT_LIMIT);
    if let Some(max) = limits.max_page_size {
        limit = limit.min(max.max(1));
    }
    let mut page = positive_or("page", q.page.as_deref(), DEFAULT_PAGE);
    if !page_in_range(page, limit) {
        tracing::debug!(page, limit, "page ids exceed u64, using default page");
        page = DEFAULT_PAGE;
    }
    (page, limit)
}

pub async fn list_items(
    Extension(storage): Extension<DynStorage>,
    Extension(limits): Extension<PageLimits>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<PaginatedResponse>, AppError> {
    let q = match query {
        Ok(Query(pairs)) => ListQuery::from_pairs(pairs),
        Err(e) => {
            tracing::debug!("ignoring malformed query: {}", e.body_text());
            ListQuery::default()
        }
    };
    let (page, limit) = resolve_page(&q, limits);

    let items = storage.get_items(page, limit).await?;
    tracing::debug!(page, limit, "serving items");

    // the synthetic sequence has no end
    Ok(Json(PaginatedResponse { items, page, has_more: true }))
}
