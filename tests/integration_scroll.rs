use std::sync::Arc;
use scroll_lab_api::scroll::{HttpPageSource, LoadOutcome, ScrollController, ScrollMetrics};

mod common;

fn at_bottom() -> ScrollMetrics {
    ScrollMetrics { scroll_top: 1500.0, scroll_height: 2000.0, client_height: 500.0 }
}

#[tokio::test]
async fn scrolling_to_bottom_loads_more_items() -> anyhow::Result<()> {
    let server = common::spawn_app().await?;
    let ctrl = ScrollController::new(HttpPageSource::new(server.base.clone()));

    assert_eq!(ctrl.mount().await, LoadOutcome::Loaded(10));
    let initial = ctrl.len();

    assert_eq!(ctrl.on_scroll(at_bottom()).await, Some(LoadOutcome::Loaded(10)));
    assert_eq!(ctrl.on_scroll(at_bottom()).await, Some(LoadOutcome::Loaded(10)));

    assert!(ctrl.len() > initial);
    let ids: Vec<u64> = ctrl.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<_>>());
    assert_eq!(ctrl.cursor(), 4);
    Ok(())
}

#[tokio::test]
async fn concurrent_triggers_fetch_one_page() -> anyhow::Result<()> {
    let server = common::spawn_app().await?;
    let ctrl = Arc::new(ScrollController::new(HttpPageSource::new(server.base.clone())));

    let (a, b) = tokio::join!(ctrl.load_more(), ctrl.on_scroll(at_bottom()));
    let outcomes = [a, b.unwrap()];
    assert_eq!(outcomes.iter().filter(|o| **o == LoadOutcome::Loaded(10)).count(), 1);
    assert_eq!(outcomes.iter().filter(|o| **o == LoadOutcome::Skipped).count(), 1);
    assert_eq!(ctrl.cursor(), 2);
    assert_eq!(ctrl.len(), 10);
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_swallowed() -> anyhow::Result<()> {
    let server = common::spawn_app().await?;
    let base = server.base.clone();
    drop(server);
    tokio::task::yield_now().await;

    let ctrl = ScrollController::new(HttpPageSource::new(format!("{}/nowhere", base)));
    assert_eq!(ctrl.load_more().await, LoadOutcome::Failed);
    assert_eq!(ctrl.cursor(), 1);
    assert!(!ctrl.is_loading_more());
    Ok(())
}
