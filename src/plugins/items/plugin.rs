use axum::{Router, routing::get, Extension};
use crate::kernel::Plugin;
use crate::plugins::items::handlers::{list_items, PageLimits};
use crate::store::DynStorage;

pub struct ItemsPlugin {
    pub storage: DynStorage,
    pub limits: PageLimits,
}

impl ItemsPlugin {
    pub fn new(storage: DynStorage, max_page_size: Option<u32>) -> Self {
        Self { storage, limits: PageLimits { max_page_size } }
    }
}

#[async_trait::async_trait]
impl Plugin for ItemsPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/", get(list_items))
            .layer(Extension(self.storage.clone()))
            .layer(Extension(self.limits))
    }

    fn name(&self) -> &'static str { "api/items" }
}
