use axum::{Router, routing::post, Extension};
use crate::kernel::Plugin;
use async_trait::async_trait;
use crate::plugins::auth::handlers;
use crate::store::DynStorage;

pub struct AuthPlugin {
    storage: DynStorage,
}

impl AuthPlugin {
    pub fn new(storage: DynStorage) -> Self { Self { storage } }
}

#[async_trait]
impl Plugin for AuthPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/", post(handlers::login))
            .layer(Extension(self.storage.clone()))
    }

    fn name(&self) -> &'static str { "api/login" }
}
