use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::plugins::auth::models::{InsertUser, User};
use crate::plugins::items::models::ListItem;

/// Whether every id on `page` fits in a `u64`.
pub fn page_in_range(page: u64, limit: u32) -> bool {
    page.max(1).checked_mul(u64::from(limit.max(1))).is_some()
}

/// Produces page `page` of the synthetic item sequence, `limit` items long.
///
/// Ids run from `(page - 1) * limit + 1` to `page * limit`. Callers are expected
/// to have normalised `page` and `limit` to at least 1; zero is treated as 1.
/// Ids past `u64::MAX` are not produced, see [`page_in_range`].
pub fn get_items(page: u64, limit: u32) -> Vec<ListItem> {
    let page = page.max(1);
    let limit = u64::from(limit.max(1));
    let first = (page - 1).saturating_mul(limit).saturating_add(1);
    let last = page.saturating_mul(limit);

    (first..=last)
        .map(|id| ListItem {
            id,
            title: format!("Item {}", id),
            description: format!("This is the description for item {}", id),
        })
        .collect()
}

#[async_trait]
pub trait Storage: Send + Sync + 'static {
    async fn get_items(&self, page: u64, limit: u32) -> anyhow::Result<Vec<ListItem>>;
    async fn get_user(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    async fn create_user(&self, user: InsertUser) -> anyhow::Result<User>;
    /// Looks the user up by name and registers it if absent, as one step.
    /// The flag is `true` when the user was created by this call.
    async fn get_or_create_user(&self, user: InsertUser) -> anyhow::Result<(User, bool)>;
}

pub type DynStorage = Arc<dyn Storage>;

mod inmem {
    use super::*;
    use parking_lot::RwLock;
    use std::collections::HashMap;

    /// Process-local storage. Items are synthesised per call; users live in a map.
    #[derive(Default)]
    pub struct MemStorage {
        users: RwLock<HashMap<Uuid, User>>,
    }

    impl MemStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn user_count(&self) -> usize {
            self.users.read().len()
        }
    }

    #[async_trait]
    impl Storage for MemStorage {
        async fn get_items(&self, page: u64, limit: u32) -> anyhow::Result<Vec<ListItem>> {
            Ok(super::get_items(page, limit))
        }

        async fn get_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
            Ok(self.users.read().get(&id).cloned())
        }

        async fn get_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
            Ok(self.users.read().values().find(|u| u.username == username).cloned())
        }

        async fn create_user(&self, user: InsertUser) -> anyhow::Result<User> {
            let user = User { id: Uuid::new_v4(), username: user.username, password: user.password };
            self.users.write().insert(user.id, user.clone());
            Ok(user)
        }

        async fn get_or_create_user(&self, user: InsertUser) -> anyhow::Result<(User, bool)> {
            let mut users = self.users.write();
            if let Some(existing) = users.values().find(|u| u.username == user.username) {
                return Ok((existing.clone(), false));
            }
            let user = User { id: Uuid::new_v4(), username: user.username, password: user.password };
            users.insert(user.id, user.clone());
            Ok((user, true))
        }
    }

    impl MemStorage {
        pub fn into_arc(self) -> DynStorage {
            Arc::new(self)
        }
    }
}

pub use inmem::MemStorage;
