pub mod auth;
pub mod items;
pub mod metrics;

use crate::config::Config;
use crate::kernel::Plugin;
use crate::store::DynStorage;

/// The plugin set served by the binary, all sharing one storage object.
pub fn default_plugins(storage: DynStorage, config: &Config) -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(items::ItemsPlugin::new(storage.clone(), config.max_page_size)),
        Box::new(auth::AuthPlugin::new(storage)),
    ]
}
