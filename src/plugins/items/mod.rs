pub mod handlers;
pub mod models;
pub mod plugin;

pub use plugin::ItemsPlugin;
