pub mod api;
pub mod config;
pub mod core;
pub mod i18n;
pub mod models;
pub mod storage;
pub mod utils;

/// Re-export important types for easier access
pub use crate::models::{
    ActiveOrder, CartItem, MenuItem, Notification, Preferences, Restaurant, RestaurantCart,
    RestaurantDirectory,
};

pub use crate::api::App;
pub use crate::core::cart::{CartStore, CartSummary};
pub use crate::core::error::Error;
pub use crate::core::types::Screen;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
