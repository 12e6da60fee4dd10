mod active_order;
mod cart_item;
mod menu_item;
mod notification;
mod preferences;
mod restaurant;
mod restaurant_cart;

pub use active_order::ActiveOrder;
pub use cart_item::CartItem;
pub use menu_item::MenuItem;
pub use notification::Notification;
pub use preferences::{ColorMode, Preferences, TextSize};
pub use restaurant::{Restaurant, RestaurantDirectory};
pub use restaurant_cart::RestaurantCart;
