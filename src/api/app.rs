//! Application facade tying the state holders together
//!
//! The UI drives everything through this type: views read snapshots and
//! references, mutations flow through the methods below. Single-threaded
//! by design, like the event-handler model it mirrors.

use crate::config::AppConfig;
use crate::core::cart::{CartStore, CartSummary};
use crate::core::navigation::Navigator;
use crate::core::notifications::NotificationLog;
use crate::core::tracker::ActiveOrderTracker;
use crate::core::tutorial::TutorialController;
use crate::core::types::{NotificationKind, Screen};
use crate::i18n::{Language, Translator};
use crate::models::{ActiveOrder, CartItem, MenuItem, Preferences, Restaurant, RestaurantDirectory};
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::Result;
use tracing::info;

/// Owns every piece of client state and exposes the flows the UI invokes
pub struct App {
    carts: CartStore,
    navigator: Navigator,
    tracker: ActiveOrderTracker,
    notifications: NotificationLog,
    preferences: Preferences,
    tutorial: TutorialController,
    translator: Translator,
    directory: RestaurantDirectory,
    storage: Box<dyn Storage>,
}

impl App {
    /// Assembles an app from the given config
    pub fn new(config: AppConfig) -> Result<Self> {
        let storage: Box<dyn Storage> = match &config.storage_path {
            Some(path) => Box::new(FileStorage::open(path)?),
            None => Box::new(MemoryStorage::new()),
        };
        let tutorial = TutorialController::load(storage.as_ref());
        let mut translator = Translator::new();
        translator.set_language(config.language);

        Ok(Self {
            carts: CartStore::new(),
            navigator: Navigator::new(),
            tracker: ActiveOrderTracker::new(),
            notifications: NotificationLog::new(),
            preferences: Preferences::new(),
            tutorial,
            translator,
            directory: RestaurantDirectory::new(),
            storage,
        })
    }

    /// Sets the restaurant directory
    pub fn with_directory(mut self, directory: RestaurantDirectory) -> Self {
        self.directory = directory;
        self
    }

    // --- cart flows ---

    /// Adds one unit of a menu item to the restaurant's cart
    pub fn add_to_cart(&mut self, restaurant: &Restaurant, item: MenuItem) {
        self.carts
            .add_item(&restaurant.id, &restaurant.name, &restaurant.image, item);
    }

    /// Sets an item's quantity; zero or less removes the line
    pub fn set_quantity(&mut self, restaurant_id: &str, item_id: u32, quantity: i32) {
        self.carts.update_quantity(restaurant_id, item_id, quantity);
    }

    /// Removes an item line, returning it so the caller can offer an undo
    pub fn remove_from_cart(&mut self, restaurant_id: &str, item_id: u32) -> Option<CartItem> {
        self.carts.remove_item(restaurant_id, item_id)
    }

    /// Puts a removed line back, rebuilding the cart if it was deleted
    pub fn undo_remove(&mut self, restaurant_id: &str, item: CartItem) -> Result<()> {
        self.carts.restore_item(restaurant_id, item, &self.directory)
    }

    /// Per-restaurant cart projections for the multicart screen
    pub fn cart_summaries(&self) -> Vec<CartSummary> {
        self.carts.summaries()
    }

    /// The cart badge count
    pub fn total_cart_count(&self) -> u32 {
        self.carts.total_item_count()
    }

    /// The cart store, for direct reads
    pub fn carts(&self) -> &CartStore {
        &self.carts
    }

    // --- checkout ---

    /// Confirms checkout: synthesizes the active order from the first cart,
    /// consumes the carts and lands on the success screen
    ///
    /// Returns `None` (and does nothing) when there is nothing to check out.
    pub fn checkout(&mut self) -> Option<ActiveOrder> {
        let first = self.carts.state().carts().first()?;
        let restaurant_name = first.restaurant_name.clone();

        let order = self.tracker.place(restaurant_name);
        self.carts.clear();
        self.navigator.go(Screen::Success);
        self.notifications.push(
            NotificationKind::OrderUpdate,
            "Order placed",
            &format!("{} is preparing your order", order.restaurant_name),
        );
        info!(order_id = %order.order_id, "checkout confirmed");
        Some(order)
    }

    /// The in-flight order, if any
    pub fn active_order(&self) -> Option<&ActiveOrder> {
        self.tracker.active()
    }

    // --- navigation ---

    /// The screen currently shown
    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Direct transition to a screen
    pub fn go(&mut self, screen: Screen) {
        self.navigator.go(screen);
    }

    /// Enters a restaurant menu, remembering the screen it was opened from
    pub fn open_menu(&mut self) {
        self.navigator.open_menu();
    }

    /// Returns to the screen remembered at menu entry
    pub fn back_to_previous(&mut self) {
        self.navigator.back_to_previous();
    }

    /// Whether the bottom navigation bar is shown right now
    pub fn shows_bottom_nav(&self) -> bool {
        self.navigator.shows_bottom_nav()
    }

    // --- preferences & language ---

    /// Current accessibility preferences
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Replaces the accessibility preferences
    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// Translates a string identifier in the selected language
    pub fn translate(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    /// Switches the UI language
    pub fn set_language(&mut self, language: Language) {
        self.translator.set_language(language);
    }

    /// The translator, for bulk table loading
    pub fn translator_mut(&mut self) -> &mut Translator {
        &mut self.translator
    }

    // --- tutorial ---

    /// The tutorial controller, for reads
    pub fn tutorial(&self) -> &TutorialController {
        &self.tutorial
    }

    /// Starts the tutorial if the persisted flags say it should auto-start;
    /// returns whether it did
    pub fn maybe_start_tutorial(&mut self) -> bool {
        if self.tutorial.should_auto_start() {
            self.tutorial.start();
            true
        } else {
            false
        }
    }

    /// Moves the running tutorial to its next step
    pub fn advance_tutorial(&mut self) -> Result<()> {
        self.tutorial.advance(self.storage.as_mut())
    }

    /// Abandons the running tutorial
    pub fn skip_tutorial(&mut self) -> Result<()> {
        self.tutorial.skip(self.storage.as_mut())
    }

    /// Flips the tutorial toggle from the settings screen
    pub fn set_tutorial_enabled(&mut self, enabled: bool) -> Result<()> {
        self.tutorial.set_enabled(enabled, self.storage.as_mut())
    }

    // --- notifications ---

    /// The notification history
    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }

    /// Records a notification
    pub fn notify(&mut self, kind: NotificationKind, title: &str, description: &str) {
        self.notifications.push(kind, title, description);
    }

    /// Clears the unread badge
    pub fn mark_notifications_read(&mut self) {
        self.notifications.mark_all_read();
    }

    /// Deletes one notification entry
    pub fn dismiss_notification(&mut self, id: &str) -> bool {
        self.notifications.dismiss(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Restaurant;

    fn pizza_place() -> Restaurant {
        Restaurant::new("r1".to_string(), "Pizza Place".to_string(), "img".to_string())
    }

    fn curry_house() -> Restaurant {
        Restaurant::new("r2".to_string(), "Curry House".to_string(), "img2".to_string())
    }

    fn margherita() -> MenuItem {
        MenuItem::new(1, "Margherita".to_string(), "x".to_string(), 500)
    }

    fn app() -> App {
        App::new(AppConfig::new())
            .unwrap()
            .with_directory([pizza_place(), curry_house()].into_iter().collect())
    }

    #[test]
    fn test_checkout_flow() {
        let mut app = app();
        app.go(Screen::Home);
        app.add_to_cart(&pizza_place(), margherita());
        app.add_to_cart(&curry_house(), MenuItem::new(7, "Kottu".to_string(), "k".to_string(), 850));

        let order = app.checkout().unwrap();

        // First cart wins the tracking slot
        assert_eq!(order.restaurant_name, "Pizza Place");
        assert_eq!(app.active_order(), Some(&order));
        assert_eq!(app.current_screen(), Screen::Success);
        assert_eq!(app.total_cart_count(), 0);
        assert_eq!(app.notifications().unread_count(), 1);
    }

    #[test]
    fn test_checkout_with_empty_cart_is_noop() {
        let mut app = app();
        app.go(Screen::Checkout);

        assert!(app.checkout().is_none());
        assert!(app.active_order().is_none());
        assert_eq!(app.current_screen(), Screen::Checkout);
    }

    #[test]
    fn test_menu_back_flow() {
        let mut app = app();
        app.go(Screen::Restaurants);
        app.open_menu();
        app.go(Screen::Cart);
        app.back_to_previous();

        assert_eq!(app.current_screen(), Screen::Restaurants);
    }

    #[test]
    fn test_remove_and_undo_through_facade() {
        let mut app = app();
        app.add_to_cart(&pizza_place(), margherita());

        let removed = app.remove_from_cart("r1", 1).unwrap();
        assert_eq!(app.total_cart_count(), 0);

        app.undo_remove("r1", removed).unwrap();
        assert_eq!(app.total_cart_count(), 1);
        assert_eq!(
            app.cart_summaries()[0].restaurant_name,
            "Pizza Place" // rebuilt from the directory
        );
    }

    #[test]
    fn test_tutorial_auto_start_once() {
        let mut app = app();
        assert!(app.maybe_start_tutorial());
        app.skip_tutorial().unwrap();

        assert!(!app.maybe_start_tutorial());
    }

    #[test]
    fn test_translation_switch() {
        let mut app = app();
        app.translator_mut().insert(Language::En, "nav.home", "Home");
        app.translator_mut().insert(Language::Si, "nav.home", "මුල් පිටුව");

        assert_eq!(app.translate("nav.home"), "Home");
        app.set_language(Language::Si);
        assert_eq!(app.translate("nav.home"), "මුල් පිටුව");
    }
}
