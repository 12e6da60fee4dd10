//! Common data types and enums

/// Every screen the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// First-launch welcome screen
    InitialWelcome,
    /// Accessibility setup screen
    Setup,
    /// Login screen
    Login,
    /// Delivery-location picker shown during onboarding
    Location,
    /// Home screen
    Home,
    /// Search screen
    Search,
    /// Restaurant list screen
    Restaurants,
    /// A single restaurant's menu
    Menu,
    /// Single-restaurant cart screen
    Cart,
    /// All-restaurants cart overview
    Multicart,
    /// Checkout screen
    Checkout,
    /// Order-placed success screen
    Success,
    /// Rewards screen
    Rewards,
    /// Past orders screen
    Orders,
    /// Settings screen
    Settings,
    /// Help screen
    Help,
    /// Profile screen
    Profile,
    /// Notification history screen
    Notifications,
    /// Saved delivery places screen
    SavedPlaces,
    /// Payment methods screen
    Payment,
    /// Language selection screen
    Language,
    /// Live order tracking screen
    Tracking,
}

impl Screen {
    /// Converts the enum to its screen-name string
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::InitialWelcome => "initial-welcome",
            Screen::Setup => "setup",
            Screen::Login => "login",
            Screen::Location => "location",
            Screen::Home => "home",
            Screen::Search => "search",
            Screen::Restaurants => "restaurants",
            Screen::Menu => "menu",
            Screen::Cart => "cart",
            Screen::Multicart => "multicart",
            Screen::Checkout => "checkout",
            Screen::Success => "success",
            Screen::Rewards => "rewards",
            Screen::Orders => "orders",
            Screen::Settings => "settings",
            Screen::Help => "help",
            Screen::Profile => "profile",
            Screen::Notifications => "notifications",
            Screen::SavedPlaces => "saved-places",
            Screen::Payment => "payment",
            Screen::Language => "language",
            Screen::Tracking => "tracking",
        }
    }

    /// Converts a screen-name string to a Screen enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "initial-welcome" => Some(Screen::InitialWelcome),
            "setup" => Some(Screen::Setup),
            "login" => Some(Screen::Login),
            "location" => Some(Screen::Location),
            "home" => Some(Screen::Home),
            "search" => Some(Screen::Search),
            "restaurants" => Some(Screen::Restaurants),
            "menu" => Some(Screen::Menu),
            "cart" => Some(Screen::Cart),
            "multicart" => Some(Screen::Multicart),
            "checkout" => Some(Screen::Checkout),
            "success" => Some(Screen::Success),
            "rewards" => Some(Screen::Rewards),
            "orders" => Some(Screen::Orders),
            "settings" => Some(Screen::Settings),
            "help" => Some(Screen::Help),
            "profile" => Some(Screen::Profile),
            "notifications" => Some(Screen::Notifications),
            "saved-places" => Some(Screen::SavedPlaces),
            "payment" => Some(Screen::Payment),
            "language" => Some(Screen::Language),
            "tracking" => Some(Screen::Tracking),
            _ => None,
        }
    }

    /// Whether the persistent bottom navigation bar is shown on this screen
    ///
    /// Suppressed on the four onboarding/auth screens only.
    pub fn shows_bottom_nav(&self) -> bool {
        !matches!(
            self,
            Screen::InitialWelcome | Screen::Setup | Screen::Login | Screen::Location
        )
    }
}

/// Active order status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// The restaurant is preparing the order
    Preparing,
    /// The order is out for delivery
    OnTheWay,
    /// The order has been delivered
    Delivered,
}

impl OrderStatus {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "preparing",
            OrderStatus::OnTheWay => "on_the_way",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Converts a string to an OrderStatus enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "preparing" => Some(OrderStatus::Preparing),
            "on_the_way" => Some(OrderStatus::OnTheWay),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

/// Notification kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Status change on an order
    OrderUpdate,
    /// Promotional message
    Promo,
    /// App or account message
    System,
}

impl NotificationKind {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::OrderUpdate => "order_update",
            NotificationKind::Promo => "promo",
            NotificationKind::System => "system",
        }
    }

    /// Converts a string to a NotificationKind enum
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "order_update" => Some(NotificationKind::OrderUpdate),
            "promo" => Some(NotificationKind::Promo),
            "system" => Some(NotificationKind::System),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_round_trip() {
        for screen in [
            Screen::InitialWelcome,
            Screen::Home,
            Screen::SavedPlaces,
            Screen::Tracking,
        ] {
            assert_eq!(Screen::from_str(screen.as_str()), Some(screen));
        }
        assert_eq!(Screen::from_str("garage"), None);
    }

    #[test]
    fn test_bottom_nav_guard() {
        // Exactly the four onboarding/auth screens hide the bar
        assert!(!Screen::InitialWelcome.shows_bottom_nav());
        assert!(!Screen::Setup.shows_bottom_nav());
        assert!(!Screen::Login.shows_bottom_nav());
        assert!(!Screen::Location.shows_bottom_nav());

        assert!(Screen::Home.shows_bottom_nav());
        assert!(Screen::Menu.shows_bottom_nav());
        assert!(Screen::Tracking.shows_bottom_nav());
    }

    #[test]
    fn test_order_status_round_trip() {
        assert_eq!(OrderStatus::from_str("preparing"), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.as_str(), "preparing");
        assert_eq!(OrderStatus::from_str("lost"), None);
    }
}
