//! Example usage of the state core: browse, fill two carts, check out, track

use quickbite_core::{
    config::AppConfig,
    core::types::Screen,
    models::{MenuItem, Restaurant},
    App, RestaurantDirectory,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Seed the restaurant directory (in the real app this is the listing data)
    let directory: RestaurantDirectory = [
        Restaurant::new("r1".to_string(), "Pizza Place".to_string(), "pizza.png".to_string())
            .with_cuisine("Italian".to_string())
            .with_rating(4.5),
        Restaurant::new("r2".to_string(), "Curry House".to_string(), "curry.png".to_string())
            .with_cuisine("Sri Lankan".to_string())
            .with_rating(4.8),
    ]
    .into_iter()
    .collect();

    let mut app = App::new(AppConfig::new())?.with_directory(directory);

    // The tutorial wants to run on a fresh install
    if app.maybe_start_tutorial() {
        println!("Tutorial auto-started; skipping it for this demo");
        app.skip_tutorial()?;
    }

    // Walk the onboarding screens; no bottom nav here
    for screen in [Screen::Setup, Screen::Login, Screen::Location] {
        app.go(screen);
        println!(
            "On {:>15} | bottom nav shown: {}",
            screen.as_str(),
            app.shows_bottom_nav()
        );
    }

    app.go(Screen::Home);
    println!("On {:>15} | bottom nav shown: {}", "home", app.shows_bottom_nav());

    // Open a menu from the restaurant list and fill the cart
    app.go(Screen::Restaurants);
    app.open_menu();

    let pizza_place = Restaurant::new("r1".to_string(), "Pizza Place".to_string(), "pizza.png".to_string());
    app.add_to_cart(&pizza_place, MenuItem::new(1, "Margherita".to_string(), "m.png".to_string(), 500));
    app.add_to_cart(&pizza_place, MenuItem::new(1, "Margherita".to_string(), "m.png".to_string(), 500));
    app.add_to_cart(&pizza_place, MenuItem::new(2, "Pepperoni".to_string(), "p.png".to_string(), 650));

    // A second restaurant gets its own cart
    let curry_house = Restaurant::new("r2".to_string(), "Curry House".to_string(), "curry.png".to_string());
    app.add_to_cart(&curry_house, MenuItem::new(7, "Chicken Kottu".to_string(), "k.png".to_string(), 850));

    // Leaving the menu returns to the restaurant list, not home
    app.back_to_previous();
    println!("Back from menu lands on: {}", app.current_screen().as_str());

    println!("Cart badge: {}", app.total_cart_count());
    for summary in app.cart_summaries() {
        println!(
            "  {} - {} lines, {}",
            summary.restaurant_name, summary.item_count, summary.total_price
        );
    }

    // Change of heart, then undo
    let removed = app.remove_from_cart("r2", 7).expect("the kottu was in the cart");
    println!("Removed {} (cart deleted)", removed.item.name);
    app.undo_remove("r2", removed)?;
    println!("Undo restored it; badge back to {}", app.total_cart_count());

    // Check out: the first cart's restaurant gets the tracking slot
    let order = app.checkout().expect("carts are not empty");
    println!(
        "Placed {} with {} (ETA {})",
        order.order_id, order.restaurant_name, order.estimated_time
    );
    println!("Now on: {}", app.current_screen().as_str());

    app.go(Screen::Tracking);
    let active = app.active_order().expect("an order is in flight");
    println!("Tracking {} - status: {}", active.order_id, active.status);

    println!("Unread notifications: {}", app.notifications().unread_count());

    Ok(())
}
