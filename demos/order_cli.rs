//! Command-line demo for the state core
//!
//! Each subcommand runs one self-contained flow against a fresh app, since
//! the real app holds all of this in memory for the lifetime of a session.
//! Only the tutorial flags touch the storage file.

use clap::{Parser, Subcommand};
use quickbite_core::{
    config::AppConfig,
    core::types::{NotificationKind, Screen},
    models::{MenuItem, Restaurant},
    App, RestaurantDirectory,
};
use std::path::PathBuf;

/// QuickBite state-core CLI
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Path to the storage file for the persisted flags
    #[clap(short, long, default_value = ".quickbite.json")]
    storage: PathBuf,

    /// Subcommands
    #[clap(subcommand)]
    command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill two carts and print the multicart projection
    Cart,
    /// Walk the screens and show the bottom-nav guard
    Screens,
    /// Place an order and print the tracking summary
    Checkout,
    /// Show the tutorial flags and advance a run
    Tutorial {
        /// Reset the flags so the tutorial auto-starts again
        #[clap(long)]
        reset: bool,
    },
    /// Push a few notifications and print the badge
    Notifications,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::new().with_storage_path(&cli.storage);
    let mut app = App::new(config)?.with_directory(directory());

    match cli.command {
        Commands::Cart => {
            fill_carts(&mut app);
            println!("Cart badge: {}", app.total_cart_count());
            for summary in app.cart_summaries() {
                println!(
                    "  {} - {} lines, {}",
                    summary.restaurant_name, summary.item_count, summary.total_price
                );
            }
        }
        Commands::Screens => {
            for screen in [
                Screen::InitialWelcome,
                Screen::Login,
                Screen::Home,
                Screen::Restaurants,
                Screen::Tracking,
            ] {
                app.go(screen);
                println!(
                    "{:>15} | bottom nav: {}",
                    screen.as_str(),
                    if app.shows_bottom_nav() { "shown" } else { "hidden" }
                );
            }
        }
        Commands::Checkout => {
            fill_carts(&mut app);
            let order = app.checkout().expect("carts were just filled");
            println!("Order {} placed with {}", order.order_id, order.restaurant_name);
            println!("Status: {} (ETA {})", order.status, order.estimated_time);
            println!("Landed on: {}", app.current_screen().as_str());
        }
        Commands::Tutorial { reset } => {
            if reset {
                app.set_tutorial_enabled(true)?;
                println!("Tutorial flags reset");
            }
            println!("Auto-start: {}", app.tutorial().should_auto_start());
            if app.maybe_start_tutorial() {
                while let Some(step) = app.tutorial().current_step() {
                    println!("  step: {}", step.as_str());
                    app.advance_tutorial()?;
                }
                println!("Tutorial finished; completed flag persisted");
            }
        }
        Commands::Notifications => {
            app.notify(NotificationKind::Promo, "Half price kottu", "Today only at Curry House");
            app.notify(NotificationKind::System, "New restaurants", "3 new places near you");
            println!("Unread badge: {}", app.notifications().unread_count());
            app.mark_notifications_read();
            println!("After opening the screen: {}", app.notifications().unread_count());
        }
    }

    Ok(())
}

fn directory() -> RestaurantDirectory {
    [
        Restaurant::new("r1".to_string(), "Pizza Place".to_string(), "pizza.png".to_string()),
        Restaurant::new("r2".to_string(), "Curry House".to_string(), "curry.png".to_string()),
    ]
    .into_iter()
    .collect()
}

fn fill_carts(app: &mut App) {
    let pizza_place = Restaurant::new("r1".to_string(), "Pizza Place".to_string(), "pizza.png".to_string());
    let curry_house = Restaurant::new("r2".to_string(), "Curry House".to_string(), "curry.png".to_string());

    app.add_to_cart(&pizza_place, MenuItem::new(1, "Margherita".to_string(), "m.png".to_string(), 500));
    app.add_to_cart(&pizza_place, MenuItem::new(1, "Margherita".to_string(), "m.png".to_string(), 500));
    app.add_to_cart(&curry_house, MenuItem::new(7, "Chicken Kottu".to_string(), "k.png".to_string(), 850));
}
