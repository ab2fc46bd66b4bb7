//! Condominio Admin
//!
//! Desktop management console for condominium administration.
//!
//! This is the main entry point for the Dioxus Desktop application.

use condo_core::Config;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Initialize logging; CONDO_LOG overrides the default level.
    let config = Config::from_env();
    let filter = EnvFilter::new(&config.log_filter);
    let _subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    // Print startup banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   🏢 Condominio Admin                                     ║");
    println!("║   Management console for condominium administration       ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    // Launch the Dioxus desktop application
    condo_ui::launch();
}
