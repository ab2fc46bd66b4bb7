//! # Condo UI
//!
//! Dioxus Desktop UI for Condominio Admin.
//!
//! This crate provides the administration interface for the condominium
//! backend: contract, role and visitor management over its REST API.
//!
//! ## Features
//!
//! - One page per entity with a searchable table and a create/edit form
//! - Contract PDF generation and download
//! - Role editing against the full permission catalog
//! - Visitor photo upload
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod file_ops;
pub mod pages;
pub mod services;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use condo_api;
pub use condo_core;

// Re-export main components
pub use app::App;
pub use pages::{ContractsPage, PageMode, RolesPage, VisitorsPage};
pub use services::ApiServices;
pub use state::{APP_STATE, AppState, Section, StatusLevel, StatusMessage, UiState};

// Re-export components
pub use components::{
    ConfirmDeleteDialog, ContractFormDialog, ContractTable, RoleFormDialog, RoleTable,
    VisitorFormDialog, VisitorTable,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Condominio Admin";

/// Application display title
pub const TITLE: &str = "Condominio Admin - Gestión de Condominio";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Condominio Admin desktop application
///
/// This is the main entry point for the Dioxus desktop app.
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     condo_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 840.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Condominio Admin");
    }

    #[test]
    fn test_title() {
        assert!(TITLE.contains("Condominio Admin"));
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
    }
}
