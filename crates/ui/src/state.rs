//! Application State Management for Condominio Admin
//!
//! This module provides the global UI state using Dioxus 0.7 Signals:
//! active section, status bar messages, and sidebar chrome. Entity
//! collections are NOT global — each page controller owns its own
//! collection and list/form mode.

use dioxus::prelude::*;

// ============================================================================
// Section Navigation
// ============================================================================

/// Top-level sections of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Contract management
    #[default]
    Contracts,
    /// Role and permission management
    Roles,
    /// Visitor management
    Visitors,
}

impl Section {
    /// All sections in sidebar order
    pub const ALL: [Section; 3] = [Section::Contracts, Section::Roles, Section::Visitors];

    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Contracts => "Contratos",
            Section::Roles => "Roles",
            Section::Visitors => "Visitantes",
        }
    }

    /// Get the icon emoji for this section (for UI display)
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Contracts => "📄",
            Section::Roles => "🔑",
            Section::Visitors => "🚶",
        }
    }
}

// ============================================================================
// Status Messages
// ============================================================================

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// CSS classes for the status bar rendering of this level
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "text-slate-300",
            StatusLevel::Success => "text-emerald-400",
            StatusLevel::Warning => "text-amber-400",
            StatusLevel::Error => "text-red-400",
        }
    }
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (section, status bar, chrome)
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Whether the sidebar is collapsed
    pub sidebar_collapsed: bool,
    /// Currently active section
    pub active_section: Section,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            active_section: Section::Contracts,
            status_message: None,
        }
    }
}

impl UiState {
    /// Create new UI state
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a section
    pub fn navigate(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle sidebar
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// UI state
    pub ui: UiState,
}

impl AppState {
    /// Create new application state
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
/// Use this in components to access and modify app state
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

/// Report an error to the status bar and the log in one step
pub fn report_error(context: &str, message: impl Into<String>) {
    let message = message.into();
    tracing::error!("{}: {}", context, message);
    APP_STATE
        .write()
        .ui
        .set_status(format!("{}: {}", context, message), StatusLevel::Error);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_defaults_to_contracts() {
        assert_eq!(Section::default(), Section::Contracts);
        assert_eq!(Section::ALL.len(), 3);
    }

    #[test]
    fn test_section_display_names() {
        assert_eq!(Section::Contracts.display_name(), "Contratos");
        assert_eq!(Section::Roles.display_name(), "Roles");
        assert_eq!(Section::Visitors.display_name(), "Visitantes");
    }

    #[test]
    fn test_ui_state_navigation() {
        let mut ui = UiState::new();
        assert_eq!(ui.active_section, Section::Contracts);

        ui.navigate(Section::Visitors);
        assert_eq!(ui.active_section, Section::Visitors);
    }

    #[test]
    fn test_status_message_set_and_clear() {
        let mut ui = UiState::new();
        assert!(ui.status_message.is_none());

        ui.set_status("Contrato creado", StatusLevel::Success);
        let message = ui.status_message.as_ref().unwrap();
        assert_eq!(message.text, "Contrato creado");
        assert_eq!(message.level, StatusLevel::Success);

        ui.clear_status();
        assert!(ui.status_message.is_none());
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut ui = UiState::new();
        assert!(!ui.sidebar_collapsed);
        ui.toggle_sidebar();
        assert!(ui.sidebar_collapsed);
    }
}
