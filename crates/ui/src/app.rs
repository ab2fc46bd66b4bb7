//! Main Application Component for Condominio Admin
//!
//! This module contains the root Dioxus component that renders the entire
//! application: header, navigation sidebar, the active entity page and the
//! status bar.

use dioxus::prelude::*;

use crate::pages::{ContractsPage, RolesPage, VisitorsPage};
use crate::services::ApiServices;
use crate::state::{APP_STATE, Section};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // The API clients are provided through context so pages and dialogs
    // can reach them without threading props.
    use_context_provider(ApiServices::from_env);

    use_effect(|| {
        tracing::info!("Condominio Admin UI initialized");
    });

    rsx! {
        div {
            class: "app-container h-screen w-screen flex flex-col bg-slate-900 text-slate-100 overflow-hidden",

            Header {}

            div {
                class: "flex flex-1 overflow-hidden",

                Sidebar {}
                MainContent {}
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Top header with app identity
#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "h-12 bg-slate-800 border-b border-slate-700 flex items-center px-4 gap-2 shrink-0",

            div {
                class: "flex items-center gap-2",
                span { class: "text-xl", "🏢" }
                span { class: "font-semibold text-sm", "Condominio Admin" }
            }
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Left sidebar with section navigation
#[component]
fn Sidebar() -> Element {
    let state = APP_STATE.read();
    let collapsed = state.ui.sidebar_collapsed;
    let current = state.ui.active_section;
    drop(state);

    rsx! {
        aside {
            class: "sidebar flex flex-col shrink-0 bg-slate-800 border-r border-slate-700 transition-all duration-200",
            style: if collapsed { "width: 60px;" } else { "width: 220px;" },

            // Header with toggle button
            div {
                class: "h-12 flex items-center justify-between px-3 border-b border-slate-700",

                if !collapsed {
                    span {
                        class: "text-sm font-semibold text-slate-300",
                        "Secciones"
                    }
                }

                button {
                    class: "w-8 h-8 flex items-center justify-center rounded hover:bg-slate-700 text-slate-400 hover:text-slate-200 transition-colors",
                    title: if collapsed { "Expandir" } else { "Contraer" },
                    onclick: move |_| {
                        APP_STATE.write().ui.toggle_sidebar();
                    },
                    if collapsed { "☰" } else { "✕" }
                }
            }

            nav {
                class: "flex-1 py-4 overflow-y-auto",

                for section in Section::ALL {
                    SidebarItem {
                        section,
                        current,
                        collapsed,
                    }
                }
            }
        }
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(section: Section, current: Section, collapsed: bool) -> Element {
    let is_active = section == current;
    let icon = section.icon();
    let name = section.display_name();

    let item_class = if is_active {
        "bg-indigo-600 text-white"
    } else {
        "text-slate-300 hover:bg-slate-700"
    };

    if collapsed {
        rsx! {
            button {
                class: "flex items-center justify-center w-11 h-11 mx-auto my-1 rounded-lg cursor-pointer transition-colors {item_class}",
                title: "{name}",
                onclick: move |_| {
                    APP_STATE.write().ui.navigate(section);
                },
                span { class: "text-xl", "{icon}" }
            }
        }
    } else {
        rsx! {
            button {
                class: "flex items-center gap-3 px-4 py-2.5 mx-2 my-0.5 rounded-lg cursor-pointer w-[calc(100%-16px)] text-left transition-colors {item_class}",
                title: "{name}",
                onclick: move |_| {
                    APP_STATE.write().ui.navigate(section);
                },
                span { class: "text-lg shrink-0", "{icon}" }
                span { class: "text-sm font-medium", "{name}" }
            }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

/// Main content area that renders the active section's page
#[component]
fn MainContent() -> Element {
    let current = APP_STATE.read().ui.active_section;

    rsx! {
        main {
            class: "flex-1 overflow-auto bg-slate-900",

            match current {
                Section::Contracts => rsx! { ContractsPage {} },
                Section::Roles => rsx! { RolesPage {} },
                Section::Visitors => rsx! { VisitorsPage {} },
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar
#[component]
fn StatusBar() -> Element {
    let status = APP_STATE.read().ui.status_message.clone();

    rsx! {
        footer {
            class: "status-bar h-6 bg-slate-800 border-t border-slate-700 flex items-center px-4 text-xs text-slate-400 shrink-0",

            if let Some(msg) = status {
                span {
                    class: msg.level.css_class(),
                    "{msg.text}"
                }
            } else {
                span { "Listo" }
            }

            div { class: "flex-1" }

            span { "v{crate::VERSION}" }
        }
    }
}
