//! # Confirm Delete Dialog Component
//!
//! Confirmation dialog for destructive delete operations. The dialog only
//! collects the decision; the owning page performs the API call and closes
//! the dialog when the request settles.

use dioxus::prelude::*;

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDeleteDialogProps {
    /// What kind of record is being deleted ("contrato", "rol", "visitante").
    pub entity_label: String,

    /// Display name of the record being deleted.
    pub item_name: String,

    /// True while the owning page's delete request is in flight.
    #[props(default)]
    pub deleting: bool,

    /// Callback when deletion is confirmed
    pub on_confirm: EventHandler<()>,

    /// Callback when dialog is cancelled
    pub on_cancel: EventHandler<()>,
}

// ============================================================================
// Main Component
// ============================================================================

/// Confirmation dialog for delete operations
#[component]
pub fn ConfirmDeleteDialog(props: ConfirmDeleteDialogProps) -> Element {
    let deleting = props.deleting;

    rsx! {
        div {
            class: "fixed inset-0 bg-black/60 flex items-center justify-center z-50",

            div {
                class: "bg-slate-800 rounded-xl border border-slate-600 shadow-2xl w-full max-w-md p-6",

                // Header with warning icon
                div {
                    class: "flex items-start gap-4 mb-6",

                    div {
                        class: "flex-shrink-0 w-12 h-12 rounded-full bg-red-500/20 flex items-center justify-center",
                        span { class: "text-2xl", "⚠️" }
                    }

                    div {
                        class: "flex-1",
                        h2 {
                            class: "text-xl font-bold text-red-400 mb-2",
                            "Eliminar {props.entity_label}"
                        }
                        p {
                            class: "text-slate-300",
                            "¿Está seguro de eliminar este {props.entity_label}? Esta acción no se puede deshacer."
                        }
                    }
                }

                // Record being deleted
                if !props.item_name.is_empty() {
                    div {
                        class: "mb-6 p-3 bg-slate-700/50 rounded-lg border border-slate-600",
                        span { class: "font-medium text-white", "{props.item_name}" }
                    }
                }

                // Actions
                div {
                    class: "flex justify-end gap-3",

                    button {
                        r#type: "button",
                        class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                        disabled: deleting,
                        onclick: move |_| props.on_cancel.call(()),
                        "Cancelar"
                    }

                    button {
                        r#type: "button",
                        class: "px-4 py-2 bg-red-600 hover:bg-red-700 disabled:bg-red-600/50 disabled:cursor-not-allowed rounded-lg transition-colors flex items-center gap-2",
                        disabled: deleting,
                        onclick: move |_| props.on_confirm.call(()),

                        if deleting {
                            span { class: "animate-spin", "⏳" }
                            "Eliminando..."
                        } else {
                            span { "🗑️" }
                            "Eliminar"
                        }
                    }
                }
            }
        }
    }
}
