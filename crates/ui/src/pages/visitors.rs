//! # Visitors Page
//!
//! Page controller for the visitor workflow.

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;

use condo_api::VisitorsClient;
use condo_api::models::{Visitor, VisitorPayload};

use super::PageMode;
use crate::components::dialogs::{ConfirmDeleteDialog, VisitorFormDialog};
use crate::components::VisitorTable;
use crate::services::ApiServices;
use crate::state::{APP_STATE, StatusLevel, report_error};

/// Refetch the full collection into the page signals.
async fn load_visitors(
    client: Arc<VisitorsClient>,
    mut items: Signal<Vec<Visitor>>,
    mut loading: Signal<bool>,
) {
    loading.set(true);
    match client.fetch_all().await {
        Ok(visitors) => items.set(visitors),
        Err(e) => report_error("Cargar visitantes", e.user_message()),
    }
    loading.set(false);
}

/// Visitors page controller
#[component]
pub fn VisitorsPage() -> Element {
    let services = use_context::<ApiServices>();

    let items = use_signal(Vec::<Visitor>::new);
    let loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut mode = use_signal(PageMode::<Visitor>::default);
    let mut delete_target = use_signal(|| None::<Visitor>);
    let mut delete_busy = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Initial load.
    {
        let client = services.visitors.clone();
        use_effect(move || {
            spawn(load_visitors(client.clone(), items, loading));
        });
    }

    let on_submit = {
        let client = services.visitors.clone();
        move |(payload, photo): (VisitorPayload, Option<PathBuf>)| {
            if *saving.read() {
                return;
            }
            saving.set(true);

            let editing_id = mode.read().editing().map(|v| v.id);
            let client = client.clone();
            spawn(async move {
                let result = match editing_id {
                    Some(id) => client.update(id, &payload, photo.as_deref()).await.map(|_| ()),
                    None => client.create(&payload, photo.as_deref()).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        APP_STATE
                            .write()
                            .ui
                            .set_status("Visitante guardado", StatusLevel::Success);
                        mode.write().close();
                        load_visitors(client, items, loading).await;
                    }
                    Err(e) => report_error("Guardar visitante", e.user_message()),
                }
                saving.set(false);
            });
        }
    };

    let confirm_delete = {
        let client = services.visitors.clone();
        move |_| {
            let Some(target) = delete_target.read().clone() else {
                return;
            };
            if *delete_busy.read() {
                return;
            }
            delete_busy.set(true);

            let client = client.clone();
            spawn(async move {
                match client.delete(target.id).await {
                    Ok(()) => {
                        APP_STATE
                            .write()
                            .ui
                            .set_status("Visitante eliminado", StatusLevel::Success);
                        delete_target.set(None);
                        load_visitors(client, items, loading).await;
                    }
                    Err(e) => report_error("Eliminar visitante", e.user_message()),
                }
                delete_busy.set(false);
            });
        }
    };

    let is_loading = *loading.read();

    rsx! {
        div {
            class: "p-6",

            div {
                class: "flex items-center justify-between mb-6",

                h1 {
                    class: "text-2xl font-bold text-white",
                    "Visitantes"
                }

                button {
                    class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg transition-colors",
                    onclick: move |_| mode.write().open_new(),
                    "+ Nuevo visitante"
                }
            }

            input {
                class: "w-full max-w-sm mb-4 px-3 py-2 bg-slate-700 border border-slate-600 rounded-lg focus:outline-none focus:border-indigo-500 text-white placeholder-slate-500",
                r#type: "text",
                placeholder: "Buscar por nombre, documento o teléfono...",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }

            if is_loading {
                p { class: "text-slate-500 py-8 text-center", "Cargando visitantes..." }
            } else {
                VisitorTable {
                    items: items.read().clone(),
                    search: search.read().clone(),
                    on_edit: move |visitor| mode.write().open_edit(visitor),
                    on_delete: move |visitor| delete_target.set(Some(visitor)),
                }
            }

            if mode.read().is_form() {
                VisitorFormDialog {
                    editing: mode.read().editing().cloned(),
                    saving: *saving.read(),
                    on_submit,
                    on_cancel: move |_| mode.write().close(),
                }
            }

            if let Some(target) = delete_target.read().clone() {
                ConfirmDeleteDialog {
                    entity_label: "visitante",
                    item_name: target.full_name(),
                    deleting: *delete_busy.read(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| delete_target.set(None),
                }
            }
        }
    }
}
