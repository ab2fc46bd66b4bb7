//! # Contracts Page
//!
//! Page controller for the contract workflow: owns the collection, the
//! search term and the list/form mode, and performs every mutation
//! followed by a full refetch.

use std::sync::Arc;

use dioxus::prelude::*;

use condo_api::ContractsClient;
use condo_api::models::{Contract, ContractPayload};

use super::PageMode;
use crate::components::dialogs::{ConfirmDeleteDialog, ContractFormDialog};
use crate::components::ContractTable;
use crate::services::ApiServices;
use crate::state::{APP_STATE, StatusLevel, report_error};

/// Refetch the full collection into the page signals.
async fn load_contracts(
    client: Arc<ContractsClient>,
    mut items: Signal<Vec<Contract>>,
    mut loading: Signal<bool>,
) {
    loading.set(true);
    match client.fetch_all().await {
        Ok(contracts) => items.set(contracts),
        Err(e) => report_error("Cargar contratos", e.user_message()),
    }
    loading.set(false);
}

/// Contracts page controller
#[component]
pub fn ContractsPage() -> Element {
    let services = use_context::<ApiServices>();

    let items = use_signal(Vec::<Contract>::new);
    let loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut mode = use_signal(PageMode::<Contract>::default);
    let mut delete_target = use_signal(|| None::<Contract>);
    let mut delete_busy = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Initial load.
    {
        let client = services.contracts.clone();
        use_effect(move || {
            spawn(load_contracts(client.clone(), items, loading));
        });
    }

    let reload = {
        let client = services.contracts.clone();
        move |_| {
            spawn(load_contracts(client.clone(), items, loading));
        }
    };

    // Create vs update by presence of an editing record. On success the
    // form closes and the collection is refetched; on failure the form
    // stays open with the draft intact.
    let on_submit = {
        let client = services.contracts.clone();
        move |payload: ContractPayload| {
            if *saving.read() {
                return;
            }
            saving.set(true);

            let editing_id = mode.read().editing().map(|c| c.id);
            let client = client.clone();
            spawn(async move {
                let result = match editing_id {
                    Some(id) => client.update(id, &payload).await.map(|_| ()),
                    None => client.create(&payload).await.map(|_| ()),
                };

                match result {
                    Ok(()) => {
                        APP_STATE
                            .write()
                            .ui
                            .set_status("Contrato guardado", StatusLevel::Success);
                        mode.write().close();
                        load_contracts(client, items, loading).await;
                    }
                    Err(e) => report_error("Guardar contrato", e.user_message()),
                }
                saving.set(false);
            });
        }
    };

    let confirm_delete = {
        let client = services.contracts.clone();
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
                            .set_status("Contrato eliminado", StatusLevel::Success);
                        delete_target.set(None);
                        load_contracts(client, items, loading).await;
                    }
                    Err(e) => report_error("Eliminar contrato", e.user_message()),
                }
                delete_busy.set(false);
            });
        }
    };

    let is_loading = *loading.read();

    rsx! {
        div {
            class: "p-6",

            // Header row
            div {
                class: "flex items-center justify-between mb-6",

                h1 {
                    class: "text-2xl font-bold text-white",
                    "Contratos"
                }

                button {
                    class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg transition-colors",
                    onclick: move |_| mode.write().open_new(),
                    "+ Nuevo contrato"
                }
            }

            // Search
            input {
                class: "w-full max-w-sm mb-4 px-3 py-2 bg-slate-700 border border-slate-600 rounded-lg focus:outline-none focus:border-indigo-500 text-white placeholder-slate-500",
                r#type: "text",
                placeholder: "Buscar por propietario, unidad o estado...",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }

            if is_loading {
                p { class: "text-slate-500 py-8 text-center", "Cargando contratos..." }
            } else {
                ContractTable {
                    items: items.read().clone(),
                    search: search.read().clone(),
                    on_edit: move |contract| mode.write().open_edit(contract),
                    on_delete: move |contract| delete_target.set(Some(contract)),
                    on_reload: reload,
                }
            }

            if mode.read().is_form() {
                ContractFormDialog {
                    editing: mode.read().editing().cloned(),
                    saving: *saving.read(),
                    on_submit,
                    on_cancel: move |_| mode.write().close(),
                }
            }

            if let Some(target) = delete_target.read().clone() {
                ConfirmDeleteDialog {
                    entity_label: "contrato",
                    item_name: target.propietario.display_name(),
                    deleting: *delete_busy.read(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| delete_target.set(None),
                }
            }
        }
    }
}
