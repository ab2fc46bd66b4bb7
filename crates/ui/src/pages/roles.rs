//! # Roles Page
//!
//! Page controller for the role workflow. The list endpoint projects
//! away the permission assignments, so the edit action refetches the full
//! record by id before opening the form.

use std::sync::Arc;

use dioxus::prelude::*;

use condo_api::RolesClient;
use condo_api::models::{Role, RolePayload};

use super::PageMode;
use crate::components::dialogs::{ConfirmDeleteDialog, RoleFormDialog};
use crate::components::RoleTable;
use crate::services::ApiServices;
use crate::state::{APP_STATE, StatusLevel, report_error};

/// Refetch the full collection into the page signals.
async fn load_roles(
    client: Arc<RolesClient>,
    mut items: Signal<Vec<Role>>,
    mut loading: Signal<bool>,
) {
    loading.set(true);
    match client.fetch_all().await {
        Ok(roles) => items.set(roles),
        Err(e) => report_error("Cargar roles", e.user_message()),
    }
    loading.set(false);
}

/// Roles page controller
#[component]
pub fn RolesPage() -> Element {
    let services = use_context::<ApiServices>();

    let items = use_signal(Vec::<Role>::new);
    let loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut mode = use_signal(PageMode::<Role>::default);
    let mut delete_target = use_signal(|| None::<Role>);
    let mut delete_busy = use_signal(|| false);
    let mut saving = use_signal(|| false);

    // Initial load.
    {
        let client = services.roles.clone();
        use_effect(move || {
            spawn(load_roles(client.clone(), items, loading));
        });
    }

    // The list projection has no permissions; fetch the full record
    // before handing it to the form.
    let open_edit = {
        let client = services.roles.clone();
        move |role: Role| {
            let client = client.clone();
            spawn(async move {
                match client.fetch_by_id(role.id).await {
                    Ok(full) => mode.write().open_edit(full),
                    Err(e) => report_error("Cargar rol", e.user_message()),
                }
            });
        }
    };

    let on_submit = {
        let client = services.roles.clone();
        move |payload: RolePayload| {
            if *saving.read() {
                return;
            }
            saving.set(true);

            let editing_id = mode.read().editing().map(|r| r.id);
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
                            .set_status("Rol guardado", StatusLevel::Success);
                        mode.write().close();
                        load_roles(client, items, loading).await;
                    }
                    Err(e) => report_error("Guardar rol", e.user_message()),
                }
                saving.set(false);
            });
        }
    };

    let confirm_delete = {
        let client = services.roles.clone();
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
                            .set_status("Rol eliminado", StatusLevel::Success);
                        delete_target.set(None);
                        load_roles(client, items, loading).await;
                    }
                    Err(e) => report_error("Eliminar rol", e.user_message()),
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
                    "Roles"
                }

                button {
                    class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg transition-colors",
                    onclick: move |_| mode.write().open_new(),
                    "+ Nuevo rol"
                }
            }

            input {
                class: "w-full max-w-sm mb-4 px-3 py-2 bg-slate-700 border border-slate-600 rounded-lg focus:outline-none focus:border-indigo-500 text-white placeholder-slate-500",
                r#type: "text",
                placeholder: "Buscar por nombre...",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }

            if is_loading {
                p { class: "text-slate-500 py-8 text-center", "Cargando roles..." }
            } else {
                RoleTable {
                    items: items.read().clone(),
                    search: search.read().clone(),
                    on_edit: open_edit,
                    on_delete: move |role| delete_target.set(Some(role)),
                }
            }

            if mode.read().is_form() {
                RoleFormDialog {
                    editing: mode.read().editing().cloned(),
                    saving: *saving.read(),
                    on_submit,
                    on_cancel: move |_| mode.write().close(),
                }
            }

            if let Some(target) = delete_target.read().clone() {
                ConfirmDeleteDialog {
                    entity_label: "rol",
                    item_name: target.name.clone(),
                    deleting: *delete_busy.read(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| delete_target.set(None),
                }
            }
        }
    }
}
