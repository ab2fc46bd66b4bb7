//! # Role Form Dialog Component
//!
//! Create/edit dialog for roles: a name field plus a permission picker
//! backed by the full permission catalog. The catalog is fetched when the
//! dialog opens; a failed or empty catalog degrades to a notice without
//! blocking the save.

use std::collections::HashSet;

use dioxus::prelude::*;

use condo_api::models::{Permission, Role, RolePayload};

use crate::components::inputs::{Checkbox, TextInput};
use crate::services::ApiServices;

// ============================================================================
// Selection State
// ============================================================================

/// Aggregate state of the permission picker, for the select-all control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No catalog entry is selected (or the catalog is empty).
    None,
    /// Some but not all catalog entries are selected.
    Partial,
    /// Every catalog entry is selected.
    All,
}

/// Compute the select-all state from the selection and the catalog.
///
/// Selections pointing outside the catalog (stale assignments) do not
/// count towards it.
pub fn selection_state(selected: &HashSet<i64>, catalog: &[Permission]) -> SelectionState {
    if catalog.is_empty() {
        return SelectionState::None;
    }

    let in_catalog = catalog.iter().filter(|p| selected.contains(&p.id)).count();
    if in_catalog == 0 {
        SelectionState::None
    } else if in_catalog == catalog.len() {
        SelectionState::All
    } else {
        SelectionState::Partial
    }
}

// ============================================================================
// Form State
// ============================================================================

/// Editable draft of a role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleFormState {
    pub name: String,
    pub selected: HashSet<i64>,
}

impl RoleFormState {
    /// Prefill the draft from a full role record.
    pub fn from_role(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            selected: role.permission_ids().into_iter().collect(),
        }
    }

    /// Validate the draft, returning a list of problems.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push("El nombre del rol es obligatorio".to_string());
        }
        errors
    }

    /// Convert the draft into the wire payload. Ids are sent sorted so
    /// the payload is deterministic.
    pub fn to_payload(&self) -> RolePayload {
        let mut permission_ids: Vec<i64> = self.selected.iter().copied().collect();
        permission_ids.sort_unstable();
        RolePayload {
            name: self.name.clone(),
            permission_ids,
        }
    }
}

// ============================================================================
// Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct RoleFormDialogProps {
    /// Full role record being edited (fetched by id), or `None` when creating.
    pub editing: Option<Role>,

    /// True while the owning page's save request is in flight.
    #[props(default)]
    pub saving: bool,

    /// Emits the assembled payload; the page performs the API call.
    pub on_submit: EventHandler<RolePayload>,

    /// Callback when the dialog is dismissed without saving.
    pub on_cancel: EventHandler<()>,
}

/// Create/edit dialog for a role
#[component]
pub fn RoleFormDialog(props: RoleFormDialogProps) -> Element {
    let services = use_context::<ApiServices>();
    let editing_id = props.editing.as_ref().map(|r| r.id);

    let initial = props.editing.clone();
    let mut form = use_signal(move || match &initial {
        Some(role) => RoleFormState::from_role(role),
        None => RoleFormState::default(),
    });
    let mut errors = use_signal(Vec::<String>::new);

    let mut catalog = use_signal(Vec::<Permission>::new);
    let mut catalog_loading = use_signal(|| true);
    let mut catalog_failed = use_signal(|| false);

    // Fetch the permission catalog once when the dialog opens.
    {
        let client = services.permissions.clone();
        use_effect(move || {
            let client = client.clone();
            spawn(async move {
                match client.fetch_all().await {
                    Ok(permissions) => catalog.set(permissions),
                    Err(e) => {
                        tracing::warn!("Failed to load permission catalog: {}", e);
                        catalog_failed.set(true);
                    }
                }
                catalog_loading.set(false);
            });
        });
    }

    let title = if editing_id.is_some() {
        "Editar rol"
    } else {
        "Nuevo rol"
    };

    let handle_save = {
        let on_submit = props.on_submit;
        move |event: FormEvent| {
            event.prevent_default();

            let found = form.read().validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(Vec::new());

            on_submit.call(form.read().to_payload());
        }
    };

    let select_all_state = selection_state(&form.read().selected, &catalog.read());
    let toggle_all = move |_| {
        let all_ids: Vec<i64> = catalog.read().iter().map(|p| p.id).collect();
        let mut form = form.write();
        match selection_state(&form.selected, &catalog.read()) {
            SelectionState::All => {
                for id in &all_ids {
                    form.selected.remove(id);
                }
            }
            SelectionState::None | SelectionState::Partial => {
                form.selected.extend(all_ids);
            }
        }
    };

    let select_all_glyph = match select_all_state {
        SelectionState::None => "☐",
        SelectionState::Partial => "◪",
        SelectionState::All => "☑",
    };

    let is_saving = props.saving;
    let loading = *catalog_loading.read();
    let failed = *catalog_failed.read();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/60 flex items-center justify-center z-50",

            div {
                class: "bg-slate-800 rounded-xl border border-slate-600 shadow-2xl w-full max-w-lg p-6",

                h2 {
                    class: "text-xl font-bold text-white mb-4",
                    "{title}"
                }

                if !errors.read().is_empty() {
                    div {
                        class: "mb-4 p-3 bg-red-500/10 border border-red-500/30 rounded-lg text-sm text-red-300",
                        for error in errors.read().iter() {
                            p { "{error}" }
                        }
                    }
                }

                form {
                    onsubmit: handle_save,

                    TextInput {
                        value: form.read().name.clone(),
                        label: "Nombre",
                        placeholder: "Administrador",
                        required: true,
                        disabled: is_saving,
                        on_change: move |v| form.write().name = v,
                    }

                    // Permission picker
                    div {
                        class: "mt-4",

                        div {
                            class: "flex items-center justify-between mb-2",
                            span {
                                class: "block text-sm font-medium text-slate-300",
                                "Permisos"
                            }
                            if !catalog.read().is_empty() {
                                button {
                                    r#type: "button",
                                    class: "text-sm text-indigo-400 hover:text-indigo-300 flex items-center gap-1",
                                    onclick: toggle_all,
                                    span { "{select_all_glyph}" }
                                    "Seleccionar todos"
                                }
                            }
                        }

                        if loading {
                            p { class: "text-sm text-slate-500", "Cargando permisos..." }
                        } else if failed {
                            p {
                                class: "text-sm text-amber-400",
                                "No se pudieron cargar los permisos. El rol se guardará con los permisos actuales."
                            }
                        } else if catalog.read().is_empty() {
                            p { class: "text-sm text-slate-500", "No hay permisos disponibles" }
                        } else {
                            div {
                                class: "max-h-64 overflow-y-auto space-y-1 p-2 bg-slate-900/50 rounded-lg border border-slate-700",

                                for permission in catalog.read().iter().cloned() {
                                    PermissionCheckRow {
                                        key: "{permission.id}",
                                        permission,
                                        disabled: is_saving,
                                        form,
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "flex justify-end gap-3 mt-6",

                        button {
                            r#type: "button",
                            class: "px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                            disabled: is_saving,
                            onclick: move |_| props.on_cancel.call(()),
                            "Cancelar"
                        }

                        button {
                            r#type: "submit",
                            class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-600/50 disabled:cursor-not-allowed rounded-lg transition-colors",
                            disabled: is_saving,
                            if is_saving { "Guardando..." } else { "Guardar" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PermissionCheckRowProps {
    permission: Permission,
    disabled: bool,
    form: Signal<RoleFormState>,
}

#[component]
fn PermissionCheckRow(props: PermissionCheckRowProps) -> Element {
    let mut form = props.form;
    let id = props.permission.id;
    let checked = form.read().selected.contains(&id);

    rsx! {
        div {
            class: "px-2 py-1 rounded hover:bg-slate-800",

            Checkbox {
                checked,
                label: props.permission.name.clone(),
                help_text: props.permission.codename.clone(),
                disabled: props.disabled,
                on_change: move |now_checked: bool| {
                    let mut form = form.write();
                    if now_checked {
                        form.selected.insert(id);
                    } else {
                        form.selected.remove(&id);
                    }
                },
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn permission(id: i64, codename: &str) -> Permission {
        Permission {
            id,
            name: codename.replace('_', " "),
            codename: codename.to_string(),
        }
    }

    #[test]
    fn test_selection_state_empty_catalog() {
        let selected: HashSet<i64> = [1, 2].into_iter().collect();
        assert_eq!(selection_state(&selected, &[]), SelectionState::None);
    }

    #[test]
    fn test_selection_state_transitions() {
        let catalog = vec![permission(1, "add_contrato"), permission(2, "view_contrato")];

        let none: HashSet<i64> = HashSet::new();
        assert_eq!(selection_state(&none, &catalog), SelectionState::None);

        let partial: HashSet<i64> = [1].into_iter().collect();
        assert_eq!(selection_state(&partial, &catalog), SelectionState::Partial);

        let all: HashSet<i64> = [1, 2].into_iter().collect();
        assert_eq!(selection_state(&all, &catalog), SelectionState::All);
    }

    #[test]
    fn test_selection_state_ignores_stale_ids() {
        let catalog = vec![permission(1, "add_contrato")];
        // Id 99 was assigned before the permission disappeared.
        let selected: HashSet<i64> = [99].into_iter().collect();
        assert_eq!(selection_state(&selected, &catalog), SelectionState::None);
    }

    #[test]
    fn test_payload_ids_are_sorted() {
        let form = RoleFormState {
            name: "Portero".to_string(),
            selected: [42, 7, 19].into_iter().collect(),
        };
        let payload = form.to_payload();
        assert_eq!(payload.permission_ids, vec![7, 19, 42]);
    }

    #[test]
    fn test_validate_requires_name() {
        let form = RoleFormState::default();
        assert_eq!(form.validate().len(), 1);

        let form = RoleFormState {
            name: "Portero".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_prefill_from_full_record() {
        let role = Role {
            id: 4,
            name: "Portero".to_string(),
            permissions: vec![permission(1, "view_visitante"), permission(3, "add_visitante")],
        };
        let form = RoleFormState::from_role(&role);
        assert_eq!(form.name, "Portero");
        assert_eq!(form.selected, [1, 3].into_iter().collect());
    }
}
