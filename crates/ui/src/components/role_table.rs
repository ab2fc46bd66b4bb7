//! # Role Table Component
//!
//! Searchable table of roles. The list projection does not carry the
//! permission assignments, so the table only shows names; the page
//! refetches the full record before opening the editor.

use dioxus::prelude::*;

use condo_api::models::Role;

/// Case-insensitive search over the role name.
pub fn filter_roles(items: &[Role], term: &str) -> Vec<Role> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

#[derive(Props, Clone, PartialEq)]
pub struct RoleTableProps {
    pub items: Vec<Role>,
    pub search: String,
    pub on_edit: EventHandler<Role>,
    pub on_delete: EventHandler<Role>,
}

/// Searchable role table
#[component]
pub fn RoleTable(props: RoleTableProps) -> Element {
    let filtered = filter_roles(&props.items, &props.search);

    rsx! {
        div {
            class: "overflow-x-auto rounded-lg border border-slate-700",

            table {
                class: "w-full text-sm text-left",

                thead {
                    class: "bg-slate-800 text-slate-400 uppercase text-xs",
                    tr {
                        th { class: "px-4 py-3", "Nombre" }
                        th { class: "px-4 py-3 text-right", "Acciones" }
                    }
                }

                tbody {
                    class: "divide-y divide-slate-700/50",

                    if filtered.is_empty() {
                        tr {
                            td {
                                colspan: 2,
                                class: "px-4 py-6 text-center text-slate-500",
                                "Sin roles"
                            }
                        }
                    }

                    for role in filtered {
                        RoleRow {
                            key: "{role.id}",
                            role,
                            on_edit: props.on_edit,
                            on_delete: props.on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RoleRowProps {
    role: Role,
    on_edit: EventHandler<Role>,
    on_delete: EventHandler<Role>,
}

#[component]
fn RoleRow(props: RoleRowProps) -> Element {
    let edit_record = props.role.clone();
    let delete_record = props.role.clone();

    rsx! {
        tr {
            class: "hover:bg-slate-800/60 transition-colors",

            td { class: "px-4 py-3 font-medium text-white", "{props.role.name}" }

            td {
                class: "px-4 py-3",
                div {
                    class: "flex justify-end gap-2",

                    button {
                        class: "px-2 py-1 text-xs bg-slate-700 hover:bg-slate-600 rounded transition-colors",
                        onclick: move |_| props.on_edit.call(edit_record.clone()),
                        "Editar"
                    }

                    button {
                        class: "px-2 py-1 text-xs bg-red-600/80 hover:bg-red-600 rounded transition-colors",
                        onclick: move |_| props.on_delete.call(delete_record.clone()),
                        "Eliminar"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn role(id: i64, name: &str) -> Role {
        Role {
            id,
            name: name.to_string(),
            permissions: Vec::new(),
        }
    }

    #[test]
    fn test_empty_term_returns_all() {
        let items = vec![role(1, "Administrador"), role(2, "Portero")];
        assert_eq!(filter_roles(&items, "").len(), 2);
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let items = vec![role(1, "Administrador"), role(2, "Portero")];
        let found = filter_roles(&items, "PORT");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let items = vec![role(1, "Administrador")];
        assert!(filter_roles(&items, "contador").is_empty());
    }
}
