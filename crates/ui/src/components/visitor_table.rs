//! # Visitor Table Component
//!
//! Searchable table of visitors with photo thumbnails and placeholder
//! text for missing optional fields.

use dioxus::prelude::*;

use condo_api::models::Visitor;

/// Case-insensitive search over full name, document number and phone.
pub fn filter_visitors(items: &[Visitor], term: &str) -> Vec<Visitor> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|v| {
            v.full_name().to_lowercase().contains(&term)
                || v.nro_documento
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&term)
                || v.telefono
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&term)
        })
        .cloned()
        .collect()
}

/// Render the phone column, substituting its placeholder.
pub fn phone_label(value: Option<&str>) -> String {
    match value {
        Some(phone) if !phone.trim().is_empty() => phone.to_string(),
        _ => "Sin teléfono".to_string(),
    }
}

/// Render an optional text field, substituting a placeholder.
pub fn text_label(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => "N/A".to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct VisitorTableProps {
    pub items: Vec<Visitor>,
    pub search: String,
    pub on_edit: EventHandler<Visitor>,
    pub on_delete: EventHandler<Visitor>,
}

/// Searchable visitor table
#[component]
pub fn VisitorTable(props: VisitorTableProps) -> Element {
    let filtered = filter_visitors(&props.items, &props.search);

    rsx! {
        div {
            class: "overflow-x-auto rounded-lg border border-slate-700",

            table {
                class: "w-full text-sm text-left",

                thead {
                    class: "bg-slate-800 text-slate-400 uppercase text-xs",
                    tr {
                        th { class: "px-4 py-3", "Foto" }
                        th { class: "px-4 py-3", "Nombre" }
                        th { class: "px-4 py-3", "Documento" }
                        th { class: "px-4 py-3", "Teléfono" }
                        th { class: "px-4 py-3", "Estado" }
                        th { class: "px-4 py-3", "Registro" }
                        th { class: "px-4 py-3 text-right", "Acciones" }
                    }
                }

                tbody {
                    class: "divide-y divide-slate-700/50",

                    if filtered.is_empty() {
                        tr {
                            td {
                                colspan: 7,
                                class: "px-4 py-6 text-center text-slate-500",
                                "Sin visitantes"
                            }
                        }
                    }

                    for visitor in filtered {
                        VisitorRow {
                            key: "{visitor.id}",
                            visitor,
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
struct VisitorRowProps {
    visitor: Visitor,
    on_edit: EventHandler<Visitor>,
    on_delete: EventHandler<Visitor>,
}

#[component]
fn VisitorRow(props: VisitorRowProps) -> Element {
    let visitor = &props.visitor;

    let name = visitor.full_name();
    let document = text_label(visitor.nro_documento.as_deref());
    let phone = phone_label(visitor.telefono.as_deref());
    let status = visitor.estado.label();
    let registered = text_label(visitor.fecha_registro.as_deref());

    let edit_record = visitor.clone();
    let delete_record = visitor.clone();

    rsx! {
        tr {
            class: "hover:bg-slate-800/60 transition-colors",

            td {
                class: "px-4 py-2",
                if let Some(foto) = &visitor.foto {
                    img {
                        class: "w-8 h-8 rounded-full object-cover",
                        src: "{foto}",
                        alt: "{name}",
                    }
                } else {
                    div {
                        class: "w-8 h-8 rounded-full bg-slate-700 flex items-center justify-center text-xs text-slate-400",
                        "—"
                    }
                }
            }

            td { class: "px-4 py-3 font-medium text-white", "{name}" }
            td { class: "px-4 py-3", "{document}" }
            td { class: "px-4 py-3", "{phone}" }
            td { class: "px-4 py-3", "{status}" }
            td { class: "px-4 py-3", "{registered}" }

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
    use condo_api::models::{Sex, VisitorStatus};
    use pretty_assertions::assert_eq;

    fn visitor(id: i64, nombre: &str, apellido: &str, documento: Option<&str>) -> Visitor {
        Visitor {
            id,
            nombre: nombre.to_string(),
            apellido: apellido.to_string(),
            telefono: None,
            foto: None,
            estado: VisitorStatus::Active,
            sexo: Sex::Male,
            nro_documento: documento.map(String::from),
            fecha_nacimiento: None,
            fecha_registro: None,
        }
    }

    #[test]
    fn test_filter_matches_full_name() {
        let items = vec![
            visitor(1, "Ana", "Flores", None),
            visitor(2, "Luis", "Paz", None),
        ];
        let found = filter_visitors(&items, "ana flores");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_filter_matches_document() {
        let items = vec![
            visitor(1, "Ana", "Flores", Some("7894561")),
            visitor(2, "Luis", "Paz", Some("1237894")),
        ];
        assert_eq!(filter_visitors(&items, "789456")[0].id, 1);
    }

    #[test]
    fn test_phone_placeholder() {
        assert_eq!(phone_label(None), "Sin teléfono");
        assert_eq!(phone_label(Some("  ")), "Sin teléfono");
        assert_eq!(phone_label(Some("70011223")), "70011223");
    }
}
