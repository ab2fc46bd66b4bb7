//! # Contract Table Component
//!
//! Searchable table of contracts with row-level actions: edit, delete,
//! server-side PDF generation and PDF download.
//!
//! PDF actions are side effects of the row itself (not routed through the
//! page): each row talks to the contracts client directly, guarded by a
//! per-row in-flight marker that disables only the row being processed,
//! and asks the page for a full reload on success.

use dioxus::prelude::*;

use condo_api::models::Contract;
use condo_core::AdminError;

use crate::file_ops;
use crate::services::ApiServices;
use crate::state::{APP_STATE, StatusLevel, report_error};

// ============================================================================
// Filtering and projection
// ============================================================================

/// Case-insensitive search over owner name, unit and status label.
///
/// An empty term returns the collection unchanged.
pub fn filter_contracts(items: &[Contract], term: &str) -> Vec<Contract> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|c| {
            c.propietario.display_name().to_lowercase().contains(&term)
                || c.unidad
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&term)
                || c.estado.label().to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Render an optional monetary amount, substituting a placeholder.
pub fn money_label(value: Option<f64>) -> String {
    match value {
        Some(amount) => format!("{:.2}", amount),
        None => "N/A".to_string(),
    }
}

/// Render an optional text field, substituting a placeholder.
pub fn text_label(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => "N/A".to_string(),
    }
}

// ============================================================================
// Table Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ContractTableProps {
    /// The page's full contract collection.
    pub items: Vec<Contract>,

    /// Current search term.
    pub search: String,

    /// Edit intent: hands the original record back to the page.
    pub on_edit: EventHandler<Contract>,

    /// Delete intent: the page owns confirmation and the API call.
    pub on_delete: EventHandler<Contract>,

    /// Full-collection reload request after a PDF was generated.
    pub on_reload: EventHandler<()>,
}

/// Searchable contract table
#[component]
pub fn ContractTable(props: ContractTableProps) -> Element {
    // Id of the row whose PDF is currently being generated, if any.
    let busy_row = use_signal(|| None::<i64>);

    let filtered = filter_contracts(&props.items, &props.search);

    rsx! {
        div {
            class: "overflow-x-auto rounded-lg border border-slate-700",

            table {
                class: "w-full text-sm text-left",

                thead {
                    class: "bg-slate-800 text-slate-400 uppercase text-xs",
                    tr {
                        th { class: "px-4 py-3", "Propietario" }
                        th { class: "px-4 py-3", "Unidad" }
                        th { class: "px-4 py-3", "Fecha" }
                        th { class: "px-4 py-3", "Cuota mensual" }
                        th { class: "px-4 py-3", "Estado" }
                        th { class: "px-4 py-3 text-right", "Acciones" }
                    }
                }

                tbody {
                    class: "divide-y divide-slate-700/50",

                    if filtered.is_empty() {
                        tr {
                            td {
                                colspan: 6,
                                class: "px-4 py-6 text-center text-slate-500",
                                "Sin contratos"
                            }
                        }
                    }

                    for contract in filtered {
                        ContractRow {
                            key: "{contract.id}",
                            contract,
                            busy_row,
                            on_edit: props.on_edit,
                            on_delete: props.on_delete,
                            on_reload: props.on_reload,
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Row Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct ContractRowProps {
    contract: Contract,
    busy_row: Signal<Option<i64>>,
    on_edit: EventHandler<Contract>,
    on_delete: EventHandler<Contract>,
    on_reload: EventHandler<()>,
}

/// One contract row with its actions
#[component]
fn ContractRow(props: ContractRowProps) -> Element {
    let services = use_context::<ApiServices>();
    let mut busy_row = props.busy_row;

    let contract = props.contract.clone();
    let id = contract.id;
    let is_busy = *busy_row.read() == Some(id);

    let owner = contract.propietario.display_name();
    let unit = text_label(contract.unidad.as_deref());
    let date = text_label(contract.fecha_contrato.as_deref());
    let fee = money_label(contract.cuota_mensual);
    let status = contract.estado.label();

    // PDF generation: a single request/response, no polling. Only this
    // row's button goes busy; other rows stay interactive.
    let generate_pdf = {
        let client = services.contracts.clone();
        let on_reload = props.on_reload;
        move |_| {
            if *busy_row.read() == Some(id) {
                return;
            }
            busy_row.set(Some(id));

            let client = client.clone();
            spawn(async move {
                match client.generate_pdf(id).await {
                    Ok(generated) => {
                        APP_STATE.write().ui.set_status(
                            format!("PDF generado: {}", generated.pdf_url),
                            StatusLevel::Success,
                        );
                        on_reload.call(());
                    }
                    Err(e) => report_error("Generar PDF", e.user_message()),
                }
                if *busy_row.read() == Some(id) {
                    busy_row.set(None);
                }
            });
        }
    };

    // Download is only offered once the record carries a PDF reference.
    let pdf_url = contract.pdf_generado.clone();
    let download_pdf = {
        let client = services.contracts.clone();
        let url = pdf_url.clone();
        move |_| {
            let Some(url) = url.clone() else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                let default_name = file_ops::pdf_default_filename(chrono::Utc::now());
                let dest = match file_ops::show_pdf_save_dialog(&default_name).await {
                    Ok(dest) => dest,
                    Err(AdminError::Cancelled) => {
                        tracing::debug!("PDF save cancelled by user");
                        return;
                    }
                    Err(e) => {
                        report_error("Guardar PDF", e.to_string());
                        return;
                    }
                };
                match client.download_pdf(&url, &dest).await {
                    Ok(()) => {
                        APP_STATE.write().ui.set_status(
                            format!("PDF guardado en {}", dest.display()),
                            StatusLevel::Success,
                        );
                    }
                    Err(e) => report_error("Descargar PDF", e.user_message()),
                }
            });
        }
    };

    let edit_record = contract.clone();
    let delete_record = contract.clone();

    rsx! {
        tr {
            class: "hover:bg-slate-800/60 transition-colors",

            td { class: "px-4 py-3 font-medium text-white", "{owner}" }
            td { class: "px-4 py-3", "{unit}" }
            td { class: "px-4 py-3", "{date}" }
            td { class: "px-4 py-3", "{fee}" }
            td { class: "px-4 py-3", "{status}" }

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
                        class: "px-2 py-1 text-xs bg-indigo-600 hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed rounded transition-colors",
                        disabled: is_busy,
                        onclick: generate_pdf,
                        if is_busy { "Generando..." } else { "Generar PDF" }
                    }

                    if pdf_url.is_some() {
                        button {
                            class: "px-2 py-1 text-xs bg-slate-700 hover:bg-slate-600 rounded transition-colors",
                            onclick: download_pdf,
                            "Descargar"
                        }
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

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use condo_api::models::{ContractStatus, OwnerRef};
    use pretty_assertions::assert_eq;

    fn contract(id: i64, owner: &str, unit: Option<&str>) -> Contract {
        Contract {
            id,
            propietario: OwnerRef::Name(owner.to_string()),
            unidad: unit.map(String::from),
            fecha_contrato: None,
            cuota_mensual: None,
            costo_compra: None,
            estado: ContractStatus::Pending,
            pdf_generado: None,
        }
    }

    #[test]
    fn test_empty_term_returns_all() {
        let items = vec![contract(1, "Ana", None), contract(2, "Luis", None)];
        assert_eq!(filter_contracts(&items, "").len(), 2);
        assert_eq!(filter_contracts(&items, "   ").len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = vec![contract(1, "Ana Flores", None), contract(2, "Luis Paz", None)];
        let found = filter_contracts(&items, "FLORES");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_filter_matches_unit_and_status() {
        let items = vec![
            contract(1, "Ana", Some("A-101")),
            contract(2, "Luis", Some("B-202")),
        ];
        assert_eq!(filter_contracts(&items, "b-202")[0].id, 2);
        // Every pending contract matches its status label.
        assert_eq!(filter_contracts(&items, "pendiente").len(), 2);
    }

    #[test]
    fn test_filter_result_is_subset() {
        let items = vec![contract(1, "Ana", None), contract(2, "Luis", None)];
        let found = filter_contracts(&items, "ana");
        assert!(found.iter().all(|c| items.contains(c)));
    }

    #[test]
    fn test_placeholders_for_missing_fields() {
        assert_eq!(money_label(None), "N/A");
        assert_eq!(money_label(Some(350.5)), "350.50");
        assert_eq!(text_label(None), "N/A");
        assert_eq!(text_label(Some("")), "N/A");
        assert_eq!(text_label(Some("A-101")), "A-101");
    }
}
