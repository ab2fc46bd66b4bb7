//! # Contract Form Dialog Component
//!
//! Create/edit dialog for contracts. The dialog owns a string-draft form
//! state and validates numeric fields locally; the assembled payload is
//! emitted upward, and the owning page performs the API call.

use dioxus::prelude::*;

use condo_api::models::{Contract, ContractPayload, ContractStatus};

use super::date_only;
use crate::components::inputs::{NumberInput, Select, SelectOption, TextInput};

// ============================================================================
// Form State
// ============================================================================

/// Editable draft of a contract.
///
/// Every field is a string so the inputs can hold partial values; parsing
/// happens only when the draft is turned into a payload. An untouched
/// draft produces a payload with empty strings and null amounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractFormState {
    pub propietario: String,
    pub unidad: String,
    pub fecha_contrato: String,
    pub cuota_mensual: String,
    pub costo_compra: String,
    pub estado: ContractStatus,
}

impl ContractFormState {
    /// Prefill the draft from an existing record.
    pub fn from_contract(contract: &Contract) -> Self {
        Self {
            propietario: contract.propietario.raw_name(),
            unidad: contract.unidad.clone().unwrap_or_default(),
            fecha_contrato: contract
                .fecha_contrato
                .as_deref()
                .map(date_only)
                .unwrap_or_default(),
            cuota_mensual: money_draft(contract.cuota_mensual),
            costo_compra: money_draft(contract.costo_compra),
            estado: contract.estado,
        }
    }

    /// Validate the draft, returning a list of problems.
    ///
    /// Only local concerns are checked; required-field enforcement is the
    /// server's job and its verdict is shown verbatim.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if parse_money(&self.cuota_mensual).is_none() && !self.cuota_mensual.trim().is_empty() {
            errors.push("La cuota mensual debe ser un número".to_string());
        }

        if parse_money(&self.costo_compra).is_none() && !self.costo_compra.trim().is_empty() {
            errors.push("El costo de compra debe ser un número".to_string());
        }

        errors
    }

    /// Convert the draft into the wire payload.
    pub fn to_payload(&self) -> ContractPayload {
        ContractPayload {
            propietario: self.propietario.clone(),
            unidad: self.unidad.clone(),
            fecha_contrato: self.fecha_contrato.clone(),
            cuota_mensual: parse_money(&self.cuota_mensual),
            costo_compra: parse_money(&self.costo_compra),
            estado: self.estado,
        }
    }
}

/// Render an optional amount back into an editable draft.
fn money_draft(value: Option<f64>) -> String {
    match value {
        Some(amount) => format!("{}", amount),
        None => String::new(),
    }
}

/// Parse a money draft; empty drafts become `None`.
fn parse_money(draft: &str) -> Option<f64> {
    let draft = draft.trim();
    if draft.is_empty() {
        return None;
    }
    draft.parse::<f64>().ok()
}

// ============================================================================
// Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct ContractFormDialogProps {
    /// Record being edited, or `None` when creating.
    pub editing: Option<Contract>,

    /// True while the owning page's save request is in flight.
    #[props(default)]
    pub saving: bool,

    /// Emits the assembled payload; the page performs the API call.
    pub on_submit: EventHandler<ContractPayload>,

    /// Callback when the dialog is dismissed without saving.
    pub on_cancel: EventHandler<()>,
}

/// Create/edit dialog for a contract
#[component]
pub fn ContractFormDialog(props: ContractFormDialogProps) -> Element {
    let editing_id = props.editing.as_ref().map(|c| c.id);

    let initial = props.editing.clone();
    let mut form = use_signal(move || match &initial {
        Some(contract) => ContractFormState::from_contract(contract),
        None => ContractFormState::default(),
    });
    let mut errors = use_signal(Vec::<String>::new);

    let title = if editing_id.is_some() {
        "Editar contrato"
    } else {
        "Nuevo contrato"
    };

    let is_saving = props.saving;

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

    let status_options: Vec<SelectOption> = ContractStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.code(), s.label()))
        .collect();

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

                    div {
                        class: "space-y-4",

                        TextInput {
                            value: form.read().propietario.clone(),
                            label: "Propietario",
                            placeholder: "Nombre del propietario",
                            disabled: is_saving,
                            on_change: move |v| form.write().propietario = v,
                        }

                        TextInput {
                            value: form.read().unidad.clone(),
                            label: "Unidad",
                            placeholder: "A-101",
                            disabled: is_saving,
                            on_change: move |v| form.write().unidad = v,
                        }

                        TextInput {
                            value: form.read().fecha_contrato.clone(),
                            label: "Fecha del contrato",
                            input_type: "date",
                            disabled: is_saving,
                            on_change: move |v| form.write().fecha_contrato = v,
                        }

                        div {
                            class: "grid grid-cols-2 gap-4",

                            NumberInput {
                                value: form.read().cuota_mensual.clone(),
                                label: "Cuota mensual",
                                step: "0.01",
                                disabled: is_saving,
                                on_change: move |v| form.write().cuota_mensual = v,
                            }

                            NumberInput {
                                value: form.read().costo_compra.clone(),
                                label: "Costo de compra",
                                step: "0.01",
                                disabled: is_saving,
                                on_change: move |v| form.write().costo_compra = v,
                            }
                        }

                        Select {
                            value: form.read().estado.code().to_string(),
                            label: "Estado",
                            options: status_options,
                            disabled: is_saving,
                            on_change: move |v: String| {
                                form.write().estado = ContractStatus::from_code(&v);
                            },
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

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use condo_api::models::OwnerRef;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_untouched_draft_payload_shape() {
        let payload = ContractFormState::default().to_payload();
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"propietario":"","unidad":"","fecha_contrato":"","cuota_mensual":null,"costo_compra":null,"estado":"P"}"#
        );
    }

    #[test]
    fn test_prefill_from_record() {
        let contract = Contract {
            id: 9,
            propietario: OwnerRef::Name("Ana Flores".to_string()),
            unidad: Some("A-101".to_string()),
            fecha_contrato: Some("2024-05-01T00:00:00Z".to_string()),
            cuota_mensual: Some(350.0),
            costo_compra: None,
            estado: ContractStatus::Active,
            pdf_generado: None,
        };

        let form = ContractFormState::from_contract(&contract);
        assert_eq!(form.propietario, "Ana Flores");
        assert_eq!(form.unidad, "A-101");
        assert_eq!(form.fecha_contrato, "2024-05-01");
        assert_eq!(form.cuota_mensual, "350");
        assert_eq!(form.costo_compra, "");
        assert_eq!(form.estado, ContractStatus::Active);
    }

    #[test]
    fn test_prefill_never_uses_display_placeholder() {
        let contract = Contract {
            id: 9,
            propietario: OwnerRef::default(),
            unidad: None,
            fecha_contrato: None,
            cuota_mensual: None,
            costo_compra: None,
            estado: ContractStatus::Pending,
            pdf_generado: None,
        };

        let form = ContractFormState::from_contract(&contract);
        assert_eq!(form.propietario, "");
    }

    #[test]
    fn test_validate_rejects_unparsable_amounts() {
        let form = ContractFormState {
            cuota_mensual: "abc".to_string(),
            ..Default::default()
        };
        assert_eq!(form.validate().len(), 1);

        let form = ContractFormState {
            cuota_mensual: "350.50".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_parse_money_handles_blank_and_valid() {
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("  "), None);
        assert_eq!(parse_money("350.5"), Some(350.5));
    }
}
