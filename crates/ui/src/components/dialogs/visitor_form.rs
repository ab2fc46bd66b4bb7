//! # Visitor Form Dialog Component
//!
//! Create/edit dialog for visitors. The photo field is tri-state: no
//! photo, an existing remote reference kept as-is, or a freshly picked
//! local file that goes out as a multipart upload.

use std::path::PathBuf;

use dioxus::prelude::*;

use condo_api::models::{Sex, Visitor, VisitorPayload, VisitorStatus};
use condo_core::AdminError;

use super::date_only;
use crate::components::inputs::{Select, SelectOption, TextInput};
use crate::file_ops;
use crate::state::report_error;

// ============================================================================
// Photo Draft
// ============================================================================

/// Photo attachment state of the draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PhotoDraft {
    /// No photo attached.
    #[default]
    None,
    /// Existing server-side photo, referenced by URL and left untouched.
    Remote(String),
    /// Newly picked local file, to be uploaded on save.
    Local(PathBuf),
}

impl PhotoDraft {
    /// Short description for the photo row.
    pub fn summary(&self) -> String {
        match self {
            PhotoDraft::None => "Sin foto".to_string(),
            PhotoDraft::Remote(url) => format!("Foto actual: {}", url),
            PhotoDraft::Local(path) => match path.file_name() {
                Some(name) => format!("Nueva foto: {}", name.to_string_lossy()),
                None => "Nueva foto".to_string(),
            },
        }
    }
}

// ============================================================================
// Form State
// ============================================================================

/// Editable draft of a visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitorFormState {
    pub nombre: String,
    pub apellido: String,
    pub telefono: String,
    pub nro_documento: String,
    pub fecha_nacimiento: String,
    pub estado: VisitorStatus,
    pub sexo: Sex,
    pub photo: PhotoDraft,
}

impl VisitorFormState {
    /// Prefill the draft from an existing record.
    pub fn from_visitor(visitor: &Visitor) -> Self {
        Self {
            nombre: visitor.nombre.clone(),
            apellido: visitor.apellido.clone(),
            telefono: visitor.telefono.clone().unwrap_or_default(),
            nro_documento: visitor.nro_documento.clone().unwrap_or_default(),
            fecha_nacimiento: visitor
                .fecha_nacimiento
                .as_deref()
                .map(date_only)
                .unwrap_or_default(),
            estado: visitor.estado,
            sexo: visitor.sexo,
            photo: match &visitor.foto {
                Some(url) => PhotoDraft::Remote(url.clone()),
                None => PhotoDraft::None,
            },
        }
    }

    /// Validate the draft, returning a list of problems.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.nombre.trim().is_empty() {
            errors.push("El nombre es obligatorio".to_string());
        }
        if self.apellido.trim().is_empty() {
            errors.push("El apellido es obligatorio".to_string());
        }
        errors
    }

    /// Convert the draft into the wire payload.
    ///
    /// A remote photo keeps its URL in the JSON body; a local photo is
    /// carried separately by the multipart path.
    pub fn to_payload(&self) -> VisitorPayload {
        VisitorPayload {
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            telefono: self.telefono.clone(),
            foto: match &self.photo {
                PhotoDraft::Remote(url) => Some(url.clone()),
                _ => None,
            },
            estado: self.estado,
            sexo: self.sexo,
            nro_documento: self.nro_documento.clone(),
            fecha_nacimiento: self.fecha_nacimiento.clone(),
        }
    }

    /// The local file to upload, if one was picked.
    pub fn local_photo(&self) -> Option<PathBuf> {
        match &self.photo {
            PhotoDraft::Local(path) => Some(path.clone()),
            _ => None,
        }
    }
}

// ============================================================================
// Component
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct VisitorFormDialogProps {
    /// Record being edited, or `None` when creating.
    pub editing: Option<Visitor>,

    /// True while the owning page's save request is in flight.
    #[props(default)]
    pub saving: bool,

    /// Emits the assembled payload plus the local photo to upload, if one
    /// was picked; the page performs the API call.
    pub on_submit: EventHandler<(VisitorPayload, Option<PathBuf>)>,

    /// Callback when the dialog is dismissed without saving.
    pub on_cancel: EventHandler<()>,
}

/// Create/edit dialog for a visitor
#[component]
pub fn VisitorFormDialog(props: VisitorFormDialogProps) -> Element {
    let editing_id = props.editing.as_ref().map(|v| v.id);

    let initial = props.editing.clone();
    let mut form = use_signal(move || match &initial {
        Some(visitor) => VisitorFormState::from_visitor(visitor),
        None => VisitorFormState::default(),
    });
    let mut errors = use_signal(Vec::<String>::new);

    let title = if editing_id.is_some() {
        "Editar visitante"
    } else {
        "Nuevo visitante"
    };

    let is_saving = props.saving;

    let pick_photo = move |_| {
        spawn(async move {
            match file_ops::show_photo_pick_dialog().await {
                Ok(path) => form.write().photo = PhotoDraft::Local(path),
                Err(AdminError::Cancelled) => {}
                Err(e) => report_error("Seleccionar foto", e.to_string()),
            }
        });
    };

    let clear_photo = move |_| {
        form.write().photo = PhotoDraft::None;
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

            let payload = form.read().to_payload();
            let photo = form.read().local_photo();
            on_submit.call((payload, photo));
        }
    };

    let status_options: Vec<SelectOption> = VisitorStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.code(), s.label()))
        .collect();

    let sex_options: Vec<SelectOption> = Sex::ALL
        .iter()
        .map(|s| SelectOption::new(s.code(), s.label()))
        .collect();

    let photo_summary = form.read().photo.summary();
    let has_photo = form.read().photo != PhotoDraft::None;

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

                        div {
                            class: "grid grid-cols-2 gap-4",

                            TextInput {
                                value: form.read().nombre.clone(),
                                label: "Nombre",
                                required: true,
                                disabled: is_saving,
                                on_change: move |v| form.write().nombre = v,
                            }

                            TextInput {
                                value: form.read().apellido.clone(),
                                label: "Apellido",
                                required: true,
                                disabled: is_saving,
                                on_change: move |v| form.write().apellido = v,
                            }
                        }

                        div {
                            class: "grid grid-cols-2 gap-4",

                            TextInput {
                                value: form.read().telefono.clone(),
                                label: "Teléfono",
                                input_type: "tel",
                                disabled: is_saving,
                                on_change: move |v| form.write().telefono = v,
                            }

                            TextInput {
                                value: form.read().nro_documento.clone(),
                                label: "Nro. de documento",
                                disabled: is_saving,
                                on_change: move |v| form.write().nro_documento = v,
                            }
                        }

                        TextInput {
                            value: form.read().fecha_nacimiento.clone(),
                            label: "Fecha de nacimiento",
                            input_type: "date",
                            disabled: is_saving,
                            on_change: move |v| form.write().fecha_nacimiento = v,
                        }

                        div {
                            class: "grid grid-cols-2 gap-4",

                            Select {
                                value: form.read().estado.code().to_string(),
                                label: "Estado",
                                options: status_options,
                                disabled: is_saving,
                                on_change: move |v: String| {
                                    form.write().estado = VisitorStatus::from_code(&v);
                                },
                            }

                            Select {
                                value: form.read().sexo.code().to_string(),
                                label: "Sexo",
                                options: sex_options,
                                disabled: is_saving,
                                on_change: move |v: String| {
                                    form.write().sexo = Sex::from_code(&v);
                                },
                            }
                        }

                        // Photo row
                        div {
                            span {
                                class: "block text-sm font-medium text-slate-300 mb-1.5",
                                "Foto"
                            }
                            div {
                                class: "flex items-center gap-3",

                                button {
                                    r#type: "button",
                                    class: "px-3 py-1.5 text-sm bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors",
                                    disabled: is_saving,
                                    onclick: pick_photo,
                                    "Elegir foto..."
                                }

                                if has_photo {
                                    button {
                                        r#type: "button",
                                        class: "px-3 py-1.5 text-sm text-red-400 hover:text-red-300",
                                        disabled: is_saving,
                                        onclick: clear_photo,
                                        "Quitar"
                                    }
                                }

                                span {
                                    class: "text-sm text-slate-500 truncate",
                                    "{photo_summary}"
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

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn visitor() -> Visitor {
        Visitor {
            id: 12,
            nombre: "Ana".to_string(),
            apellido: "Flores".to_string(),
            telefono: Some("70011223".to_string()),
            foto: Some("https://cdn.example/fotos/ana.jpg".to_string()),
            estado: VisitorStatus::Active,
            sexo: Sex::Female,
            nro_documento: Some("7894561".to_string()),
            fecha_nacimiento: Some("1990-03-15T00:00:00Z".to_string()),
            fecha_registro: Some("2024-05-01".to_string()),
        }
    }

    #[test]
    fn test_prefill_keeps_remote_photo() {
        let form = VisitorFormState::from_visitor(&visitor());
        assert_eq!(
            form.photo,
            PhotoDraft::Remote("https://cdn.example/fotos/ana.jpg".to_string())
        );
        assert_eq!(form.fecha_nacimiento, "1990-03-15");
        assert_eq!(form.local_photo(), None);
    }

    #[test]
    fn test_remote_photo_round_trips_in_payload() {
        let form = VisitorFormState::from_visitor(&visitor());
        let payload = form.to_payload();
        assert_eq!(
            payload.foto.as_deref(),
            Some("https://cdn.example/fotos/ana.jpg")
        );
    }

    #[test]
    fn test_local_photo_leaves_payload_foto_empty() {
        let mut form = VisitorFormState::from_visitor(&visitor());
        form.photo = PhotoDraft::Local(PathBuf::from("/tmp/nueva.jpg"));

        let payload = form.to_payload();
        assert_eq!(payload.foto, None);
        assert_eq!(form.local_photo(), Some(PathBuf::from("/tmp/nueva.jpg")));
    }

    #[test]
    fn test_validate_requires_names() {
        let form = VisitorFormState::default();
        assert_eq!(form.validate().len(), 2);

        let form = VisitorFormState {
            nombre: "Ana".to_string(),
            apellido: "Flores".to_string(),
            ..Default::default()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_photo_summary() {
        assert_eq!(PhotoDraft::None.summary(), "Sin foto");
        assert_eq!(
            PhotoDraft::Local(PathBuf::from("/tmp/nueva.jpg")).summary(),
            "Nueva foto: nueva.jpg"
        );
    }
}
