//! # Input Components
//!
//! Reusable form input components for the Condominio Admin UI:
//! - **TextInput**: Single-line text input (also used for date fields via
//!   `input_type: "date"`)
//! - **NumberInput**: Numeric input backed by a text draft
//! - **Select**: Dropdown selection
//! - **Checkbox**: Boolean checkbox with label
//!
//! All components follow consistent styling with Tailwind utility classes.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, date, tel, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-0.5", "*" }
                    }
                }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.clone().unwrap_or_default(),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p { class: "mt-1 text-sm text-rose-400", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "mt-1 text-sm text-slate-500", "{help}" }
            }
        }
    }
}

// ============================================================================
// Number Input Component
// ============================================================================

/// Properties for NumberInput component
#[derive(Props, Clone, PartialEq)]
pub struct NumberInputProps {
    /// Current draft text (kept as text so a half-typed value survives)
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Step increment
    #[props(default = "0.01".to_string())]
    pub step: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Numeric input component
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    "{label}"
                }
            }

            input {
                class: "{input_class}",
                r#type: "number",
                step: "{props.step}",
                value: "{props.value}",
                placeholder: props.placeholder.clone().unwrap_or_default(),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p { class: "mt-1 text-sm text-rose-400", "{error}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// An option for the Select component
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Whether the select is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown selection component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_input_class(false, props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "block text-sm font-medium text-slate-300 mb-1.5",
                    "{label}"
                }
            }

            select {
                class: "{select_class}",
                value: "{props.value}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                for option in props.options.iter() {
                    option {
                        value: "{option.value}",
                        selected: option.value == props.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether the checkbox is checked
    pub checked: bool,

    /// Label text
    pub label: String,

    /// Help text shown next to the label
    #[props(default)]
    pub help_text: Option<String>,

    /// Whether the checkbox is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Boolean checkbox component with label
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: "flex items-center gap-2 cursor-pointer select-none",

            input {
                class: "w-4 h-4 accent-indigo-500",
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.checked()),
            }

            span { class: "text-sm text-slate-200", "{props.label}" }

            if let Some(help) = &props.help_text {
                span { class: "text-xs text-slate-500", "{help}" }
            }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the shared input styling, switching to the error border when needed
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let base = "w-full px-3 py-2 bg-slate-700 border rounded-lg text-white \
                focus:outline-none transition-colors";
    let border = if has_error {
        "border-rose-500 focus:border-rose-400"
    } else {
        "border-slate-600 focus:border-indigo-500"
    };
    let state = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };
    format!("{} {} {}", base, border, state)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_option_new() {
        let option = SelectOption::new("P", "Pendiente");
        assert_eq!(option.value, "P");
        assert_eq!(option.label, "Pendiente");
    }

    #[test]
    fn test_input_class_error_state() {
        let class = build_input_class(true, false);
        assert!(class.contains("border-rose-500"));

        let class = build_input_class(false, true);
        assert!(class.contains("cursor-not-allowed"));
    }
}
