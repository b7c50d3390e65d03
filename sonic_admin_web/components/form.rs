use dioxus::prelude::*;
use sonic_admin_types::fields::{FieldKind, SelectOption};

use crate::view_helpers::format_number;

const EASYMDE_CSS: &str = "https://unpkg.com/easymde/dist/easymde.min.css";
const EASYMDE_JS: &str = "https://unpkg.com/easymde/dist/easymde.min.js";

/// Partial-refresh request issued by a field when its value changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRefresh {
    pub get: String,
    pub trigger: String,
    pub target: String,
}

/// One input of a form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub id: Option<String>,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub placeholder: Option<String>,
    pub required: bool,
    pub readonly: bool,
    pub help_text: Option<String>,
    pub max_length: Option<u32>,
    pub min_length: Option<u32>,
    pub pattern: Option<String>,
    pub errors: Vec<String>,
    pub refresh: Option<FieldRefresh>,
    pub class_name: Option<String>,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            id: None,
            label: label.into(),
            kind,
            value: String::new(),
            placeholder: None,
            required: false,
            readonly: false,
            help_text: None,
            max_length: None,
            min_length: None,
            pattern: None,
            errors: Vec::new(),
            refresh: None,
            class_name: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn max_length(mut self, max: u32) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min_length(mut self, min: u32) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    pub fn refresh(mut self, refresh: FieldRefresh) -> Self {
        self.refresh = Some(refresh);
        self
    }

    /// DOM id, defaulting to the field name.
    pub fn dom_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    fn is_checked(&self) -> bool {
        matches!(self.value.as_str(), "true" | "1" | "on" | "yes")
    }

    fn is_selected(&self, option: &SelectOption) -> bool {
        match self.kind {
            FieldKind::MultiSelect { .. } => self.value.split(',').any(|v| v.trim() == option.value),
            _ => self.value == option.value,
        }
    }
}

/// Where the form submits to.
#[derive(Debug, Clone, PartialEq)]
pub enum FormTarget {
    HxPost(String),
    HxPut(String),
    Action(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Submit,
    Button,
    Reset,
}

impl ButtonType {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Submit => "submit",
            ButtonType::Button => "button",
            ButtonType::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormButton {
    pub label: String,
    pub kind: ButtonType,
    pub name: Option<String>,
    pub value: Option<String>,
    pub onclick: Option<String>,
    pub class_name: Option<String>,
}

impl FormButton {
    pub fn submit(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ButtonType::Submit,
            name: None,
            value: None,
            onclick: None,
            class_name: None,
        }
    }

    /// Plain button that runs a script instead of submitting.
    pub fn button(label: impl Into<String>, onclick: impl Into<String>) -> Self {
        Self {
            kind: ButtonType::Button,
            onclick: Some(onclick.into()),
            ..Self::submit(label)
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.value = Some(value.into());
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    fn class(&self) -> &str {
        self.class_name.as_deref().unwrap_or("btn-primary")
    }
}

/// Fields rendered inside their own container so a partial swap can replace them.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGroup {
    pub id: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormData {
    pub id: Option<String>,
    pub target: FormTarget,
    pub hx_target: Option<String>,
    pub hx_swap: Option<String>,
    pub method: Option<String>,
    pub class_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub fields: Vec<FormField>,
    pub groups: Vec<FieldGroup>,
    pub buttons: Vec<FormButton>,
}

impl FormData {
    pub fn new(target: FormTarget, fields: Vec<FormField>) -> Self {
        Self {
            id: None,
            target,
            hx_target: None,
            hx_swap: None,
            method: None,
            class_name: None,
            title: None,
            description: None,
            fields,
            groups: Vec::new(),
            buttons: Vec::new(),
        }
    }

    pub fn with_group(mut self, id: impl Into<String>, fields: Vec<FormField>) -> Self {
        self.groups.push(FieldGroup {
            id: id.into(),
            fields,
        });
        self
    }

    fn has_file_field(&self) -> bool {
        self.fields
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.fields.iter()))
            .any(|f| matches!(f.kind, FieldKind::File))
    }
}

#[component]
pub fn Form(data: FormData) -> Element {
    let (hx_post, hx_put, action) = match &data.target {
        FormTarget::HxPost(url) => (Some(url.clone()), None, None),
        FormTarget::HxPut(url) => (None, Some(url.clone()), None),
        FormTarget::Action(url) => (None, None, Some(url.clone())),
    };
    let method = data.method.clone().unwrap_or_else(|| "POST".to_string());
    let class = data.class_name.clone().unwrap_or_else(|| "space-y-6".to_string());
    let enctype = data.has_file_field().then_some("multipart/form-data");

    rsx! {
        if data.title.is_some() || data.description.is_some() {
            div { class: "mb-6",
                if let Some(title) = &data.title {
                    h2 { class: "text-xl font-semibold text-white", "{title}" }
                }
                if let Some(description) = &data.description {
                    p { class: "mt-1 text-sm text-gray-300", "{description}" }
                }
            }
        }
        form {
            id: data.id.clone(),
            "hx-post": hx_post,
            "hx-put": hx_put,
            "action": action,
            "hx-target": data.hx_target.clone(),
            "hx-swap": data.hx_swap.clone(),
            method: "{method}",
            class: "{class}",
            "enctype": enctype,
            div { id: "form-messages" }
            for field in data.fields.iter() {
                Field { field: field.clone() }
            }
            for group in data.groups.iter() {
                div { id: "{group.id}",
                    for field in group.fields.iter() {
                        Field { field: field.clone() }
                    }
                }
            }
            if !data.buttons.is_empty() {
                div { class: "flex items-center gap-x-3 pt-4",
                    for button in data.buttons.iter() {
                        button {
                            r#type: button.kind.as_str(),
                            "name": button.name.clone(),
                            "value": button.value.clone(),
                            "onclick": button.onclick.clone(),
                            class: "btn {button.class()}",
                            "{button.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Label, control, help text and errors for one field.
#[component]
pub fn Field(field: FormField) -> Element {
    let id = field.dom_id().to_string();
    let wrapper_class = format!("form-group {}", field.class_name.as_deref().unwrap_or_default());

    rsx! {
        div { class: "{wrapper_class}", "data-field": "{field.name}",
            if matches!(field.kind, FieldKind::Checkbox) {
                div { class: "flex items-center gap-x-2",
                    input {
                        r#type: "checkbox",
                        id: "{id}",
                        name: "{field.name}",
                        value: "true",
                        class: "rounded border-white/20 bg-white/10",
                        checked: field.is_checked(),
                        disabled: field.readonly,
                    }
                    label { r#for: "{id}", class: "text-sm text-gray-300",
                        "{field.label}"
                        if field.required {
                            span { class: "text-red-400", " *" }
                        }
                    }
                }
            } else {
                label { r#for: "{id}", class: "form-label",
                    "{field.label}"
                    if field.required {
                        span { class: "text-red-400", " *" }
                    }
                }
                {control(&field, &id)}
            }
            if let Some(help) = &field.help_text {
                p { class: "mt-1 text-xs text-gray-400", "{help}" }
            }
            if !field.errors.is_empty() {
                div { class: "field-errors mt-1",
                    for error in field.errors.iter() {
                        p { class: "text-sm text-red-400", "{error}" }
                    }
                }
            }
        }
    }
}

fn control(field: &FormField, id: &str) -> Element {
    let placeholder = field.placeholder.clone();
    let max_length = field.max_length.map(|n| n.to_string());
    let min_length = field.min_length.map(|n| n.to_string());
    let pattern = field.pattern.clone();
    let hx_get = field.refresh.as_ref().map(|r| r.get.clone());
    let hx_trigger = field.refresh.as_ref().map(|r| r.trigger.clone());
    let hx_target = field.refresh.as_ref().map(|r| r.target.clone());

    let input_type = match &field.kind {
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        FieldKind::Date => "datetime-local",
        FieldKind::File => "file",
        _ => "text",
    };

    match &field.kind {
        FieldKind::Textarea { rows } => rsx! {
            textarea {
                id: "{id}",
                name: "{field.name}",
                rows: "{rows}",
                class: "form-input",
                placeholder: placeholder,
                required: field.required,
                readonly: field.readonly,
                "maxlength": max_length,
                "minlength": min_length,
                "{field.value}"
            }
        },
        FieldKind::RichText { rows } => {
            let init = format!(
                "if (window.EasyMDE) {{ new EasyMDE({{ element: document.getElementById('{id}'), spellChecker: false }}); }}"
            );
            rsx! {
                link { rel: "stylesheet", href: EASYMDE_CSS }
                textarea {
                    id: "{id}",
                    name: "{field.name}",
                    rows: "{rows}",
                    class: "form-input rich-text-editor",
                    placeholder: placeholder,
                    required: field.required,
                    readonly: field.readonly,
                    "{field.value}"
                }
                script { src: EASYMDE_JS }
                script { dangerous_inner_html: "{init}" }
            }
        }
        FieldKind::Select { options } | FieldKind::MultiSelect { options } => {
            let multiple = matches!(field.kind, FieldKind::MultiSelect { .. });
            rsx! {
                select {
                    id: "{id}",
                    name: "{field.name}",
                    class: "form-input",
                    required: field.required,
                    disabled: field.readonly,
                    multiple: multiple,
                    "hx-get": hx_get,
                    "hx-trigger": hx_trigger,
                    "hx-target": hx_target,
                    if let Some(placeholder) = &field.placeholder {
                        option { value: "", "{placeholder}" }
                    }
                    for option in options.iter() {
                        option {
                            value: "{option.value}",
                            selected: field.is_selected(option),
                            "{option.label}"
                        }
                    }
                }
            }
        }
        FieldKind::Number { min, max, step } => {
            let min = min.map(format_number);
            let max = max.map(format_number);
            let step = step.map(format_number);
            rsx! {
                input {
                    r#type: "number",
                    id: "{id}",
                    name: "{field.name}",
                    value: "{field.value}",
                    class: "form-input",
                    placeholder: placeholder,
                    required: field.required,
                    readonly: field.readonly,
                    "min": min,
                    "max": max,
                    "step": step,
                }
            }
        }
        FieldKind::File => rsx! {
            input {
                r#type: "file",
                id: "{id}",
                name: "{field.name}",
                class: "form-input",
                required: field.required,
                disabled: field.readonly,
            }
        },
        _ => rsx! {
            input {
                r#type: input_type,
                id: "{id}",
                name: "{field.name}",
                value: "{field.value}",
                class: "form-input",
                placeholder: placeholder,
                required: field.required,
                readonly: field.readonly,
                "maxlength": max_length,
                "minlength": min_length,
                "pattern": pattern,
                "hx-get": hx_get,
                "hx-trigger": hx_trigger,
                "hx-target": hx_target,
            }
        },
    }
}
