use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl AlertKind {
    fn container_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "bg-green-50 border border-green-200 dark:bg-green-900/20 dark:border-green-800",
            AlertKind::Error => "bg-error/10 border border-red-200 dark:border-red-800",
            AlertKind::Warning => "bg-yellow-50 border border-yellow-200 dark:bg-yellow-900/20 dark:border-yellow-800",
            AlertKind::Info => "bg-blue-50 border border-blue-200 dark:bg-blue-900/20 dark:border-blue-800",
        }
    }

    fn icon_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "text-green-400",
            AlertKind::Error => "text-red-400",
            AlertKind::Warning => "text-yellow-400",
            AlertKind::Info => "text-blue-400",
        }
    }

    fn title_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "text-green-800 dark:text-green-200",
            AlertKind::Error => "text-red-800 dark:text-red-200",
            AlertKind::Warning => "text-yellow-800 dark:text-yellow-200",
            AlertKind::Info => "text-blue-800 dark:text-blue-200",
        }
    }

    fn message_class(&self) -> &'static str {
        match self {
            AlertKind::Success => "text-green-700 dark:text-green-300",
            AlertKind::Error => "text-red-700 dark:text-red-300",
            AlertKind::Warning => "text-yellow-700 dark:text-yellow-300",
            AlertKind::Info => "text-blue-700 dark:text-blue-300",
        }
    }

    fn icon_path(&self) -> &'static str {
        match self {
            AlertKind::Success => {
                "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"
            }
            AlertKind::Error => {
                "M10 18a8 8 0 100-16 8 8 0 000 16zM8.707 7.293a1 1 0 00-1.414 1.414L8.586 10l-1.293 1.293a1 1 0 101.414 1.414L10 11.414l1.293 1.293a1 1 0 001.414-1.414L11.414 10l1.293-1.293a1 1 0 00-1.414-1.414L10 8.586 8.707 7.293z"
            }
            AlertKind::Warning => {
                "M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z"
            }
            AlertKind::Info => {
                "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z"
            }
        }
    }
}

/// Alert box data.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertData {
    pub kind: AlertKind,
    pub title: Option<String>,
    pub message: String,
    pub dismissible: bool,
    pub show_icon: bool,
    pub class_name: Option<String>,
}

impl AlertData {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
            dismissible: false,
            show_icon: true,
            class_name: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn dismissible(mut self) -> Self {
        self.dismissible = true;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

#[component]
pub fn Alert(data: AlertData) -> Element {
    let kind = data.kind;
    let container_class = format!(
        "rounded-md p-4 {} {}",
        kind.container_class(),
        data.class_name.as_deref().unwrap_or_default()
    );
    let body_class = if data.show_icon { "ml-3" } else { "" };
    let message_class = if data.title.is_some() {
        format!("mt-2 text-sm {}", kind.message_class())
    } else {
        format!("text-sm {}", kind.message_class())
    };

    rsx! {
        div {
            class: "{container_class}",
            id: if data.dismissible { "dismissible-alert" },
            "role": "alert",
            div { class: "flex",
                if data.show_icon {
                    div { class: "flex-shrink-0",
                        svg {
                            class: "h-5 w-5 {kind.icon_class()}",
                            "viewBox": "0 0 20 20",
                            "fill": "currentColor",
                            path { "fill-rule": "evenodd", "d": "{kind.icon_path()}", "clip-rule": "evenodd" }
                        }
                    }
                }
                div { class: "{body_class}",
                    if let Some(title) = &data.title {
                        h3 { class: "text-sm font-medium {kind.title_class()}", "{title}" }
                    }
                    div { class: "{message_class}",
                        p { "{data.message}" }
                    }
                }
                if data.dismissible {
                    div { class: "ml-auto pl-3",
                        div { class: "-mx-1.5 -my-1.5",
                            button {
                                r#type: "button",
                                class: "inline-flex rounded-md p-1.5 {kind.icon_class()} hover:bg-black/5 focus:outline-none",
                                "onclick": "this.closest('[role=alert]').remove()",
                                span { class: "sr-only", "Dismiss" }
                                svg {
                                    class: "h-5 w-5",
                                    "viewBox": "0 0 20 20",
                                    "fill": "currentColor",
                                    path {
                                        "fill-rule": "evenodd",
                                        "d": "M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z",
                                        "clip-rule": "evenodd",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
