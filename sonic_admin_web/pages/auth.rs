use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::alert::{Alert, AlertData, AlertKind};
use crate::document::{SITE_NAME, auth_document, or_body};

const AUTH_INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/5 backdrop-blur-sm border border-white/10 rounded-xl text-white placeholder-gray-400 focus:outline-none focus:bg-white/10 focus:border-white/30 focus:ring-2 focus:ring-white/20 transition-all";
const AUTH_LABEL_CLASS: &str = "block text-sm font-medium text-gray-300 mb-2";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginPageData {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterPageData {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct AuthInput {
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    autocomplete: Option<&'static str>,
    min_length: Option<u32>,
}

impl AuthInput {
    fn new(id: &'static str, label: &'static str, kind: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            label,
            kind,
            placeholder,
            autocomplete: None,
            min_length: None,
        }
    }

    fn autocomplete(mut self, value: &'static str) -> Self {
        self.autocomplete = Some(value);
        self
    }
}

#[component]
fn AuthField(input: AuthInput) -> Element {
    let min_length = input.min_length.map(|n| n.to_string());

    rsx! {
        div {
            label { r#for: input.id, class: AUTH_LABEL_CLASS, "{input.label}" }
            input {
                id: input.id,
                name: input.id,
                r#type: input.kind,
                "autocomplete": input.autocomplete,
                required: true,
                "minlength": min_length,
                class: AUTH_INPUT_CLASS,
                placeholder: input.placeholder,
            }
        }
    }
}

/// Card chrome shared by the sign-in and sign-up screens.
#[derive(Debug, Clone, PartialEq)]
struct AuthCard {
    heading: &'static str,
    subheading: &'static str,
    header_gradient: &'static str,
    alerts: Vec<AlertData>,
}

fn auth_card(card: AuthCard, form: Element, footer: Element) -> Element {
    rsx! {
        div { class: "relative z-10 w-full flex items-center justify-center px-4 py-8",
            div { class: "w-full max-w-md",
                div { class: "text-center mb-8",
                    div { class: "w-16 h-16 mx-auto mb-4 rounded-xl bg-white/10 backdrop-blur-sm flex items-center justify-center" }
                    h1 { class: "text-2xl font-bold text-white mb-2", "{SITE_NAME}" }
                    p { class: "text-gray-300", "AI-Powered Content Management" }
                }
                div { class: "backdrop-blur-xl bg-white/10 rounded-3xl border border-white/20 shadow-2xl overflow-hidden",
                    div { class: "relative px-8 py-6 border-b border-white/10",
                        div { class: "absolute inset-0 bg-gradient-to-r {card.header_gradient}" }
                        div { class: "relative text-center",
                            h2 { class: "text-xl font-semibold text-white mb-2", "{card.heading}" }
                            p { class: "text-sm text-gray-300", "{card.subheading}" }
                        }
                    }
                    div { class: "p-8",
                        for alert in card.alerts.iter() {
                            div { class: "mb-6",
                                Alert { data: alert.clone() }
                            }
                        }
                        {form}
                        div { class: "mt-6 text-center", {footer} }
                        div { id: "form-response" }
                    }
                }
            }
        }
    }
}

/// Standalone sign-in screen.
pub fn render_login_page(data: &LoginPageData) -> String {
    tracing::debug!(has_error = data.error.is_some(), "Rendering login page");

    let alerts = data
        .error
        .iter()
        .map(|e| AlertData::new(AlertKind::Error, e.clone()))
        .chain(data.message.iter().map(|m| AlertData::new(AlertKind::Success, m.clone())))
        .collect();
    let card = AuthCard {
        heading: "Welcome Back",
        subheading: "Sign in to your account to continue",
        header_gradient: "from-blue-600/10 via-purple-600/10 to-pink-600/10",
        alerts,
    };
    let email = AuthInput::new("email", "Email Address", "email", "Enter your email").autocomplete("email");
    let password = AuthInput::new("password", "Password", "password", "Enter your password")
        .autocomplete("current-password");

    let form = rsx! {
        form {
            id: "login-form",
            "hx-post": "/auth/login/form",
            "hx-target": "#form-response",
            "hx-swap": "innerHTML",
            class: "space-y-6",
            AuthField { input: email }
            AuthField { input: password }
            button {
                r#type: "submit",
                class: "w-full px-4 py-3 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold rounded-xl hover:from-blue-700 hover:to-purple-700 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all",
                "Sign In"
            }
        }
    };
    let footer = rsx! {
        p { class: "text-gray-300",
            "Don't have an account? "
            a { href: "/auth/register", class: "text-blue-400 hover:text-blue-300 font-medium transition-colors", "Create one here" }
        }
    };

    let body = dioxus_ssr::render_element(auth_card(card, form, footer));
    or_body(auth_document("Login", &body), body)
}

/// Standalone account creation screen.
pub fn render_register_page(data: &RegisterPageData) -> String {
    tracing::debug!(has_error = data.error.is_some(), "Rendering register page");

    let card = AuthCard {
        heading: "Join Us Today",
        subheading: "Create your account and get started",
        header_gradient: "from-green-600/10 via-blue-600/10 to-purple-600/10",
        alerts: data
            .error
            .iter()
            .map(|e| AlertData::new(AlertKind::Error, e.clone()))
            .collect(),
    };
    let first_name = AuthInput::new("firstName", "First Name", "text", "First name");
    let last_name = AuthInput::new("lastName", "Last Name", "text", "Last name");
    let username = AuthInput::new("username", "Username", "text", "Choose a username");
    let email = AuthInput::new("email", "Email Address", "email", "Enter your email").autocomplete("email");
    let password = AuthInput {
        min_length: Some(8),
        ..AuthInput::new(
            "password",
            "Password",
            "password",
            "Create a password (min. 8 characters)",
        )
        .autocomplete("new-password")
    };

    let form = rsx! {
        form {
            id: "register-form",
            "hx-post": "/auth/register/form",
            "hx-target": "#form-response",
            "hx-swap": "innerHTML",
            class: "space-y-6",
            div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                AuthField { input: first_name }
                AuthField { input: last_name }
            }
            AuthField { input: username }
            AuthField { input: email }
            AuthField { input: password }
            button {
                r#type: "submit",
                class: "w-full px-4 py-3 bg-gradient-to-r from-green-600 to-blue-600 text-white font-semibold rounded-xl hover:from-green-700 hover:to-blue-700 focus:outline-none focus:ring-2 focus:ring-green-500 transition-all",
                "Create Account"
            }
        }
    };
    let footer = rsx! {
        p { class: "text-gray-300",
            "Already have an account? "
            a { href: "/auth/login", class: "text-green-400 hover:text-green-300 font-medium transition-colors", "Sign in here" }
        }
    };

    let body = dioxus_ssr::render_element(auth_card(card, form, footer));
    or_body(auth_document("Register", &body), body)
}
