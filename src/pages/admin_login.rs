//! Admin login against the configured demo credentials.

use dioxus::prelude::*;
use pensionguardian_core::{validate_admin_form, AdminFormErrors, Notification};
use pensionguardian_ui::{Button, ButtonVariant, FormInput, IconButton};

use crate::app::Route;
use crate::components::AuthLayout;
use crate::context::{use_config, use_toaster};

#[component]
pub fn AdminLogin() -> Element {
    let config = use_config();
    let navigator = use_navigator();
    let mut toaster = use_toaster();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut errors = use_signal(AdminFormErrors::default);
    let mut loading = use_signal(|| false);

    let delay = config.timings.network_delay();
    let admin = config.admin.clone();
    let demo_hint = format!(
        "For demo, use: username: {}, password: {}",
        admin.username, admin.password
    );

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }

        let (user, pass) = (username(), password());
        let field_errors = validate_admin_form(&user, &pass);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(AdminFormErrors::default());
        loading.set(true);

        let admin = admin.clone();
        spawn(async move {
            tokio::time::sleep(delay).await;
            loading.set(false);
            match admin.verify(&user, &pass) {
                Ok(()) => {
                    tracing::info!(username = %user, "admin signed in");
                    toaster.push(Notification::admin_welcome());
                    navigator.push(Route::Admin {});
                }
                Err(e) => errors.set(AdminFormErrors {
                    username: None,
                    password: Some(e.to_string()),
                }),
            }
        });
    };

    let field_errors = errors();
    let password_type = if show_password() { "text" } else { "password" };
    let (reveal_icon, reveal_label) = if show_password() {
        ("\u{1F648}", "Hide password")
    } else {
        ("\u{1F441}", "Show password")
    };

    rsx! {
        AuthLayout {
            title: "Admin Login",
            subtitle: "Login to the pension management system",

            div { class: "admin-badge",
                span { class: "admin-badge-icon", "\u{1F6E1}" }
            }

            form { class: "form-stack", onsubmit: on_submit,
                FormInput {
                    id: "username",
                    label: "Username",
                    placeholder: "Enter your username",
                    value: username(),
                    oninput: move |v| username.set(v),
                    error: field_errors.username,
                }
                FormInput {
                    id: "password",
                    label: "Password",
                    placeholder: "Enter your password",
                    input_type: password_type.to_string(),
                    value: password(),
                    oninput: move |v| password.set(v),
                    error: field_errors.password,
                    trailing: rsx! {
                        IconButton {
                            aria_label: reveal_label.to_string(),
                            onclick: move |_| show_password.toggle(),
                            "{reveal_icon}"
                        }
                    },
                }

                div { class: "form-links align-right",
                    Button { variant: ButtonVariant::Link, class: "muted", "Forgot Password?" }
                }

                Button {
                    button_type: "submit",
                    full_width: true,
                    disabled: loading(),
                    if loading() { "Authenticating..." } else { "Login" }
                }
            }

            p { class: "demo-hint", "{demo_hint}" }
        }
    }
}
