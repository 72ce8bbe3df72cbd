//! Pensioner login - Aadhaar number, then a one-time password.

use dioxus::prelude::*;
use pensionguardian_core::{auth::OTP_LEN, Notification, PensionerLogin, AADHAAR_LEN};
use pensionguardian_ui::{Button, ButtonVariant, FormInput};

use crate::app::Route;
use crate::components::AuthLayout;
use crate::context::{use_config, use_toaster};

#[component]
pub fn Login() -> Element {
    let config = use_config();
    let navigator = use_navigator();
    let mut toaster = use_toaster();

    let mut login = use_signal(PensionerLogin::new);
    let mut aadhaar = use_signal(String::new);
    let mut otp = use_signal(String::new);
    let mut field_error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let delay = config.timings.network_delay();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }

        if login.read().otp_sent() {
            let checked = login.read().verify_otp(&otp.read());
            match checked {
                Ok(_) => {
                    field_error.set(None);
                    loading.set(true);
                    spawn(async move {
                        tokio::time::sleep(delay).await;
                        loading.set(false);
                        tracing::info!("OTP accepted");
                        toaster.push(Notification::authenticated());
                        navigator.push(Route::FaceVerification {});
                    });
                }
                Err(e) => field_error.set(Some(e.to_string())),
            }
        } else {
            let checked = login.read().request_otp(&aadhaar.read());
            match checked {
                Ok(number) => {
                    field_error.set(None);
                    loading.set(true);
                    spawn(async move {
                        tokio::time::sleep(delay).await;
                        loading.set(false);
                        toaster.push(Notification::otp_sent(&number));
                        login.write().mark_otp_sent(number);
                    });
                }
                Err(e) => field_error.set(Some(e.to_string())),
            }
        }
    };

    let change_aadhaar = move |_| {
        login.write().change_aadhaar();
        otp.set(String::new());
        field_error.set(None);
    };

    let resend = move |_| toaster.push(Notification::otp_resent());

    let state = login.read().clone();
    let submit_label = if loading() {
        "Processing..."
    } else {
        state.submit_label()
    };

    rsx! {
        AuthLayout {
            title: state.title().to_string(),
            subtitle: state.subtitle().to_string(),

            form { class: "form-stack", onsubmit: on_submit,
                if state.otp_sent() {
                    FormInput {
                        id: "otp",
                        label: "One-Time Password (OTP)",
                        placeholder: "Enter 6-digit OTP",
                        value: otp(),
                        oninput: move |v| {
                            otp.set(v);
                            field_error.set(None);
                        },
                        max_length: OTP_LEN,
                        error: field_error(),
                        class: "input-lg tracking-wide",
                    }
                } else {
                    FormInput {
                        id: "aadhaar",
                        label: "Aadhaar Number",
                        placeholder: "Enter 12-digit Aadhaar number",
                        value: aadhaar(),
                        oninput: move |v| {
                            aadhaar.set(v);
                            field_error.set(None);
                        },
                        max_length: AADHAAR_LEN,
                        error: field_error(),
                        class: "input-lg tracking-wide",
                    }
                }

                Button {
                    button_type: "submit",
                    full_width: true,
                    disabled: loading(),
                    "{submit_label}"
                }

                if state.otp_sent() {
                    div { class: "form-links",
                        Button { variant: ButtonVariant::Link, onclick: change_aadhaar,
                            "Change Aadhaar number"
                        }
                        Button { variant: ButtonVariant::Link, onclick: resend,
                            "Resend OTP"
                        }
                    }
                }
            }
        }
    }
}
