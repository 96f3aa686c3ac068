use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShield;
use dioxus_free_icons::Icon;
use shared_ui::{Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input};

use crate::auth::{use_auth, use_auth_service};
use crate::use_station;

/// Login page with email and password.
///
/// Any credentials are accepted. The submit button stays disabled while a
/// sign-in is in flight, and the view router takes over once it completes.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let service = use_auth_service();
    let station = use_station();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let loading = auth.is_login_in_flight();
    let error_msg = auth.error_message();

    let handle_login = move |evt: FormEvent| {
        let service = service.clone();
        async move {
            evt.prevent_default();
            service.sign_in(auth, email(), password()).await;
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-brand",
                div { class: "auth-brand-icon",
                    Icon::<LdShield> { icon: LdShield, width: 28, height: 28 }
                }
                h1 { class: "auth-brand-name", "{station.dashboard.brand_name}" }
                p { class: "auth-brand-subtitle", "{station.dashboard.subtitle}" }
            }

            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access your account" }
                }

                CardContent {
                    if let Some(err) = error_msg {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                label: "Email",
                                input_type: "email",
                                id: "email",
                                autocomplete: "username",
                                placeholder: "officer@station.gov",
                                required: true,
                                disabled: loading,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Password",
                                input_type: "password",
                                id: "password",
                                autocomplete: "current-password",
                                placeholder: "Enter your password",
                                required: true,
                                disabled: loading,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        Button {
                            class: "auth-submit",
                            button_type: "submit",
                            disabled: loading,
                            if loading { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-hint",
                        "Demo access: an email containing \"station\" or \"master\" opens the station dashboard. Any other email opens the field officer app."
                    }
                }
            }
        }
    }
}
