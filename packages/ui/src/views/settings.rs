use dioxus::prelude::*;

use crate::theme::{set_theme, use_theme};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Settings: theme preference, plus demo-data controls on mock builds.
#[component]
pub fn SettingsView() -> Element {
    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "view-page view-page-narrow",
            h1 { class: "view-title", "Settings" }

            div {
                class: "view-section",
                h2 { class: "view-section-title", "Theme" }
                ThemeSelector {}
            }

            DemoDataSection {}
        }
    }
}

#[component]
fn ThemeSelector() -> Element {
    let mut theme = use_theme();

    let current = theme().unwrap_or_default();
    let is_system = current.is_empty();
    let is_light = current == "light";
    let is_dark = current == "dark";

    let card_class = |active: bool| {
        if active {
            "theme-card theme-card-active"
        } else {
            "theme-card"
        }
    };

    rsx! {
        div {
            class: "theme-cards",
            button {
                class: card_class(is_system),
                onclick: move |_| set_theme(&mut theme, None),
                "System"
            }
            button {
                class: card_class(is_light),
                onclick: move |_| set_theme(&mut theme, Some("light")),
                "Light"
            }
            button {
                class: card_class(is_dark),
                onclick: move |_| set_theme(&mut theme, Some("dark")),
                "Dark"
            }
        }
        p {
            class: "view-muted",
            "Choose how userdesk appears. System follows your OS preference."
        }
    }
}

#[cfg(not(feature = "live-api"))]
#[component]
fn DemoDataSection() -> Element {
    let users = crate::use_users();
    let mut status = use_signal(|| Option::<&'static str>::None);

    let handle_reset = move |_| {
        spawn(async move {
            status.set(None);
            match users.reset().await {
                Ok(()) => status.set(Some("success")),
                Err(_) => status.set(Some("error")),
            }
        });
    };

    rsx! {
        div {
            class: "view-section",
            h2 { class: "view-section-title", "Demo data" }
            p {
                class: "view-muted",
                "The user list is simulated locally. Resetting discards every \
                 change you have made and restores the built-in records."
            }
            div {
                class: "view-actions",
                button { class: "danger", onclick: handle_reset, "Reset demo data" }
                if let Some(s) = status() {
                    span {
                        class: if s == "success" { "status-ok" } else { "status-err" },
                        if s == "success" { "Reset" } else { "Error" }
                    }
                }
            }
        }
    }
}

/// The live service owns its data; there is nothing to reset.
#[cfg(feature = "live-api")]
#[component]
fn DemoDataSection() -> Element {
    rsx! {}
}
