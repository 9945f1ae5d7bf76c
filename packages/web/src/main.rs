use dioxus::prelude::*;

use views::{Settings, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Users {},
        #[route("/settings")]
        Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Theme context: None = system, Some("dark"), Some("light")
    let mut theme: ui::ThemeSignal = use_context_provider(|| Signal::new(Option::<String>::None));
    use_effect(move || {
        ui::load_theme_from_storage(&mut theme);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::UsersProvider {
            Router::<Route> {}
        }
    }
}

/// App shell: top navbar with the routed view below.
#[component]
fn Shell() -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "userdesk" }
            div {
                class: "navbar-links",
                Link { to: Route::Users {}, "Users" }
                Link { to: Route::Settings {}, "Settings" }
            }
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
