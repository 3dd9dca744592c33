use dioxus::{logger::tracing::warn, prelude::*};

pub mod app_settings;
pub mod color;
pub mod effects;
pub mod filter;
pub mod storage;
pub mod theme;
pub mod toast;
mod ui;

pub use app_settings::AppSettings;

use ui::home::Home;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let settings = use_resource(|| async {
        match storage::load_settings().await {
            Ok(s) => s,
            Err(e) => {
                warn!("Could not load settings: {e:?}");
                AppSettings::default()
            }
        }
    });
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if let Some(settings) = settings() {
            Shell { settings }
        } else {
            "Loading..."
        }
    }
}

/// Makes the loaded settings available to every route.
#[component]
fn Shell(settings: AppSettings) -> Element {
    use_context_provider(move || settings);
    rsx! {
        Router::<Route> {}
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Shared layout component.
#[component]
fn Layout() -> Element {
    rsx! {
        Outlet::<Route> {}
    }
}

/// Path the user asked for, rebuilt from the catch-all route segments.
fn requested_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let palette = theme::Palette::default();
    let bar = format!(
        "background-color: {}; color: {};",
        palette.primary, palette.on_primary
    );
    let path = requested_path(&segments);
    rsx! {
        div { class: "screen",
            div { class: "app-bar", style: "{bar}",
                span { class: "app-title", "Not found" }
            }
            div { class: "content",
                p { "Could not find {path}." }
                div { class: "submit", style: "{bar}",
                    Link { to: Route::Home {}, "Go To Home" }
                }
            }
        }
    }
}
