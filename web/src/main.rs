use dioxus::prelude::*;

use ui::components::{FixedTopMarker, SiteNavbar};
use ui::fade::{use_navbar_fade, FadeConfig};
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
// Selector/class overrides for the navbar fade; edit and rebuild.
const NAVBAR_FADE_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/navbar-fade.json"
));

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn fade_config() -> FadeConfig {
    FadeConfig::from_json(NAVBAR_FADE_JSON).unwrap_or_else(|err| {
        tracing::warn!(%err, "using default navbar fade config");
        FadeConfig::default()
    })
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web layout: fixed-top navbar over the routed page, with the navbar fade
/// attached once both are mounted.
#[component]
fn WebShell() -> Element {
    let config = use_hook(fade_config);
    use_navbar_fade(config);

    rsx! {
        FixedTopMarker {
            SiteNavbar { brand: "Logoped",
                a { class: "navbar__link", href: "#services", "Services" }
                a { class: "navbar__link", href: "#contact", "Contact" }
            }
            Outlet::<Route> {}
        }
    }
}
