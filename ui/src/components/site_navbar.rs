use dioxus::prelude::*;

// Navbar stylesheet; defines the two fade state classes.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Site header. Renders the element the navbar fade toggles, so it must keep
/// the `navbar` class (or whatever `FadeConfig::navbar_selector` points at).
///
/// Platforms pass their own `Link`s as children; `ui` does not know the
/// platform `Route` enum.
///
/// The markup ships with `navbar-opaque` so the header is readable before
/// the fade controller attaches (or if it never does).
#[component]
pub fn SiteNavbar(#[props(into)] brand: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar is-fixed-top navbar-opaque",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "{brand}" }
                }
                nav { class: "navbar__links", {children} }
            }
        }
    }
}

/// Page-wide marker telling the fade that the navbar overlaps the content,
/// which pushes the opaque threshold down by the navbar height.
#[component]
pub fn FixedTopMarker(children: Element) -> Element {
    rsx! {
        div { class: "has-navbar-fixed-top", {children} }
    }
}
