use dioxus::prelude::*;

/// Full-width banner at the top of a page. Its height is the navbar fade
/// threshold, so there should be at most one per page.
#[component]
pub fn Hero(
    #[props(into)] title: String,
    #[props(into)] subtitle: String,
    children: Element,
) -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero__body",
                h1 { class: "hero__title", "{title}" }
                p { class: "hero__subtitle", "{subtitle}" }
                {children}
            }
        }
    }
}
