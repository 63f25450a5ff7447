use dioxus::prelude::*;

use crate::Hero;

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {
            title: "Logoped",
            subtitle: "Speech and language therapy",
        }
        section { id: "services", class: "page page-home",
            h2 { "Services" }
            p { "Assessment and therapy for children and adults." }
        }
        section { id: "contact", class: "page page-contact",
            h2 { "Contact" }
            p { "Get in touch to book a first consultation." }
        }
    }
}
