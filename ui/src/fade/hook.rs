//! Dioxus glue: run a `NavbarFade` for the lifetime of a component.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::config::FadeConfig;

#[cfg(target_arch = "wasm32")]
type Slot = Rc<RefCell<Option<super::NavbarFade<super::browser::BrowserPage>>>>;
#[cfg(not(target_arch = "wasm32"))]
type Slot = Rc<RefCell<Option<super::NavbarFade<super::memory::MemoryPage>>>>;

/// Attach the navbar fade once the calling component has rendered.
///
/// Call it from the layout that renders both the navbar and the hero so the
/// first measurement sees them. Errors are logged; the page keeps working
/// with whatever classes the markup shipped with.
pub fn use_navbar_fade(config: FadeConfig) {
    let slot: Slot = use_hook(|| Rc::new(RefCell::new(None)));

    {
        let slot = slot.clone();
        use_effect(move || {
            if slot.borrow().is_some() {
                return;
            }
            *slot.borrow_mut() = start(config.clone());
        });
    }

    use_drop(move || {
        if let Some(fade) = slot.borrow_mut().take() {
            fade.detach();
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn start(config: FadeConfig) -> Option<super::NavbarFade<super::browser::BrowserPage>> {
    use super::browser::BrowserPage;
    use super::NavbarFade;

    let attach = || -> super::Result<NavbarFade<BrowserPage>> {
        let page = Rc::new(BrowserPage::new()?);
        let fade = NavbarFade::new(page, config)?;
        fade.init()?;
        Ok(fade)
    };
    match attach() {
        Ok(fade) => {
            tracing::info!(state = ?fade.state(), "navbar fade attached");
            Some(fade)
        }
        Err(err) => {
            tracing::error!(%err, "navbar fade could not attach");
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn start(config: FadeConfig) -> Option<super::NavbarFade<super::memory::MemoryPage>> {
    // No DOM to observe outside the browser.
    tracing::debug!(?config, "navbar fade disabled on this platform");
    None
}
