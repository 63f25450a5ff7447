//! Navbar fade: the navbar is transparent while the hero banner is on screen
//! and turns opaque once the page scrolls past it.
//!
//! Rule
//! ----
//! - no hero element: always opaque
//! - `scroll_y < hero_height + navbar_height * fixed_top`: transparent
//! - otherwise: opaque (the threshold itself is opaque)
//!
//! `fixed_top` is 1 when any element matches the fixed-top marker
//! (`.has-navbar-fixed-top` by default), 0 otherwise.
//!
//! Layout is measured on `init`, on every window resize and whenever the page
//! or a subresource (stylesheet, image) finishes loading; never on scroll.
//! A page without a navbar is valid; the controller simply has nothing to
//! update.
//!
//! Usage (inside a layout component)
//! ---------------------------------
//! ```ignore
//! ui::fade::use_navbar_fade(FadeConfig::default());
//! ```

mod config;
mod controller;
mod error;
mod hook;
pub mod memory;
mod page;
mod state;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use config::FadeConfig;
pub use controller::NavbarFade;
pub use error::{FadeError, Result};
pub use hook::use_navbar_fade;
pub use page::{
    ElementLocator, MarkerElement, PageHost, PageSignal, SignalHandler, SignalSource,
    Subscription, Viewport,
};
pub use state::{NavbarState, ViewportState};
