//! Shared UI crate for the Logoped site: the navbar fade behavior and the
//! components that carry its markers.

pub mod fade;
pub mod views;

mod hero;
pub use hero::Hero;

pub mod components {
    // Site header carrying the `navbar` marker (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::FixedTopMarker;
    pub use site_navbar::SiteNavbar;
}
