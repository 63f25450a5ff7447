//! The navbar fade only toggles classes; the stylesheet has to define them.
//!
//! If the class names change in `FadeConfig::default()`, update
//! `ui/assets/styling/navbar.css` and this test together.

use ui::fade::FadeConfig;

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

#[test]
fn navbar_css_is_not_empty() {
    assert!(
        !NAVBAR_CSS.trim().is_empty(),
        "navbar.css appears to be empty"
    );
}

#[test]
fn navbar_css_defines_fade_state_classes() {
    let config = FadeConfig::default();
    for class in [&config.transparent_class, &config.opaque_class] {
        let selector = format!(".{class} {{");
        assert!(
            NAVBAR_CSS.contains(&selector),
            "Expected selector `{selector}` missing from navbar.css"
        );
    }
    assert!(NAVBAR_CSS.contains(".navbar {"));
}
