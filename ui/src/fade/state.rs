//! Measurements and the transparent/opaque decision rule.

use super::config::FadeConfig;
use super::error::Result;
use super::page::{ElementLocator, MarkerElement, Viewport};

/// Visual state of the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavbarState {
    Transparent,
    Opaque,
}

impl NavbarState {
    /// Class this state adds to the navbar.
    pub fn css_class(self, config: &FadeConfig) -> &str {
        match self {
            NavbarState::Transparent => &config.transparent_class,
            NavbarState::Opaque => &config.opaque_class,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            NavbarState::Transparent => NavbarState::Opaque,
            NavbarState::Opaque => NavbarState::Transparent,
        }
    }
}

/// Page layout as measured by the last `init` or resize.
///
/// Never refreshed between scroll events; a resize builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState<E> {
    pub inner_height: f64,
    /// Scroll offset at measurement time (the decision reads the live value).
    pub scroll_y: f64,
    pub navbar: Option<E>,
    pub navbar_height: f64,
    pub includes_fixed_offset: bool,
    pub hero: Option<E>,
    pub hero_height: f64,
}

impl<E: MarkerElement> ViewportState<E> {
    pub fn capture<H>(host: &H, config: &FadeConfig) -> Result<Self>
    where
        H: ElementLocator<Element = E> + Viewport,
    {
        let navbar = host.first(&config.navbar_selector)?;
        let hero = host.first(&config.hero_selector)?;
        let includes_fixed_offset = host.exists(&config.fixed_top_selector)?;

        Ok(Self {
            inner_height: host.inner_height()?,
            scroll_y: host.scroll_y()?,
            navbar_height: navbar.as_ref().map_or(0.0, MarkerElement::client_height),
            hero_height: hero.as_ref().map_or(0.0, MarkerElement::client_height),
            navbar,
            includes_fixed_offset,
            hero,
        })
    }
}

impl<E> ViewportState<E> {
    /// Scroll offset at which the navbar turns opaque; `None` without a hero.
    pub fn threshold(&self) -> Option<f64> {
        self.hero.as_ref()?;
        let fixed_offset = if self.includes_fixed_offset {
            self.navbar_height
        } else {
            0.0
        };
        Some(self.hero_height + fixed_offset)
    }

    pub fn evaluate(&self, scroll_y: f64) -> NavbarState {
        match self.threshold() {
            Some(threshold) if scroll_y < threshold => NavbarState::Transparent,
            _ => NavbarState::Opaque,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(hero: bool, fixed: bool) -> ViewportState<()> {
        ViewportState {
            inner_height: 900.0,
            scroll_y: 0.0,
            navbar: Some(()),
            navbar_height: 80.0,
            includes_fixed_offset: fixed,
            hero: hero.then_some(()),
            hero_height: if hero { 500.0 } else { 0.0 },
        }
    }

    #[test]
    fn above_hero_is_transparent() {
        assert_eq!(layout(true, false).evaluate(100.0), NavbarState::Transparent);
    }

    #[test]
    fn exactly_at_threshold_is_opaque() {
        assert_eq!(layout(true, false).evaluate(500.0), NavbarState::Opaque);
    }

    #[test]
    fn fixed_marker_extends_threshold_by_navbar_height() {
        let state = layout(true, true);
        assert_eq!(state.threshold(), Some(580.0));
        assert_eq!(state.evaluate(520.0), NavbarState::Transparent);
        assert_eq!(state.evaluate(580.0), NavbarState::Opaque);
    }

    #[test]
    fn no_hero_is_always_opaque() {
        let state = layout(false, true);
        assert_eq!(state.threshold(), None);
        assert_eq!(state.evaluate(0.0), NavbarState::Opaque);
        assert_eq!(state.evaluate(-10.0), NavbarState::Opaque);
    }

    #[test]
    fn state_classes_come_from_config() {
        let config = FadeConfig::default();
        assert_eq!(NavbarState::Transparent.css_class(&config), "navbar-transparent");
        assert_eq!(NavbarState::Opaque.css_class(&config), "navbar-opaque");
        assert_eq!(NavbarState::Opaque.opposite(), NavbarState::Transparent);
    }
}
