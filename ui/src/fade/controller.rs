//! `NavbarFade`: keeps the navbar's transparent/opaque class in step with the
//! scroll position relative to the hero banner.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use super::config::FadeConfig;
use super::error::Result;
use super::page::{MarkerElement, PageHost, PageSignal, SignalHandler, Subscription};
use super::state::{NavbarState, ViewportState};

/// Controller handle. Clones share the same state and subscriptions.
pub struct NavbarFade<H: PageHost + 'static> {
    inner: Rc<RefCell<Inner<H>>>,
}

struct Inner<H: PageHost> {
    host: Rc<H>,
    config: FadeConfig,
    measurements: Option<ViewportState<H::Element>>,
    applied: Option<NavbarState>,
    subscriptions: Vec<Subscription>,
}

impl<H: PageHost + 'static> Clone for NavbarFade<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<H: PageHost + 'static> NavbarFade<H> {
    pub fn new(host: Rc<H>, config: FadeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                host,
                config,
                measurements: None,
                applied: None,
                subscriptions: Vec::new(),
            })),
        })
    }

    /// Measure the page, (re)subscribe to scroll, resize and load, apply
    /// the current state.
    ///
    /// Safe to call repeatedly: there is always exactly one listener per
    /// signal. If measuring or subscribing fails, the previous listeners and
    /// measurements stay in place.
    pub fn init(&self) -> Result<()> {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();

        let measurements = ViewportState::capture(&*inner.host, &inner.config)?;
        debug!(
            inner_height = measurements.inner_height,
            scroll_y = measurements.scroll_y,
            navbar_height = measurements.navbar_height,
            hero_height = measurements.hero_height,
            fixed_top = measurements.includes_fixed_offset,
            has_navbar = measurements.navbar.is_some(),
            has_hero = measurements.hero.is_some(),
            "navbar fade measured page"
        );

        let host = inner.host.clone();
        let scroll = host.subscribe(
            PageSignal::Scroll,
            listener(weak.clone(), PageSignal::Scroll, |inner| {
                inner.check_position();
            }),
        )?;
        let resize = host.subscribe(
            PageSignal::Resize,
            listener(weak.clone(), PageSignal::Resize, |inner| {
                inner.remeasure();
            }),
        )?;
        // Stylesheets and images can change the hero height after mount.
        let load = host.subscribe(
            PageSignal::Load,
            listener(weak, PageSignal::Load, |inner| {
                inner.remeasure();
            }),
        )?;

        let released = std::mem::replace(&mut inner.subscriptions, vec![scroll, resize, load]);
        if !released.is_empty() {
            debug!(count = released.len(), "released previous navbar fade listeners");
        }
        drop(released);
        inner.measurements = Some(measurements);

        inner.check_position();
        Ok(())
    }

    /// Evaluate the live scroll offset against the last measurements and
    /// apply the result. Returns the applied state, or `None` when nothing
    /// was applied (no navbar, not initialised, or a page error).
    pub fn check_position(&self) -> Option<NavbarState> {
        self.inner.borrow_mut().check_position()
    }

    /// Replace the measurements with a fresh capture, then re-evaluate.
    pub fn handle_resize(&self) -> Option<NavbarState> {
        self.inner.borrow_mut().remeasure()
    }

    /// Drop every listener. The navbar keeps whatever class it has.
    pub fn detach(&self) {
        let released = std::mem::take(&mut self.inner.borrow_mut().subscriptions);
        drop(released);
    }

    pub fn is_attached(&self) -> bool {
        !self.inner.borrow().subscriptions.is_empty()
    }

    /// Last state written to the navbar.
    pub fn state(&self) -> Option<NavbarState> {
        self.inner.borrow().applied
    }

    pub fn measurements(&self) -> Option<ViewportState<H::Element>> {
        self.inner.borrow().measurements.clone()
    }

    pub fn config(&self) -> FadeConfig {
        self.inner.borrow().config.clone()
    }
}

fn listener<H: PageHost + 'static>(
    weak: Weak<RefCell<Inner<H>>>,
    signal: PageSignal,
    action: fn(&mut Inner<H>),
) -> SignalHandler {
    Box::new(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let borrowed = inner.try_borrow_mut();
        match borrowed {
            Ok(mut inner) => action(&mut inner),
            Err(_) => warn!(%signal, "navbar fade busy; dropping event"),
        };
    })
}

impl<H: PageHost> Inner<H> {
    fn check_position(&mut self) -> Option<NavbarState> {
        let measurements = self.measurements.as_ref()?;
        let scroll_y = match self.host.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                warn!(%err, "could not read scroll offset");
                return None;
            }
        };
        let state = measurements.evaluate(scroll_y);

        let Some(navbar) = measurements.navbar.as_ref() else {
            trace!(?state, "no navbar element; nothing to update");
            return None;
        };
        if let Err(err) = apply(navbar, state, &self.config) {
            warn!(%err, ?state, "failed to update navbar classes");
            return None;
        }

        if self.applied != Some(state) {
            debug!(?state, scroll_y, threshold = ?measurements.threshold(), "navbar state changed");
        }
        self.applied = Some(state);
        Some(state)
    }

    fn remeasure(&mut self) -> Option<NavbarState> {
        match ViewportState::capture(&*self.host, &self.config) {
            Ok(measurements) => {
                trace!(
                    navbar_height = measurements.navbar_height,
                    hero_height = measurements.hero_height,
                    "navbar fade re-measured page"
                );
                self.measurements = Some(measurements);
            }
            Err(err) => warn!(%err, "re-measure failed; keeping previous layout"),
        }
        self.check_position()
    }
}

fn apply<E: MarkerElement>(navbar: &E, state: NavbarState, config: &FadeConfig) -> Result<()> {
    navbar.add_class(state.css_class(config))?;
    navbar.remove_class(state.opposite().css_class(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fade::memory::{MemoryElement, MemoryPage};
    use crate::fade::FadeError;

    fn site(fixed: bool) -> (Rc<MemoryPage>, MemoryElement, MemoryElement) {
        let page = Rc::new(MemoryPage::default());
        let navbar = page.insert(&["navbar"], 80.0);
        let hero = page.insert(&["hero"], 500.0);
        if fixed {
            page.insert(&["has-navbar-fixed-top"], 2000.0);
        }
        (page, navbar, hero)
    }

    fn controller(page: &Rc<MemoryPage>) -> NavbarFade<MemoryPage> {
        NavbarFade::new(page.clone(), FadeConfig::default()).unwrap()
    }

    #[test]
    fn init_applies_state_immediately() {
        let (page, navbar, _) = site(false);
        let fade = controller(&page);
        assert_eq!(fade.state(), None);

        fade.init().unwrap();
        assert_eq!(fade.state(), Some(NavbarState::Transparent));
        assert!(navbar.has_class("navbar-transparent"));
        assert!(!navbar.has_class("navbar-opaque"));
    }

    #[test]
    fn scroll_events_toggle_classes() {
        let (page, navbar, _) = site(false);
        let fade = controller(&page);
        fade.init().unwrap();

        page.scroll_to(600.0);
        assert_eq!(fade.state(), Some(NavbarState::Opaque));
        assert!(navbar.has_class("navbar-opaque"));
        assert!(!navbar.has_class("navbar-transparent"));

        page.scroll_to(10.0);
        assert_eq!(fade.state(), Some(NavbarState::Transparent));
        assert!(!navbar.has_class("navbar-opaque"));
    }

    #[test]
    fn repeated_init_keeps_one_listener_per_signal() {
        let (page, _, _) = site(false);
        let fade = controller(&page);
        for _ in 0..3 {
            fade.init().unwrap();
        }
        assert_eq!(page.listener_count(PageSignal::Scroll), 1);
        assert_eq!(page.listener_count(PageSignal::Resize), 1);
        assert_eq!(page.listener_count(PageSignal::Load), 1);
    }

    #[test]
    fn failed_reinit_keeps_previous_listeners() {
        let (page, navbar, _) = site(false);
        let fade = controller(&page);
        fade.init().unwrap();

        page.set_metrics_available(false);
        assert!(matches!(fade.init(), Err(FadeError::Metric { .. })));
        assert!(fade.is_attached());
        assert_eq!(page.listener_count(PageSignal::Scroll), 1);
        assert_eq!(page.listener_count(PageSignal::Resize), 1);
        assert_eq!(fade.measurements().unwrap().hero_height, 500.0);

        page.set_metrics_available(true);
        page.scroll_to(700.0);
        assert_eq!(fade.state(), Some(NavbarState::Opaque));
        assert!(navbar.has_class("navbar-opaque"));
    }

    #[test]
    fn failed_remeasure_keeps_previous_layout() {
        let (page, _, hero) = site(false);
        let fade = controller(&page);
        fade.init().unwrap();

        hero.set_height(50.0);
        page.set_metrics_available(false);
        page.resize(600.0);
        assert_eq!(fade.measurements().unwrap().hero_height, 500.0);
        assert_eq!(fade.state(), Some(NavbarState::Transparent));
    }

    #[test]
    fn load_signal_remeasures() {
        let (page, _, hero) = site(false);
        let fade = controller(&page);
        fade.init().unwrap();

        hero.set_height(40.0);
        page.set_scroll_y(200.0);
        page.emit(PageSignal::Load);
        assert_eq!(fade.measurements().unwrap().hero_height, 40.0);
        assert_eq!(fade.state(), Some(NavbarState::Opaque));
    }

    #[test]
    fn scroll_does_not_remeasure() {
        let (page, _, hero) = site(false);
        let fade = controller(&page);
        fade.init().unwrap();

        hero.set_height(100.0);
        page.scroll_to(300.0);
        assert_eq!(fade.state(), Some(NavbarState::Transparent));

        page.resize(800.0);
        assert_eq!(fade.state(), Some(NavbarState::Opaque));
        assert_eq!(fade.measurements().unwrap().hero_height, 100.0);
    }

    #[test]
    fn detach_removes_listeners() {
        let (page, _, _) = site(false);
        let fade = controller(&page);
        fade.init().unwrap();
        assert!(fade.is_attached());

        fade.detach();
        assert!(!fade.is_attached());
        assert_eq!(page.listener_count(PageSignal::Scroll), 0);
        page.scroll_to(900.0);
        assert_eq!(fade.state(), Some(NavbarState::Transparent));
    }

    #[test]
    fn dropped_controller_releases_listeners() {
        let (page, _, _) = site(false);
        {
            let fade = controller(&page);
            fade.init().unwrap();
        }
        assert_eq!(page.listener_count(PageSignal::Scroll), 0);
        page.scroll_to(900.0);
    }

    #[test]
    fn check_before_init_is_noop() {
        let (page, navbar, _) = site(false);
        let fade = controller(&page);
        assert_eq!(fade.check_position(), None);
        assert!(navbar.classes().iter().all(|c| c == "navbar"));
    }

    #[test]
    fn bad_selector_fails_init() {
        let page = Rc::new(MemoryPage::default());
        let config = FadeConfig {
            hero_selector: "section > .hero".into(),
            ..FadeConfig::default()
        };
        let fade = NavbarFade::new(page.clone(), config).unwrap();
        assert!(fade.init().is_err());
        assert!(!fade.is_attached());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let page = Rc::new(MemoryPage::default());
        let config = FadeConfig {
            opaque_class: "navbar-transparent".into(),
            ..FadeConfig::default()
        };
        assert!(NavbarFade::new(page, config).is_err());
    }
}
