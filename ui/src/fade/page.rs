//! Capabilities the controller needs from a rendered page.
//!
//! The browser implementation lives in `browser.rs` (wasm only); `memory.rs`
//! provides an in-process page for tests and native builds.

use std::fmt;

use super::error::Result;

/// Page signals the controller listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSignal {
    Scroll,
    Resize,
    /// The page or one of its subresources (stylesheet, image) finished
    /// loading, so layout may have changed.
    Load,
}

impl PageSignal {
    /// DOM event name.
    pub fn event_name(self) -> &'static str {
        match self {
            PageSignal::Scroll => "scroll",
            PageSignal::Resize => "resize",
            PageSignal::Load => "load",
        }
    }
}

impl fmt::Display for PageSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// A handle to a rendered element.
pub trait MarkerElement: Clone {
    /// Rendered height in CSS pixels.
    fn client_height(&self) -> f64;
    fn add_class(&self, class: &str) -> Result<()>;
    fn remove_class(&self, class: &str) -> Result<()>;
}

/// Selector-based lookup over the page.
pub trait ElementLocator {
    type Element: MarkerElement;

    /// First match in document order, `None` if nothing matches.
    fn first(&self, selector: &str) -> Result<Option<Self::Element>>;

    fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.first(selector)?.is_some())
    }
}

/// Live window metrics.
pub trait Viewport {
    fn inner_height(&self) -> Result<f64>;
    fn scroll_y(&self) -> Result<f64>;
}

pub type SignalHandler = Box<dyn FnMut()>;

/// Registers handlers for [`PageSignal`]s.
pub trait SignalSource {
    fn subscribe(&self, signal: PageSignal, handler: SignalHandler) -> Result<Subscription>;
}

/// Everything the controller is generic over.
pub trait PageHost: ElementLocator + Viewport + SignalSource {}

impl<T: ElementLocator + Viewport + SignalSource> PageHost for T {}

/// A live listener registration. Dropping it removes the listener.
#[must_use = "dropping a Subscription removes the listener immediately"]
pub struct Subscription {
    signal: PageSignal,
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(signal: PageSignal, cancel: impl FnOnce() + 'static) -> Self {
        Self {
            signal,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn signal(&self) -> PageSignal {
        self.signal
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("signal", &self.signal)
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn subscription_cancels_once() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let sub = Subscription::new(PageSignal::Scroll, move || counter.set(counter.get() + 1));
        assert_eq!(sub.signal(), PageSignal::Scroll);
        sub.unsubscribe();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn dropping_subscription_cancels() {
        let hits = Rc::new(Cell::new(0));
        {
            let counter = hits.clone();
            let _sub =
                Subscription::new(PageSignal::Resize, move || counter.set(counter.get() + 1));
        }
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn signal_names_match_dom_events() {
        assert_eq!(PageSignal::Scroll.to_string(), "scroll");
        assert_eq!(PageSignal::Resize.event_name(), "resize");
        assert_eq!(PageSignal::Load.event_name(), "load");
    }
}
