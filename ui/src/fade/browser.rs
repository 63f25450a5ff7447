//! `web_sys` page host.

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, Window};

use super::error::{FadeError, Result};
use super::page::{
    ElementLocator, MarkerElement, PageSignal, SignalHandler, SignalSource, Subscription, Viewport,
};

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[derive(Clone, Debug, PartialEq)]
pub struct BrowserElement(Element);

impl MarkerElement for BrowserElement {
    fn client_height(&self) -> f64 {
        f64::from(self.0.client_height())
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.0
            .class_list()
            .add_1(class)
            .map_err(|err| FadeError::ClassList {
                class: class.to_string(),
                reason: js_reason(&err),
            })
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.0
            .class_list()
            .remove_1(class)
            .map_err(|err| FadeError::ClassList {
                class: class.to_string(),
                reason: js_reason(&err),
            })
    }
}

/// The live document of the current window.
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(FadeError::NoWindow)?;
        let document = window.document().ok_or(FadeError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl ElementLocator for BrowserPage {
    type Element = BrowserElement;

    fn first(&self, selector: &str) -> Result<Option<BrowserElement>> {
        self.document
            .query_selector(selector)
            .map(|found| found.map(BrowserElement))
            .map_err(|err| FadeError::Selector {
                selector: selector.to_string(),
                reason: js_reason(&err),
            })
    }
}

impl Viewport for BrowserPage {
    fn inner_height(&self) -> Result<f64> {
        let value = self
            .window
            .inner_height()
            .map_err(|err| FadeError::Metric {
                metric: "innerHeight",
                reason: js_reason(&err),
            })?;
        value.as_f64().ok_or_else(|| FadeError::Metric {
            metric: "innerHeight",
            reason: "not a number".into(),
        })
    }

    fn scroll_y(&self) -> Result<f64> {
        self.window.scroll_y().map_err(|err| FadeError::Metric {
            metric: "scrollY",
            reason: js_reason(&err),
        })
    }
}

impl BrowserPage {
    /// Scroll and resize fire on the window. Element `load` events never
    /// reach the window, so those are caught on the document during capture.
    fn signal_target(&self, signal: PageSignal) -> (EventTarget, bool) {
        match signal {
            PageSignal::Scroll | PageSignal::Resize => (self.window.clone().into(), false),
            PageSignal::Load => (self.document.clone().into(), true),
        }
    }
}

impl SignalSource for BrowserPage {
    fn subscribe(&self, signal: PageSignal, handler: SignalHandler) -> Result<Subscription> {
        let event = signal.event_name();
        let (target, capture) = self.signal_target(signal);
        let closure = Closure::wrap(handler);
        target
            .add_event_listener_with_callback_and_bool(
                event,
                closure.as_ref().unchecked_ref(),
                capture,
            )
            .map_err(|err| FadeError::Listener {
                signal: event,
                reason: js_reason(&err),
            })?;

        Ok(Subscription::new(signal, move || {
            let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
            if let Err(err) =
                target.remove_event_listener_with_callback_and_bool(event, callback, capture)
            {
                warn!(%signal, reason = %js_reason(&err), "failed to remove listener");
            }
            // The JS side no longer references the callback past this point.
            drop(closure);
        }))
    }
}
