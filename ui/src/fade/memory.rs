//! In-process page: elements tagged with classes, settable metrics and a
//! signal bus. Backs the tests and non-wasm builds.
//!
//! Only simple class selectors (`.name`) are understood.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use super::error::{FadeError, Result};
use super::page::{
    ElementLocator, MarkerElement, PageSignal, SignalHandler, SignalSource, Subscription, Viewport,
};

#[derive(Clone)]
pub struct MemoryElement {
    inner: Rc<ElementData>,
}

struct ElementData {
    height: Cell<f64>,
    classes: RefCell<BTreeSet<String>>,
}

impl MemoryElement {
    fn new(classes: &[&str], height: f64) -> Self {
        Self {
            inner: Rc::new(ElementData {
                height: Cell::new(height),
                classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
            }),
        }
    }

    pub fn set_height(&self, height: f64) {
        self.inner.height.set(height);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.classes.borrow().contains(class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.inner.classes.borrow().iter().cloned().collect()
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("height", &self.inner.height.get())
            .field("classes", &self.inner.classes.borrow())
            .finish()
    }
}

impl MarkerElement for MemoryElement {
    fn client_height(&self) -> f64 {
        self.inner.height.get()
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.inner.classes.borrow_mut().insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.inner.classes.borrow_mut().remove(class);
        Ok(())
    }
}

struct Listener {
    id: u64,
    signal: PageSignal,
    handler: Rc<RefCell<SignalHandler>>,
}

pub struct MemoryPage {
    elements: RefCell<Vec<MemoryElement>>,
    inner_height: Cell<f64>,
    scroll_y: Cell<f64>,
    metrics_available: Cell<bool>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    next_listener: Cell<u64>,
}

impl MemoryPage {
    pub fn new(inner_height: f64) -> Self {
        Self {
            elements: RefCell::new(Vec::new()),
            inner_height: Cell::new(inner_height),
            scroll_y: Cell::new(0.0),
            metrics_available: Cell::new(true),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener: Cell::new(0),
        }
    }

    /// Append an element at the end of the document.
    pub fn insert(&self, classes: &[&str], height: f64) -> MemoryElement {
        let element = MemoryElement::new(classes, height);
        self.elements.borrow_mut().push(element.clone());
        element
    }

    pub fn remove(&self, element: &MemoryElement) {
        self.elements.borrow_mut().retain(|e| e != element);
    }

    /// Move the scroll offset without dispatching anything.
    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.scroll_y.set(scroll_y);
    }

    /// While unavailable, `inner_height` and `scroll_y` return errors.
    pub fn set_metrics_available(&self, available: bool) {
        self.metrics_available.set(available);
    }

    fn metric(&self, metric: &'static str, value: f64) -> Result<f64> {
        if self.metrics_available.get() {
            Ok(value)
        } else {
            Err(FadeError::Metric {
                metric,
                reason: "metrics unavailable".into(),
            })
        }
    }

    pub fn scroll_to(&self, scroll_y: f64) {
        self.set_scroll_y(scroll_y);
        self.emit(PageSignal::Scroll);
    }

    pub fn resize(&self, inner_height: f64) {
        self.inner_height.set(inner_height);
        self.emit(PageSignal::Resize);
    }

    /// Dispatch `signal` to every current subscriber, in subscription order.
    pub fn emit(&self, signal: PageSignal) {
        let handlers: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.signal == signal)
            .map(|l| l.handler.clone())
            .collect();
        for handler in handlers {
            // A handler re-entering its own signal is skipped.
            if let Ok(mut handler) = handler.try_borrow_mut() {
                (*handler)();
            }
        }
    }

    pub fn listener_count(&self, signal: PageSignal) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.signal == signal)
            .count()
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new(900.0)
    }
}

fn class_name(selector: &str) -> Result<&str> {
    let invalid = |reason: &str| FadeError::Selector {
        selector: selector.to_string(),
        reason: reason.to_string(),
    };
    let name = selector
        .strip_prefix('.')
        .ok_or_else(|| invalid("only class selectors are supported"))?;
    if name.is_empty() {
        return Err(invalid("empty class name"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid("compound selectors are not supported"));
    }
    Ok(name)
}

impl ElementLocator for MemoryPage {
    type Element = MemoryElement;

    fn first(&self, selector: &str) -> Result<Option<MemoryElement>> {
        let class = class_name(selector)?;
        Ok(self
            .elements
            .borrow()
            .iter()
            .find(|e| e.has_class(class))
            .cloned())
    }
}

impl Viewport for MemoryPage {
    fn inner_height(&self) -> Result<f64> {
        self.metric("innerHeight", self.inner_height.get())
    }

    fn scroll_y(&self) -> Result<f64> {
        self.metric("scrollY", self.scroll_y.get())
    }
}

impl SignalSource for MemoryPage {
    fn subscribe(&self, signal: PageSignal, handler: SignalHandler) -> Result<Subscription> {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            signal,
            handler: Rc::new(RefCell::new(handler)),
        });

        let listeners = Rc::downgrade(&self.listeners);
        Ok(Subscription::new(signal, move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|l| l.id != id);
            }
        }))
    }
}
