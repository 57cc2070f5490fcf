//! Owned handles over browser callbacks.
//!
//! Each handle registers its callback on construction and cancels, removes or
//! disconnects it on `Drop`, so a component's effect teardown is just dropping
//! whatever it holds.

use crate::effects::reveal::VisibilityOptions;
use crate::effects::throttle::{Throttle, ThrottleDecision};
use js_sys::{Array, Promise};
use std::{
    cell::{Cell, RefCell},
    ops::ControlFlow,
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    window, AddEventListenerOptions, Element, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

fn millis_arg(millis: u32) -> i32 {
    i32::try_from(millis).unwrap_or(i32::MAX)
}

pub struct Timeout {
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });

        let handle = window().and_then(|win| {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis_arg(millis),
            )
            .ok()
        });

        Self {
            handle,
            _callback: closure,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(handle), Some(win)) = (self.handle.take(), window()) {
            win.clear_timeout_with_handle(handle);
        }
    }
}

pub struct Interval {
    handle: Rc<Cell<Option<i32>>>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new<F>(millis: u32, mut callback: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + 'static,
    {
        let handle = Rc::new(Cell::new(None));
        let own_handle = Rc::clone(&handle);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if callback().is_break() {
                if let (Some(id), Some(win)) = (own_handle.take(), window()) {
                    win.clear_interval_with_handle(id);
                }
            }
        });

        handle.set(window().and_then(|win| {
            win.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis_arg(millis),
            )
            .ok()
        }));

        Self {
            handle,
            _callback: closure,
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let (Some(id), Some(win)) = (self.handle.take(), window()) {
            win.clear_interval_with_handle(id);
        }
    }
}

#[derive(Clone, Copy)]
enum Pending {
    Frame(i32),
    Timeout(i32),
}

struct Rearming {
    pending: Cell<Option<Pending>>,
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Rearming {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            pending: Cell::new(None),
            closure: RefCell::new(None),
        })
    }

    fn request_frame(&self) {
        let Some(win) = window() else {
            return;
        };
        let closure = self.closure.borrow();
        if let Some(closure) = closure.as_ref() {
            if let Ok(id) = win.request_animation_frame(closure.as_ref().unchecked_ref()) {
                self.pending.set(Some(Pending::Frame(id)));
            }
        }
    }

    fn set_timeout(&self, millis: u32) {
        let Some(win) = window() else {
            return;
        };
        let closure = self.closure.borrow();
        if let Some(closure) = closure.as_ref() {
            if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis_arg(millis),
            ) {
                self.pending.set(Some(Pending::Timeout(id)));
            }
        }
    }

    fn cancel(&self) {
        if let (Some(pending), Some(win)) = (self.pending.take(), window()) {
            match pending {
                Pending::Frame(id) => {
                    let _ = win.cancel_animation_frame(id);
                }
                Pending::Timeout(id) => win.clear_timeout_with_handle(id),
            }
        }
        self.closure.borrow_mut().take();
    }
}

pub struct AnimationFrameLoop {
    inner: Rc<Rearming>,
}

impl AnimationFrameLoop {
    pub fn start<F>(mut on_frame: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let inner = Rearming::new();
        let weak = Rc::downgrade(&inner);
        *inner.closure.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            on_frame();
            if let Some(inner) = weak.upgrade() {
                inner.request_frame();
            }
        }));
        inner.request_frame();

        Self { inner }
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}

pub struct TimeoutChain {
    inner: Rc<Rearming>,
}

impl TimeoutChain {
    pub fn start<F>(first_delay_ms: u32, mut step: F) -> Self
    where
        F: FnMut() -> Option<u32> + 'static,
    {
        let inner = Rearming::new();
        let weak = Rc::downgrade(&inner);
        *inner.closure.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            let next = step();
            if let (Some(delay), Some(inner)) = (next, weak.upgrade()) {
                inner.set_timeout(delay);
            }
        }));
        inner.set_timeout(first_delay_ms);

        Self { inner }
    }
}

impl Drop for TimeoutChain {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}

pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event_type: &'static str, callback: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event_type, false, callback)
    }

    pub fn passive<F>(target: &EventTarget, event_type: &'static str, callback: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        Self::register(target, event_type, true, callback)
    }

    fn register<F>(target: &EventTarget, event_type: &'static str, passive: bool, callback: F) -> Self
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        );

        Self {
            target: target.clone(),
            event_type,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// `on_entry` receives `is_intersecting` for every observer entry. With
    /// `options.once`, the element is unobserved after its first intersection.
    pub fn watch<F>(element: &Element, options: &VisibilityOptions, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(bool) + 'static,
    {
        let once = options.once;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let intersecting = entry.is_intersecting();
                    on_entry(intersecting);
                    if intersecting && once {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub struct ThrottledScroll {
    _listener: EventListener,
    _trailing: Rc<RefCell<Option<Timeout>>>,
}

impl ThrottledScroll {
    pub fn new<F>(window_ms: u32, handler: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let win = window()?;
        let handler = Rc::new(RefCell::new(handler));
        let throttle = Rc::new(RefCell::new(Throttle::new(window_ms)));
        let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let listener = {
            let trailing = Rc::clone(&trailing);
            EventListener::passive(&win, "scroll", move |_| {
                let decision = throttle.borrow_mut().poll(now_ms());
                match decision {
                    ThrottleDecision::Run => (&mut *handler.borrow_mut())(),
                    ThrottleDecision::Defer { wait_ms } => {
                        let handler = Rc::clone(&handler);
                        let throttle = Rc::clone(&throttle);
                        let timeout = Timeout::new(wait_ms, move || {
                            throttle.borrow_mut().trailing_fired(now_ms());
                            (&mut *handler.borrow_mut())();
                        });
                        *trailing.borrow_mut() = Some(timeout);
                    }
                    ThrottleDecision::Skip => {}
                }
            })
        };

        Some(Self {
            _listener: listener,
            _trailing: trailing,
        })
    }
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

pub fn scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

pub fn inject_style_once(id: &str, css: &str) {
    let Some(document) = window().and_then(|win| win.document()) else {
        return;
    };
    if document.get_element_by_id(id).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };

    style.set_id(id);
    style.set_text_content(Some(css));
    let _ = head.append_child(&style);
}

/// Resolves after `millis`. Never resolves without a `window`.
pub async fn sleep(millis: u32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(win) = window() {
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis_arg(millis));
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn style_injection_is_idempotent() {
        inject_style_once("test-style", ".x { color: red; }");
        inject_style_once("test-style", ".y { color: blue; }");

        let document = window().and_then(|win| win.document()).expect("document");
        let styles = document
            .query_selector_all("style#test-style")
            .expect("valid selector");
        assert_eq!(styles.length(), 1);
        let style = document.get_element_by_id("test-style").expect("style element");
        assert_eq!(style.text_content().as_deref(), Some(".x { color: red; }"));
    }

    #[wasm_bindgen_test]
    fn dropped_listener_stops_receiving_events() {
        let document = window().and_then(|win| win.document()).expect("document");
        let target = document.create_element("div").expect("div");
        let hits = Rc::new(Cell::new(0));

        let listener = {
            let hits = Rc::clone(&hits);
            EventListener::new(&target, "ping", move |_| hits.set(hits.get() + 1))
        };
        let event = Event::new("ping").expect("event");
        target.dispatch_event(&event).expect("dispatch");
        assert_eq!(hits.get(), 1);

        drop(listener);
        target.dispatch_event(&event).expect("dispatch");
        assert_eq!(hits.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn dropped_timeout_never_fires() {
        let fired = Rc::new(Cell::new(false));
        let timeout = {
            let fired = Rc::clone(&fired);
            Timeout::new(10, move || fired.set(true))
        };
        drop(timeout);

        sleep(40).await;
        assert!(!fired.get());
    }

    #[wasm_bindgen_test]
    async fn interval_stops_after_break() {
        let ticks = Rc::new(Cell::new(0));
        let _interval = {
            let ticks = Rc::clone(&ticks);
            Interval::new(5, move || {
                ticks.set(ticks.get() + 1);
                if ticks.get() == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
        };

        sleep(100).await;
        assert_eq!(ticks.get(), 3);
    }
}
