use super::{
    dom::{viewport_width, AnimationFrameLoop, EventListener},
    use_config,
};
use crate::config::CursorConfig;
use crate::effects::cursor::{
    cursor_enabled, marker_display, tracking_change, CursorEaser, TrackingChange, INTERACTIVE_SELECTOR,
    MARKER_ID,
};
use crate::logging::{log_event, LogLevel};
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlElement, MouseEvent};
use yew::prelude::*;

struct CursorTracking {
    _frames: AnimationFrameLoop,
    _listeners: Vec<EventListener>,
}

impl CursorTracking {
    fn attach(marker: &HtmlElement, config: &CursorConfig) -> Option<Self> {
        let document = window()?.document()?;
        let easer = Rc::new(RefCell::new(CursorEaser::new(config)));

        let on_move = {
            let easer = Rc::clone(&easer);
            EventListener::new(&document, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    easer
                        .borrow_mut()
                        .point_at(f64::from(event.client_x()), f64::from(event.client_y()));
                }
            })
        };

        let on_over = {
            let easer = Rc::clone(&easer);
            let marker = marker.clone();
            EventListener::new(&document, "mouseover", move |event| {
                set_hovering(&easer, &marker, over_interactive(&event));
            })
        };

        let on_out = {
            let easer = Rc::clone(&easer);
            let marker = marker.clone();
            EventListener::new(&document, "mouseout", move |event| {
                let left_window = event
                    .dyn_ref::<MouseEvent>()
                    .map(|event| event.related_target().is_none())
                    .unwrap_or(false);
                if left_window {
                    set_hovering(&easer, &marker, false);
                }
            })
        };

        let marker = marker.clone();
        let frames = AnimationFrameLoop::start(move || {
            let transform = {
                let mut easer = easer.borrow_mut();
                easer.step();
                easer.transform()
            };
            let _ = marker.style().set_property("transform", &transform);
        });

        Some(Self {
            _frames: frames,
            _listeners: vec![on_move, on_over, on_out],
        })
    }
}

struct ResponsiveCursor {
    _resize: EventListener,
    _tracking: Rc<RefCell<Option<CursorTracking>>>,
}

impl ResponsiveCursor {
    fn start(marker: &NodeRef, config: &CursorConfig) -> Option<Self> {
        let marker = marker.cast::<HtmlElement>()?;
        let win = window()?;
        let width = viewport_width()?;

        let enabled = cursor_enabled(width, config);
        show_marker(&marker, enabled, width);
        let tracking = Rc::new(RefCell::new(if enabled {
            CursorTracking::attach(&marker, config)
        } else {
            None
        }));

        let resize = {
            let tracking = Rc::clone(&tracking);
            let config = config.clone();
            EventListener::new(&win, "resize", move |_| {
                let Some(width) = viewport_width() else {
                    return;
                };
                let attached = tracking.borrow().is_some();
                match tracking_change(width, attached, &config) {
                    TrackingChange::Attach => {
                        show_marker(&marker, true, width);
                        *tracking.borrow_mut() = CursorTracking::attach(&marker, &config);
                    }
                    TrackingChange::Detach => {
                        show_marker(&marker, false, width);
                        tracking.borrow_mut().take();
                    }
                    TrackingChange::Keep => {}
                }
            })
        };

        Some(Self {
            _resize: resize,
            _tracking: tracking,
        })
    }
}

fn show_marker(marker: &HtmlElement, enabled: bool, viewport_width: f64) {
    let _ = marker.style().set_property("display", marker_display(enabled));
    if !enabled {
        log_event(
            LogLevel::Debug,
            "cursor_disabled",
            json!({ "viewport_width": viewport_width }),
        );
    }
}

fn over_interactive(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

fn set_hovering(easer: &RefCell<CursorEaser>, marker: &HtmlElement, hovering: bool) {
    let mut easer = easer.borrow_mut();
    if easer.hovering() == hovering {
        return;
    }
    easer.set_hovering(hovering);
    let _ = marker.style().set_property("background", easer.background());
}

#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let config = use_config();
    let marker = use_node_ref();

    {
        let marker = marker.clone();
        use_effect_with(config, move |config| {
            let cursor = ResponsiveCursor::start(&marker, &config.cursor);
            move || drop(cursor)
        });
    }

    html! {
        <div id={MARKER_ID} class="cursor-follower" ref={marker} aria-hidden="true"></div>
    }
}
