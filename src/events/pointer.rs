use crate::dom;
use crate::input;
use crate::WebSession;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: WebSession,
    pub drag: Rc<RefCell<input::PointerDrag>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w, "pointerup");
    wire_pointerup(&w, "pointercancel");
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_button(&ev) {
            return;
        }
        // Fullscreen needs a user gesture; the first touch is the earliest one we get
        static FULLSCREEN_REQUESTED: AtomicBool = AtomicBool::new(false);
        if !FULLSCREEN_REQUESTED.swap(true, Ordering::SeqCst) {
            if let Some(doc) = dom::window_document() {
                dom::request_fullscreen(&doc);
            }
        }

        let pressed = w
            .drag
            .borrow_mut()
            .press(ev.pointer_id(), input::pointer_client_pos(&ev));
        if !pressed {
            return;
        }
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let sample = w
            .drag
            .borrow()
            .motion(ev.pointer_id(), input::pointer_client_pos(&ev));
        if let Some(sample) = sample {
            w.session.borrow_mut().drag_changed(sample);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring, event_name: &str) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag.borrow_mut().release(ev.pointer_id()) {
            w.session.borrow().drag_ended();
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
