use crate::dom;
use crate::input::{self, KeyCommand};
use crate::WebSession;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &WebSession) {
    let key = ev.key();
    if let Some(sample) = input::nudge_for_key(&key) {
        if session.borrow_mut().drag_changed(sample) {
            let r = session.borrow().state().readout();
            log::info!(
                "[keys] {} -> brightness={}% warmth={}%",
                key,
                r.brightness_percent,
                r.warmth_percent
            );
        }
        ev.prevent_default();
        return;
    }
    let Some(command) = input::command_for_key(&key) else {
        return;
    };
    match command {
        KeyCommand::ToggleInfo => session.borrow_mut().toggle_info(),
        KeyCommand::ToggleFullscreen => {
            if let Some(doc) = dom::window_document() {
                dom::toggle_fullscreen(&doc);
            }
        }
        KeyCommand::Dismiss => {
            let info_visible = session.borrow().info_visible();
            if info_visible {
                session.borrow_mut().set_info_visible(false);
            } else if let Some(doc) = dom::window_document() {
                dom::exit_fullscreen(&doc);
            }
        }
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(session: WebSession) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &session);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
