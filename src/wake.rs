//! Screen Wake Lock as the page's idle-sleep inhibitor.
//!
//! `navigator.wakeLock` is reached through `js_sys::Reflect` because web-sys
//! only exposes it behind the unstable-API cfg. Requests are async: the
//! sentinel arrives later and is released straight away if the lock was
//! dropped in the meantime.

use light_core::{IdleGuard, IdleInhibitor};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Default)]
pub struct WakeLock {
    sentinel: Rc<RefCell<Option<JsValue>>>,
    wanted: Rc<Cell<bool>>,
}

impl IdleInhibitor for WakeLock {
    fn set_idle_disabled(&mut self, disabled: bool) {
        self.wanted.set(disabled);
        if disabled {
            self.request();
        } else if let Some(sentinel) = self.sentinel.borrow_mut().take() {
            release_sentinel(&sentinel);
        }
    }
}

impl WakeLock {
    fn request(&self) {
        let promise = match request_screen_lock() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[wake] screen wake lock unavailable: {:?}", e);
                return;
            }
        };
        let sentinel = self.sentinel.clone();
        let wanted = self.wanted.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(s) if wanted.get() => {
                    log::info!("[wake] screen wake lock acquired");
                    if let Some(old) = sentinel.borrow_mut().replace(s) {
                        release_sentinel(&old);
                    }
                }
                Ok(s) => release_sentinel(&s),
                Err(e) => log::warn!("[wake] request rejected: {:?}", e),
            }
        });
    }
}

fn request_screen_lock() -> Result<js_sys::Promise, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let wake_lock = js_sys::Reflect::get(&window.navigator(), &"wakeLock".into())?;
    if wake_lock.is_undefined() {
        return Err(JsValue::from_str("navigator.wakeLock missing"));
    }
    let request: js_sys::Function = js_sys::Reflect::get(&wake_lock, &"request".into())?.dyn_into()?;
    request.call1(&wake_lock, &"screen".into())?.dyn_into()
}

fn release_sentinel(sentinel: &JsValue) {
    let released = js_sys::Reflect::get(sentinel, &"release".into())
        .and_then(|f| f.dyn_into::<js_sys::Function>())
        .and_then(|f| f.call0(sentinel));
    match released {
        Ok(_) => log::info!("[wake] screen wake lock released"),
        Err(e) => log::warn!("[wake] release failed: {:?}", e),
    }
}

/// Hold the wake lock while the page is visible and drop it when hidden.
pub fn wire_wake_lock(document: &web::Document) {
    let guard: Rc<RefCell<Option<IdleGuard<WakeLock>>>> = Rc::new(RefCell::new(None));
    sync_with_visibility(document, &guard);

    let doc = document.clone();
    let guard_vis = guard.clone();
    let on_visibility = Closure::wrap(Box::new(move || {
        sync_with_visibility(&doc, &guard_vis);
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", on_visibility.as_ref().unchecked_ref());
    on_visibility.forget();

    if let Some(window) = web::window() {
        let on_pagehide = Closure::wrap(Box::new(move || {
            guard.borrow_mut().take();
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref());
        on_pagehide.forget();
    }
}

fn sync_with_visibility(document: &web::Document, guard: &Rc<RefCell<Option<IdleGuard<WakeLock>>>>) {
    let mut slot = guard.borrow_mut();
    if document.hidden() {
        // Dropping the guard releases the lock
        slot.take();
    } else if slot.is_none() {
        *slot = Some(IdleGuard::acquire(WakeLock::default()));
    }
}
