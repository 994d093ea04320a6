use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

// ---------------- Fullscreen (hides browser chrome and the status bar) ----------------

#[inline]
pub fn is_fullscreen(document: &web::Document) -> bool {
    document.fullscreen_element().is_some()
}

/// Fullscreen the whole page so the hint, info button and info panel stay in
/// the top layer alongside the canvas.
pub fn request_fullscreen(document: &web::Document) {
    let Some(root) = document.document_element() else {
        log::warn!("[fullscreen] document has no root element");
        return;
    };
    if let Err(e) = root.request_fullscreen() {
        log::warn!("[fullscreen] request failed: {:?}", e);
    }
}

pub fn exit_fullscreen(document: &web::Document) {
    if is_fullscreen(document) {
        document.exit_fullscreen();
    }
}

pub fn toggle_fullscreen(document: &web::Document) {
    if is_fullscreen(document) {
        document.exit_fullscreen();
    } else {
        request_fullscreen(document);
    }
}
