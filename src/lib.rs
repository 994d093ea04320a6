#![cfg(target_arch = "wasm32")]
use light_core::{LightConfig, Session};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod input;
mod overlay;
mod render;
mod surface;
mod wake;

pub(crate) type WebSession = Rc<RefCell<Session<surface::WebSurface>>>;

// Keep the canvas backing store at CSS size * devicePixelRatio and repaint after resizes
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, session: &WebSession) {
    let canvas_resize = canvas.clone();
    let session = session.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        session.borrow_mut().refresh();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_info_buttons(document: &web::Document, session: &WebSession) {
    let session_open = session.clone();
    dom::add_click_listener(document, constants::INFO_BUTTON_ID, move || {
        session_open.borrow_mut().toggle_info();
    });

    let session_close = session.clone();
    dom::add_click_listener(document, constants::INFO_CLOSE_ID, move || {
        session_close.borrow_mut().set_info_visible(false);
    });
}

fn load_config(window: &web::Window) -> LightConfig {
    let query = window.location().search().unwrap_or_default();
    match LightConfig::from_query(&query) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            LightConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("screenlight-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let config = load_config(&window);
    let painter = render::Painter::new(&canvas).await;
    let surface = surface::WebSurface::new(document.clone(), canvas.clone(), painter);
    let session: WebSession = Rc::new(RefCell::new(Session::new(config, surface)));

    wire_canvas_resize(&canvas, &session);
    wire_info_buttons(&document, &session);

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        session: session.clone(),
        drag: Rc::new(RefCell::new(input::PointerDrag::default())),
    });
    events::wire_global_keydown(session.clone());

    // Screen stays awake while the page is visible
    wake::wire_wake_lock(&document);

    Ok(())
}
