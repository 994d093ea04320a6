use crate::overlay;
use crate::render::Painter;
use light_core::{Surface, View};
use web_sys as web;

/// The page as a light surface: full-screen canvas fill plus the DOM overlay.
pub struct WebSurface {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    painter: Painter,
}

impl WebSurface {
    pub fn new(document: web::Document, canvas: web::HtmlCanvasElement, painter: Painter) -> Self {
        Self {
            document,
            canvas,
            painter,
        }
    }
}

impl Surface for WebSurface {
    fn present(&mut self, view: &View) {
        self.painter.paint(&self.canvas, view.paint.resolve());
        overlay::set_info_visible(&self.document, view.info_visible);
        if !view.info_visible {
            overlay::update_readout(&self.document, &view.readout);
        }
    }
}
