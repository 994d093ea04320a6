use crate::constants::{HINT_ID, INFO_PANEL_ID, READOUT_BRIGHTNESS_ID, READOUT_WARMTH_ID};
use light_core::Readout;
use web_sys as web;

#[inline]
fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Show the info panel and hide the instruction hint, or the reverse.
pub fn set_info_visible(document: &web::Document, visible: bool) {
    if visible {
        show(document, INFO_PANEL_ID);
        hide(document, HINT_ID);
    } else {
        hide(document, INFO_PANEL_ID);
        show(document, HINT_ID);
    }
}

pub fn update_readout(document: &web::Document, readout: &Readout) {
    set_text(
        document,
        READOUT_BRIGHTNESS_ID,
        &format!("{}%", readout.brightness_percent),
    );
    set_text(
        document,
        READOUT_WARMTH_ID,
        &format!("{}%", readout.warmth_percent),
    );
}
