// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use light_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn light_ranges_are_ordered() {
    assert!(BRIGHTNESS_MIN > 0.0, "screen must never go fully dark");
    assert!(BRIGHTNESS_MIN < BRIGHTNESS_MAX);
    assert!(WARMTH_MIN < WARMTH_MAX);
    assert!((BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(&DEFAULT_BRIGHTNESS));
    assert!((WARMTH_MIN..=WARMTH_MAX).contains(&DEFAULT_WARMTH));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn warm_endpoint_is_a_valid_color() {
    for c in [WARM_RED, WARM_GREEN, WARM_BLUE] {
        assert!((0.0..=1.0).contains(&c));
    }
    // Pale yellow: blue drops the most
    assert!(WARM_BLUE < WARM_GREEN && WARM_GREEN <= WARM_RED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn key_nudge_is_a_small_fraction_of_a_swing() {
    assert!(KEY_NUDGE_PX > 0.0);
    assert!(KEY_NUDGE_PX < SENSITIVITY / 10.0);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        HINT_ID,
        READOUT_BRIGHTNESS_ID,
        READOUT_WARMTH_ID,
        INFO_PANEL_ID,
        INFO_BUTTON_ID,
        INFO_CLOSE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn overlays_are_siblings_of_the_canvas() {
    // The whole page goes fullscreen, so every overlay must live in the body
    // rather than inside the canvas element.
    let page = include_str!("../index.html");
    let body = &page[page.find("<body>").unwrap()..page.find("</body>").unwrap()];
    let canvas_tag = format!("<canvas id=\"{CANVAS_ID}\"></canvas>");
    assert!(body.contains(&canvas_tag), "canvas must have no children");
    for id in [
        HINT_ID,
        READOUT_BRIGHTNESS_ID,
        READOUT_WARMTH_ID,
        INFO_PANEL_ID,
        INFO_BUTTON_ID,
        INFO_CLOSE_ID,
    ] {
        assert!(body.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}
