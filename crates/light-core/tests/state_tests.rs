// Integration tests for the gesture-to-state mapping.

use light_core::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn default_state_is_full_brightness_and_neutral() {
    let s = LightState::default();
    assert_eq!(s.brightness(), 1.0);
    assert_eq!(s.warmth(), 0.0);
}

#[test]
fn new_clamps_and_rejects_nan() {
    let s = LightState::new(5.0, -2.0);
    assert_eq!(s.brightness(), BRIGHTNESS_MAX);
    assert_eq!(s.warmth(), WARMTH_MIN);

    let s = LightState::new(-1.0, 3.0);
    assert_eq!(s.brightness(), BRIGHTNESS_MIN);
    assert_eq!(s.warmth(), WARMTH_MAX);

    let s = LightState::new(f64::NAN, f64::NAN);
    assert_eq!(s, LightState::default());
}

#[test]
fn zero_sample_leaves_state_unchanged() {
    for s in [
        LightState::default(),
        LightState::new(0.1, 1.0),
        LightState::new(0.55, 0.3),
    ] {
        assert_eq!(apply_gesture(s, GestureSample::new(0.0, 0.0)), s);
    }
}

#[test]
fn dragging_up_at_max_brightness_stays_at_max() {
    let s = LightState::default();
    let next = apply_gesture(s, GestureSample::new(0.0, -600.0));
    assert_eq!(next.brightness(), 1.0);
    assert_eq!(next.warmth(), s.warmth());
}

#[test]
fn full_downward_swing_hits_brightness_floor() {
    let next = apply_gesture(LightState::default(), GestureSample::new(0.0, 600.0));
    assert!(approx(next.brightness(), 0.1));
}

#[test]
fn partial_vertical_drag_is_linear() {
    let next = apply_gesture(LightState::default(), GestureSample::new(0.0, 150.0));
    assert!(approx(next.brightness(), 0.75));

    let back = apply_gesture(next, GestureSample::new(0.0, -60.0));
    assert!(approx(back.brightness(), 0.85));
}

#[test]
fn dragging_right_warms_and_left_cools() {
    let warm = apply_gesture(LightState::default(), GestureSample::new(300.0, 0.0));
    assert!(approx(warm.warmth(), 0.5));

    let cooler = apply_gesture(warm, GestureSample::new(-120.0, 0.0));
    assert!(approx(cooler.warmth(), 0.3));

    let floor = apply_gesture(cooler, GestureSample::new(-10_000.0, 0.0));
    assert_eq!(floor.warmth(), 0.0);
}

#[test]
fn vertical_samples_never_touch_warmth() {
    let s = LightState::new(0.6, 0.4);
    let samples = [(0.0, 10.0), (5.0, -6.0), (-99.0, 100.0), (1.0, -1000.0)];
    for (dx, dy) in samples {
        let next = apply_gesture(s, GestureSample::new(dx, dy));
        assert_eq!(next.warmth(), s.warmth(), "dx={dx} dy={dy}");
    }
}

#[test]
fn horizontal_and_tied_samples_never_touch_brightness() {
    let s = LightState::new(0.6, 0.4);
    let samples = [(10.0, 0.0), (-6.0, 5.0), (100.0, -100.0), (-50.0, -50.0)];
    for (dx, dy) in samples {
        let next = apply_gesture(s, GestureSample::new(dx, dy));
        assert_eq!(next.brightness(), s.brightness(), "dx={dx} dy={dy}");
    }
}

#[test]
fn tie_is_classified_horizontal() {
    let next = apply_gesture(LightState::default(), GestureSample::new(60.0, 60.0));
    assert!(approx(next.warmth(), 0.1));
    assert_eq!(next.brightness(), 1.0);
}

#[test]
fn ranges_hold_over_a_long_sequence() {
    let mut s = LightState::default();
    // Deterministic pseudo-random walk over large and small displacements
    let mut x: i64 = 17;
    for _ in 0..2_000 {
        x = (x * 1_103_515_245 + 12_345) % 2_147_483_648;
        let dx = ((x % 2_001) - 1_000) as f64;
        let dy = (((x / 2_001) % 2_001) - 1_000) as f64;
        s = apply_gesture(s, GestureSample::new(dx, dy));
        assert!((BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(&s.brightness()));
        assert!((WARMTH_MIN..=WARMTH_MAX).contains(&s.warmth()));
    }
}

#[test]
fn warmth_is_monotonic_in_dx_until_clamp() {
    let s = LightState::new(0.8, 0.2);
    let mut prev = s.warmth();
    for dx in (0..=1_000).step_by(25) {
        let w = apply_gesture(s, GestureSample::new(dx as f64, 0.0)).warmth();
        assert!(w >= prev, "warmth decreased at dx={dx}");
        prev = w;
    }
    assert_eq!(prev, 1.0);
}

#[test]
fn non_finite_samples_are_ignored() {
    let s = LightState::new(0.5, 0.5);
    assert_eq!(apply_gesture(s, GestureSample::new(f64::NAN, 0.0)), s);
    assert_eq!(apply_gesture(s, GestureSample::new(0.0, f64::INFINITY)), s);
}

#[test]
fn custom_sensitivity_scales_response() {
    let s = LightState::default();
    let next = apply_gesture_with(s, GestureSample::new(100.0, 0.0), 200.0);
    assert!(approx(next.warmth(), 0.5));
    // Unusable sensitivity leaves the state alone
    assert_eq!(apply_gesture_with(s, GestureSample::new(100.0, 0.0), 0.0), s);
}

#[test]
fn readout_truncates_percentages() {
    let r = LightState::default().readout();
    assert_eq!(r.brightness_percent, 100);
    assert_eq!(r.warmth_percent, 0);

    let r = LightState::new(0.999, 0.505).readout();
    assert_eq!(r.brightness_percent, 99);
    assert_eq!(r.warmth_percent, 50);

    assert_eq!(LightState::new(0.0, 0.0).readout().brightness_percent, 10);
}
