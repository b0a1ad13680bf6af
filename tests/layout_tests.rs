use meme_studio::compose::layout::{FitResult, fit_to_canvas};

fn fit_close(actual: FitResult, expected: (f32, f32, f32, f32), eps: f32) {
    assert!(
        (actual.width - expected.0).abs() <= eps,
        "width mismatch: {:?} vs {:?}",
        actual,
        expected
    );
    assert!(
        (actual.height - expected.1).abs() <= eps,
        "height mismatch: {:?} vs {:?}",
        actual,
        expected
    );
    assert!(
        (actual.start_x - expected.2).abs() <= eps,
        "start_x mismatch: {:?} vs {:?}",
        actual,
        expected
    );
    assert!(
        (actual.start_y - expected.3).abs() <= eps,
        "start_y mismatch: {:?} vs {:?}",
        actual,
        expected
    );
}

#[test]
fn landscape_pins_width_and_centers_vertically() {
    // 200x100 image on a 400x400 canvas: aspect 2.0
    let fit = fit_to_canvas(400.0, 400.0, 200.0, 100.0);
    fit_close(fit, (400.0, 200.0, 0.0, 100.0), 0.001);
}

#[test]
fn portrait_pins_height_and_centers_horizontally() {
    // 100x200 image on a 400x400 canvas: aspect 0.5
    let fit = fit_to_canvas(400.0, 400.0, 100.0, 200.0);
    fit_close(fit, (200.0, 400.0, 100.0, 0.0), 0.001);
}

#[test]
fn square_image_takes_the_landscape_branch() {
    let fit = fit_to_canvas(400.0, 400.0, 200.0, 200.0);
    fit_close(fit, (400.0, 400.0, 0.0, 0.0), 0.001);
}

#[test]
fn square_image_on_wide_canvas_overflows_the_height() {
    // The landscape branch pins a square image to the canvas width even when
    // that exceeds the canvas height. Deliberate behavior; do not "fix".
    let fit = fit_to_canvas(600.0, 400.0, 300.0, 300.0);
    fit_close(fit, (600.0, 600.0, 0.0, -100.0), 0.001);
    assert!(fit.height > 400.0);
}

#[test]
fn aspect_ratio_is_preserved() {
    let cases = [
        (400.0, 400.0, 200.0, 100.0),
        (400.0, 400.0, 100.0, 200.0),
        (1920.0, 1080.0, 333.0, 517.0),
        (640.0, 480.0, 3000.0, 1499.0),
        (123.0, 456.0, 7.0, 11.0),
    ];
    for (cw, ch, iw, ih) in cases {
        let fit = fit_to_canvas(cw, ch, iw, ih);
        let expected = iw / ih;
        let actual = fit.width / fit.height;
        assert!(
            (actual - expected).abs() < 1e-4,
            "aspect drift for {:?}: {} vs {}",
            (cw, ch, iw, ih),
            actual,
            expected
        );
    }
}

#[test]
fn slack_axis_margins_are_equal() {
    // Portrait: horizontal slack split evenly.
    let fit = fit_to_canvas(500.0, 300.0, 100.0, 300.0);
    assert!((fit.start_y - 0.0).abs() < 1e-4);
    assert!((fit.start_x - (500.0 - fit.width) / 2.0).abs() < 1e-4);

    // Landscape: vertical slack split evenly.
    let fit = fit_to_canvas(500.0, 300.0, 400.0, 100.0);
    assert!((fit.start_x - 0.0).abs() < 1e-4);
    assert!((fit.start_y - (300.0 - fit.height) / 2.0).abs() < 1e-4);
}

#[test]
fn dominant_axis_touches_the_canvas() {
    let portrait = fit_to_canvas(800.0, 600.0, 30.0, 90.0);
    assert!((portrait.height - 600.0).abs() < 1e-4);
    assert!(portrait.width <= 800.0);

    let landscape = fit_to_canvas(800.0, 600.0, 90.0, 30.0);
    assert!((landscape.width - 800.0).abs() < 1e-4);
    assert!(landscape.height <= 600.0);
}

#[test]
fn repeated_calls_yield_identical_results() {
    let a = fit_to_canvas(1024.0, 768.0, 357.0, 211.0);
    let b = fit_to_canvas(1024.0, 768.0, 357.0, 211.0);
    assert_eq!(a, b);
}
