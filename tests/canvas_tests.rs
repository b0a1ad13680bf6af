use image::{Rgba, RgbaImage};
use meme_studio::compose::canvas::Canvas;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

fn is_red(px: &Rgba<u8>) -> bool {
    px.0[0] > 200 && px.0[1] < 50 && px.0[2] < 50 && px.0[3] == 255
}

fn is_black(px: &Rgba<u8>) -> bool {
    px.0[0] < 20 && px.0[1] < 20 && px.0[2] < 20 && px.0[3] == 255
}

#[test]
fn landscape_image_gets_top_and_bottom_borders() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let source = RgbaImage::from_pixel(20, 10, RED);
    let fit = canvas.place_image(&source).unwrap();

    assert!((fit.width - 40.0).abs() < 0.001);
    assert!((fit.height - 20.0).abs() < 0.001);
    assert!((fit.start_y - 10.0).abs() < 0.001);

    assert!(is_black(canvas.image().get_pixel(20, 2)));
    assert!(is_red(canvas.image().get_pixel(20, 20)));
    assert!(is_black(canvas.image().get_pixel(20, 37)));
}

#[test]
fn portrait_image_gets_left_and_right_borders() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let source = RgbaImage::from_pixel(10, 20, RED);
    let fit = canvas.place_image(&source).unwrap();

    assert!((fit.height - 40.0).abs() < 0.001);
    assert!((fit.width - 20.0).abs() < 0.001);
    assert!((fit.start_x - 10.0).abs() < 0.001);

    assert!(is_black(canvas.image().get_pixel(2, 20)));
    assert!(is_red(canvas.image().get_pixel(20, 20)));
    assert!(is_black(canvas.image().get_pixel(37, 20)));
}

#[test]
fn square_image_on_wide_canvas_covers_everything() {
    // The fit computation pins a square image to the canvas width; on a
    // wide canvas the overflow is clipped top and bottom, leaving no border.
    let mut canvas = Canvas::new(60, 40).unwrap();
    let source = RgbaImage::from_pixel(30, 30, RED);
    let fit = canvas.place_image(&source).unwrap();

    assert!((fit.height - 60.0).abs() < 0.001);
    assert!((fit.start_y + 10.0).abs() < 0.001);
    assert!(canvas.image().pixels().all(is_red));
}

#[test]
fn placing_replaces_previous_content() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    let first = RgbaImage::from_pixel(10, 20, RED);
    canvas.place_image(&first).unwrap();

    let second = RgbaImage::from_pixel(20, 10, Rgba([0, 255, 0, 255]));
    canvas.place_image(&second).unwrap();

    // Old red letterbox content must be gone.
    assert!(canvas.image().pixels().all(|p| !is_red(p)));
}

#[test]
fn save_writes_a_decodable_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    let mut canvas = Canvas::new(32, 24).unwrap();
    let source = RgbaImage::from_pixel(16, 12, RED);
    canvas.place_image(&source).unwrap();
    canvas.save(&path).unwrap();

    let reread = image::open(&path).unwrap().to_rgba8();
    assert_eq!(reread.dimensions(), (32, 24));
}
