/// Scaled draw dimensions and offsets for placing an image on the canvas.
///
/// `start_x`/`start_y` align with the top-left corner of the drawn image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub width: f32,
    pub height: f32,
    pub start_x: f32,
    pub start_y: f32,
}

/// Compute letterboxed scale-to-fit dimensions for an image of arbitrary
/// aspect ratio inside a `canvas_w` x `canvas_h` rectangle.
///
/// The image keeps its aspect ratio, is pinned to the canvas along its
/// dominant axis, and is centered with equal margins along the other axis.
/// A square image goes through the landscape branch, so on a non-square
/// canvas it is pinned to the canvas width even when that overflows the
/// canvas height. That branch choice is deliberate and callers rely on it.
///
/// All inputs must be finite and strictly positive; the function is not
/// defined outside that domain and callers validate upstream.
pub fn fit_to_canvas(canvas_w: f32, canvas_h: f32, image_w: f32, image_h: f32) -> FitResult {
    let aspect_ratio = image_w / image_h;

    if aspect_ratio < 1.0 {
        // Portrait: height is the max the canvas allows, width follows.
        let height = canvas_h;
        let width = canvas_h * aspect_ratio;
        FitResult {
            width,
            height,
            start_x: (canvas_w - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        // Landscape or square: width is pinned, height follows.
        let width = canvas_w;
        let height = canvas_w / aspect_ratio;
        FitResult {
            width,
            height,
            start_x: 0.0,
            start_y: (canvas_h - height) / 2.0,
        }
    }
}
