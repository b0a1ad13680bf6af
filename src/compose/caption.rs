//! Caption stamping for the top/bottom meme text.
//!
//! Layout mirrors the classic canvas meme look: horizontally centered white
//! text, top baseline a fixed distance below the top edge, bottom baseline a
//! fixed distance above the bottom edge, and lines wider than the canvas get
//! squeezed horizontally instead of wrapping.

use std::fs;
use std::path::Path;

use ab_glyph::{Font, FontArc, FontVec, GlyphId, PxScale, ScaleFont, point};
use anyhow::{Context, Result};
use fontdb::Database;
use image::{Rgba, RgbaImage};
use tracing::{debug, warn};

/// Baseline offset of the top caption from the canvas top edge.
pub const TOP_BASELINE_PX: f32 = 20.0;
/// Baseline offset of the bottom caption above the canvas bottom edge.
pub const BOTTOM_RISE_PX: f32 = 30.0;

/// Baseline y positions for the top and bottom captions.
pub fn caption_baselines(canvas_h: f32) -> (f32, f32) {
    (TOP_BASELINE_PX, canvas_h - BOTTOM_RISE_PX)
}

/// Horizontal squeeze applied when a measured line exceeds `max_width`.
/// Returns 1.0 when the line already fits.
pub fn squeeze_factor(line_width: f32, max_width: f32) -> f32 {
    if line_width > max_width && line_width > 0.0 {
        max_width / line_width
    } else {
        1.0
    }
}

/// Advance width of `text` at the given scale, kerning included.
pub fn line_width(font: &FontArc, scale: PxScale, text: &str) -> f32 {
    let sf = font.as_scaled(scale);
    let mut width = 0.0;
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let gid = font.glyph_id(ch);
        if let Some(prev) = prev {
            width += sf.kern(prev, gid);
        }
        width += sf.h_advance(gid);
        prev = Some(gid);
    }
    width
}

/// Stamp both captions onto the canvas. Empty lines are skipped.
pub fn draw_captions(
    canvas: &mut RgbaImage,
    font: &FontArc,
    font_px: f32,
    color: [u8; 3],
    top: &str,
    bottom: &str,
) {
    let (top_y, bottom_y) = caption_baselines(canvas.height() as f32);
    draw_centered_line(canvas, font, font_px, color, top, top_y);
    draw_centered_line(canvas, font, font_px, color, bottom, bottom_y);
}

fn draw_centered_line(
    canvas: &mut RgbaImage,
    font: &FontArc,
    font_px: f32,
    color: [u8; 3],
    text: &str,
    baseline_y: f32,
) {
    if text.is_empty() {
        return;
    }

    let canvas_w = canvas.width() as f32;
    let nominal = PxScale::from(font_px);
    let squeeze = squeeze_factor(line_width(font, nominal, text), canvas_w);
    let scale = PxScale {
        x: font_px * squeeze,
        y: font_px,
    };
    let width = line_width(font, scale, text);
    let start_x = (canvas_w - width) / 2.0;

    let sf = font.as_scaled(scale);
    let mut caret = point(start_x, baseline_y);
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let gid = font.glyph_id(ch);
        if let Some(prev) = prev {
            caret.x += sf.kern(prev, gid);
        }
        let glyph = gid.with_scale_and_position(scale, caret);
        caret.x += sf.h_advance(gid);
        prev = Some(gid);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px < 0 || py < 0 || px >= canvas.width() as i32 || py >= canvas.height() as i32 {
                    return;
                }
                blend(canvas.get_pixel_mut(px as u32, py as u32), color, coverage);
            });
        }
    }
}

fn blend(dst: &mut Rgba<u8>, color: [u8; 3], coverage: f32) {
    let cov = coverage.clamp(0.0, 1.0);
    for (channel, &target) in dst.0.iter_mut().take(3).zip(color.iter()) {
        let mixed = f32::from(*channel) + (f32::from(target) - f32::from(*channel)) * cov;
        *channel = mixed.round().clamp(0.0, 255.0) as u8;
    }
    let alpha = f32::from(dst.0[3]).max(cov * 255.0);
    dst.0[3] = alpha.round() as u8;
}

/// Resolve the caption font: an explicit font file wins, then the first
/// matching family from the system font database, then the bundled fallback.
pub fn load_font(font_path: Option<&Path>, families: &[String]) -> Result<FontArc> {
    if let Some(path) = font_path {
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read caption font at {}", path.display()))?;
        let font = FontVec::try_from_vec(bytes)
            .with_context(|| format!("failed to parse caption font at {}", path.display()))?;
        return Ok(FontArc::new(font));
    }

    let mut db = Database::new();
    db.load_system_fonts();
    for family in families {
        if let Some(font) = load_system_family(&db, family) {
            debug!(family, "resolved caption font");
            return Ok(font);
        }
    }

    warn!(
        "no configured caption font found (tried families: {}); using bundled fallback",
        families.join(", ")
    );
    fallback_font()
}

/// Bundled fallback so caption stamping works without any system fonts.
pub fn fallback_font() -> Result<FontArc> {
    FontArc::try_from_slice(include_bytes!("../../assets/fonts/DejaVuSans.ttf"))
        .context("bundled fallback font must decode")
}

fn load_system_family(db: &Database, name: &str) -> Option<FontArc> {
    let requested = name.to_lowercase();
    let face_id = db.faces().find_map(|face| {
        let matches = face
            .families
            .iter()
            .any(|(family, _)| family.to_lowercase() == requested)
            || face.post_script_name.to_lowercase() == requested;
        matches.then_some(face.id)
    })?;
    db.with_face_data(face_id, |data, index| {
        FontVec::try_from_vec_and_index(data.to_vec(), index)
            .ok()
            .map(FontArc::new)
    })?
}
