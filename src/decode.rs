//! Image decoding behind a capability trait so the studio can be exercised
//! without touching the filesystem.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use image::RgbaImage;
use tracing::debug;

/// Decodes a user-selected file into canvas-ready RGBA pixels.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<RgbaImage>;
}

/// Filesystem-backed decoder. Sniffs the format from content, decodes to
/// RGBA8, and applies EXIF orientation best-effort; missing metadata leaves
/// the original orientation untouched.
#[derive(Debug, Default)]
pub struct FsImageDecoder;

impl ImageDecoder for FsImageDecoder {
    fn decode(&self, path: &Path) -> Result<RgbaImage> {
        let img = image::ImageReader::open(path)
            .with_context(|| format!("failed to open image at {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("failed to sniff image format for {}", path.display()))?
            .decode()
            .with_context(|| format!("failed to decode image at {}", path.display()))?;

        let mut img = img.to_rgba8();
        ensure!(
            img.width() > 0 && img.height() > 0,
            "decoded image at {} has zero dimensions",
            path.display()
        );

        let orientation = read_orientation(path).unwrap_or(1);
        match orientation {
            1 => {}
            2 => {
                img = image::imageops::flip_horizontal(&img);
            }
            3 => {
                img = image::imageops::rotate180(&img);
            }
            4 => {
                img = image::imageops::flip_vertical(&img);
            }
            5 => {
                img = image::imageops::rotate90(&img);
                img = image::imageops::flip_horizontal(&img);
            }
            6 => {
                img = image::imageops::rotate90(&img);
            }
            7 => {
                img = image::imageops::rotate270(&img);
                img = image::imageops::flip_horizontal(&img);
            }
            8 => {
                img = image::imageops::rotate270(&img);
            }
            _ => {}
        }

        Ok(img)
    }
}

fn read_orientation(path: &Path) -> Option<u16> {
    let file = File::open(path).ok()?;
    let mut buf = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut buf).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let value = field.value.get_uint(0)? as u16;
    debug!("exif orientation {} for {}", value, path.display());
    Some(value)
}
