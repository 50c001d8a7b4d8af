use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use super::{RasterSurface, Result, SurfaceError};

pub const MASK_SELECTED: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const MASK_UNSELECTED: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Two-colour, fully opaque mask at the surface's resolution: white where
/// any paint remains, black elsewhere.
pub fn finalize<S: RasterSurface + ?Sized>(surface: &S) -> Result<RgbaImage> {
    let size = surface.size();
    let alpha = surface.read_alpha()?;
    if alpha.len() != size.pixel_count() {
        return Err(SurfaceError::Unreadable(format!(
            "expected {} alpha values, found {}",
            size.pixel_count(),
            alpha.len()
        )));
    }

    let mut mask = RgbaImage::new(size.width, size.height);
    for (pixel, value) in mask.pixels_mut().zip(alpha.iter()) {
        *pixel = if *value > 0 {
            MASK_SELECTED
        } else {
            MASK_UNSELECTED
        };
    }
    Ok(mask)
}

pub fn encode_png(mask: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    mask.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
