use std::borrow::Cow;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::model::{ImagePoint, ImageSize, StrokeTool};

use super::stamp::{for_each_capsule_pixel, source_over};
use super::{RasterSurface, Result, SurfaceError};

/// Colour and per-stamp opacity of the live overlay paint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintStyle {
    pub color: [u8; 3],
    pub opacity: f32,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self {
            color: [255, 64, 64],
            opacity: 0.5,
        }
    }
}

impl PaintStyle {
    pub fn alpha(self) -> u8 {
        (self.opacity.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Independent copy of a [`MaskBuffer`]'s pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskSnapshot {
    size: ImageSize,
    alpha: Vec<u8>,
}

impl MaskSnapshot {
    pub fn size(&self) -> ImageSize {
        self.size
    }

    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }
}

/// In-memory mask surface: one alpha byte per source pixel plus a fixed
/// paint colour. Its dimensions never change after construction.
#[derive(Debug, Clone)]
pub struct MaskBuffer {
    size: ImageSize,
    alpha: Vec<u8>,
    style: PaintStyle,
}

impl MaskBuffer {
    pub fn new(size: ImageSize, style: PaintStyle) -> Self {
        Self {
            size,
            alpha: vec![0; size.pixel_count()],
            style,
        }
    }

    pub fn style(&self) -> PaintStyle {
        self.style
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.alpha
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    pub fn painted_pixels(&self) -> usize {
        self.alpha.iter().filter(|value| **value > 0).count()
    }

    /// Paint colour with per-pixel alpha, for drawing over the source image.
    pub fn overlay(&self) -> RgbaImage {
        let [r, g, b] = self.style.color;
        RgbaImage::from_fn(self.size.width, self.size.height, |x, y| {
            let index = y as usize * self.size.width as usize + x as usize;
            Rgba([r, g, b, self.alpha[index]])
        })
    }

    fn stamp_capsule(&mut self, from: ImagePoint, to: ImagePoint, tool: StrokeTool, radius: f32) {
        let alpha = &mut self.alpha;
        match tool {
            StrokeTool::Brush => {
                let paint = self.style.alpha();
                for_each_capsule_pixel(self.size, from, to, radius, |index| {
                    alpha[index] = source_over(alpha[index], paint);
                });
            }
            StrokeTool::Eraser => {
                for_each_capsule_pixel(self.size, from, to, radius, |index| {
                    alpha[index] = 0;
                });
            }
        }
    }
}

impl RasterSurface for MaskBuffer {
    type Snapshot = MaskSnapshot;

    fn size(&self) -> ImageSize {
        self.size
    }

    fn paint_point(&mut self, center: ImagePoint, tool: StrokeTool, radius: f32) {
        self.stamp_capsule(center, center, tool, radius);
    }

    fn paint_segment(&mut self, from: ImagePoint, to: ImagePoint, tool: StrokeTool, diameter: f32) {
        self.stamp_capsule(from, to, tool, diameter / 2.0);
    }

    fn snapshot(&self) -> MaskSnapshot {
        MaskSnapshot {
            size: self.size,
            alpha: self.alpha.clone(),
        }
    }

    fn restore(&mut self, snapshot: &MaskSnapshot) -> Result<()> {
        if snapshot.size != self.size {
            return Err(SurfaceError::SnapshotMismatch {
                expected: self.size,
                found: snapshot.size,
            });
        }
        self.alpha.copy_from_slice(&snapshot.alpha);
        Ok(())
    }

    fn read_alpha(&self) -> Result<Cow<'_, [u8]>> {
        Ok(Cow::Borrowed(&self.alpha))
    }

    fn is_empty(&self) -> bool {
        self.alpha.iter().all(|value| *value == 0)
    }
}
