use serde::{Deserialize, Serialize};

use super::{ModelError, Result};

/// A position in viewport (screen) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// A position in source-image pixels, independent of magnification.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImagePoint {
    pub x: f32,
    pub y: f32,
}

/// Screen-space translation. Also used for the pan offset itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

pub const fn screen(x: f32, y: f32) -> ScreenPoint {
    ScreenPoint { x, y }
}

pub const fn image_point(x: f32, y: f32) -> ImagePoint {
    ImagePoint { x, y }
}

pub const fn offset(x: f32, y: f32) -> Offset {
    Offset { x, y }
}

impl ScreenPoint {
    pub fn distance(self, other: ScreenPoint) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn midpoint(self, other: ScreenPoint) -> ScreenPoint {
        screen((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `self - pan`, the anchor used by drag panning.
    pub fn relative_to(self, pan: Offset) -> Offset {
        offset(self.x - pan.x, self.y - pan.y)
    }
}

impl ImagePoint {
    pub fn distance(self, other: ImagePoint) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Pixel dimensions of a raster. Never zero on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ModelError::EmptyImage { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }
}

/// On-screen area available to the editor canvas, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

impl ContainerSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
