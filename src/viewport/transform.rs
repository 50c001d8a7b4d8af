use serde::{Deserialize, Serialize};

use crate::model::{
    ContainerSize, ImagePoint, ImageSize, Offset, ScreenPoint, image_point, offset, screen,
};

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
        }
    }
}

impl ZoomBounds {
    pub fn clamp(self, zoom: f32) -> f32 {
        if zoom.is_nan() {
            return self.min;
        }
        zoom.clamp(self.min, self.max)
    }
}

/// Maps between screen and image pixels: `screen = image * zoom + pan`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    zoom: f32,
    pan: Offset,
    bounds: ZoomBounds,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, Offset::default(), ZoomBounds::default())
    }
}

impl Viewport {
    pub fn new(zoom: f32, pan: Offset, bounds: ZoomBounds) -> Self {
        Self {
            zoom: bounds.clamp(zoom),
            pan,
            bounds,
        }
    }

    /// Fits the whole image into `container`, centred, never starting
    /// above `max_initial_zoom`.
    pub fn fit(
        image: ImageSize,
        container: ContainerSize,
        bounds: ZoomBounds,
        max_initial_zoom: f32,
    ) -> Self {
        let image_w = image.width as f32;
        let image_h = image.height as f32;
        let fit = (container.width / image_w)
            .min(container.height / image_h)
            .min(max_initial_zoom);
        let zoom = bounds.clamp(fit);
        let pan = offset(
            (container.width - image_w * zoom) / 2.0,
            (container.height - image_h * zoom) / 2.0,
        );
        log::debug!(
            "fit {}x{} into {}x{}: zoom {zoom:.3}",
            image.width,
            image.height,
            container.width,
            container.height
        );
        Self { zoom, pan, bounds }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Offset {
        self.pan
    }

    pub fn bounds(&self) -> ZoomBounds {
        self.bounds
    }

    pub fn to_image_space(&self, point: ScreenPoint) -> ImagePoint {
        image_point(
            (point.x - self.pan.x) / self.zoom,
            (point.y - self.pan.y) / self.zoom,
        )
    }

    pub fn to_screen_space(&self, point: ImagePoint) -> ScreenPoint {
        screen(
            point.x * self.zoom + self.pan.x,
            point.y * self.zoom + self.pan.y,
        )
    }

    /// Changes magnification while keeping the image point under `anchor` fixed.
    pub fn zoom_at(&mut self, anchor: ScreenPoint, new_zoom: f32) {
        let next = self.bounds.clamp(new_zoom);
        let ratio = next / self.zoom;
        self.pan = offset(
            anchor.x - (anchor.x - self.pan.x) * ratio,
            anchor.y - (anchor.y - self.pan.y) * ratio,
        );
        self.zoom = next;
    }

    pub fn pan_by(&mut self, delta: Offset) {
        self.pan.x += delta.x;
        self.pan.y += delta.y;
    }

    pub fn set_pan(&mut self, pan: Offset) {
        self.pan = pan;
    }

    pub(crate) fn set_zoom_and_pan(&mut self, zoom: f32, pan: Offset) {
        self.zoom = self.bounds.clamp(zoom);
        self.pan = pan;
    }
}
