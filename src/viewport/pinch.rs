use crate::model::{Offset, ScreenPoint, offset};

use super::Viewport;

/// Finger spread below which the distance ratio is too noisy to zoom with.
const MIN_PINCH_DISTANCE: f32 = 1.0;

/// Snapshot of the viewport at the moment a two-finger gesture starts.
///
/// Every frame is recomputed from this snapshot rather than from the
/// previous frame, so rounding never accumulates over a long pinch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchGesture {
    pub pan_at_start: Offset,
    pub zoom_at_start: f32,
    pub distance_at_start: f32,
    pub midpoint_at_start: ScreenPoint,
}

impl PinchGesture {
    pub fn begin(viewport: &Viewport, first: ScreenPoint, second: ScreenPoint) -> Self {
        Self {
            pan_at_start: viewport.pan(),
            zoom_at_start: viewport.zoom(),
            distance_at_start: first.distance(second),
            midpoint_at_start: first.midpoint(second),
        }
    }

    /// Zoom and pan for the current finger positions.
    pub fn resolve(
        &self,
        viewport: &Viewport,
        first: ScreenPoint,
        second: ScreenPoint,
    ) -> (f32, Offset) {
        let distance = first.distance(second);
        let midpoint = first.midpoint(second);

        let zoom = if self.distance_at_start < MIN_PINCH_DISTANCE {
            self.zoom_at_start
        } else {
            viewport
                .bounds()
                .clamp(self.zoom_at_start * (distance / self.distance_at_start))
        };

        // Image point that sat under the starting midpoint follows the live midpoint.
        let anchor_x = (self.midpoint_at_start.x - self.pan_at_start.x) / self.zoom_at_start;
        let anchor_y = (self.midpoint_at_start.y - self.pan_at_start.y) / self.zoom_at_start;
        let pan = offset(midpoint.x - anchor_x * zoom, midpoint.y - anchor_y * zoom);
        (zoom, pan)
    }

    pub fn apply(&self, viewport: &mut Viewport, first: ScreenPoint, second: ScreenPoint) {
        let (zoom, pan) = self.resolve(viewport, first, second);
        viewport.set_zoom_and_pan(zoom, pan);
    }
}
