use std::borrow::Cow;

use crate::model::{ImagePoint, ImageSize, StrokeTool};

use super::Result;

/// A paintable alpha plane at source-image resolution.
///
/// Hosts may back this with whatever pixel store they have; the gesture
/// and history code only ever talk to this trait.
pub trait RasterSurface {
    type Snapshot: Clone;

    fn size(&self) -> ImageSize;

    /// Stamps a filled circle. Radii below 0.75 image px are raised to it so a
    /// dab always covers the pixel it lands in.
    fn paint_point(&mut self, center: ImagePoint, tool: StrokeTool, radius: f32);

    /// Round-capped stroke of width `diameter` from `from` to `to`. Each pixel
    /// under the stroke is touched once per call. The same radius floor applies.
    fn paint_segment(&mut self, from: ImagePoint, to: ImagePoint, tool: StrokeTool, diameter: f32);

    /// Deep copy of the current pixels.
    fn snapshot(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: &Self::Snapshot) -> Result<()>;

    /// Row-major alpha values, `width * height` long.
    fn read_alpha(&self) -> Result<Cow<'_, [u8]>>;

    /// True when no pixel carries paint. An unreadable surface counts as empty.
    fn is_empty(&self) -> bool {
        match self.read_alpha() {
            Ok(alpha) => alpha.iter().all(|value| *value == 0),
            Err(error) => {
                log::warn!("treating mask as empty: {error}");
                true
            }
        }
    }
}
