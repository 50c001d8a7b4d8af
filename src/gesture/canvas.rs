use crate::history::HistoryStack;
use crate::model::BrushSettings;
use crate::surface::{RasterSurface, Result};
use crate::viewport::Viewport;

/// Everything a gesture can mutate: the view, the mask and its history.
pub struct Canvas<S: RasterSurface> {
    viewport: Viewport,
    surface: S,
    history: HistoryStack<S::Snapshot>,
    brush: BrushSettings,
}

impl<S: RasterSurface> Canvas<S> {
    /// The surface's current pixels become the pristine history entry.
    pub fn new(surface: S, viewport: Viewport, brush: BrushSettings) -> Self {
        let history = HistoryStack::new(surface.snapshot());
        Self {
            viewport,
            surface,
            history,
            brush,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn history(&self) -> &HistoryStack<S::Snapshot> {
        &self.history
    }

    pub fn brush(&self) -> BrushSettings {
        self.brush
    }

    pub fn set_brush_size(&mut self, size_px: u32) {
        self.brush.set_size_px(size_px);
    }

    pub fn brush_radius(&self) -> f32 {
        self.brush.image_radius(self.viewport.zoom())
    }

    pub fn brush_diameter(&self) -> f32 {
        self.brush.image_diameter(self.viewport.zoom())
    }

    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn commit_stroke(&mut self) {
        self.history.commit_from(&self.surface);
    }

    pub fn undo(&mut self) -> Result<bool> {
        self.history.undo_into(&mut self.surface)
    }

    pub fn redo(&mut self) -> Result<bool> {
        self.history.redo_into(&mut self.surface)
    }

    /// Back to the pristine mask with a single history entry.
    pub fn clear(&mut self) -> Result<()> {
        self.history.reset_into(&mut self.surface)
    }
}
