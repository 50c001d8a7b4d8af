use crate::model::{ImagePoint, Offset, StrokeTool};
use crate::viewport::PinchGesture;

use super::{PointerEvent, PointerId, PointerKind};

/// The in-progress stroke, alive from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSession {
    pub pointer: PointerId,
    pub kind: PointerKind,
    pub tool: StrokeTool,
    pub last_image_point: ImagePoint,
}

impl StrokeSession {
    /// Mouse and touch ids are separate namespaces.
    pub fn owns(&self, event: &PointerEvent) -> bool {
        (self.kind, self.pointer) == (event.kind, event.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing(StrokeSession),
    PanningSingle {
        pointer: PointerId,
        kind: PointerKind,
        /// `press position - pan` at press time.
        anchor: Offset,
    },
    PanningPinch(PinchGesture),
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing(_) => "drawing",
            Self::PanningSingle { .. } => "panning",
            Self::PanningPinch(_) => "pinching",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
