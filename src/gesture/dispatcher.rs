use crate::model::{ScreenPoint, Tool, ToolState};
use crate::surface::{RasterSurface, Result};
use crate::viewport::PinchGesture;

use super::shortcuts::{Shortcut, shortcut_for};
use super::{
    Canvas, GestureState, InputEvent, PointerButton, PointerEvent, PointerId, PointerKind,
    PointerPhase, StrokeSession,
};

pub const DEFAULT_WHEEL_SENSITIVITY: f32 = 0.001;

/// What a dispatched event did, so the host knows what to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Painted,
    StrokeCommitted,
    ViewChanged,
    ToolChanged(Tool),
    BrushChanged(u32),
    HistoryChanged,
    CloseRequested,
}

/// The first two touch points, in arrival order. Later touches are dropped.
#[derive(Debug, Clone, Default)]
struct TouchPoints {
    points: Vec<(PointerId, ScreenPoint)>,
}

impl TouchPoints {
    const LIMIT: usize = 2;

    fn insert(&mut self, id: PointerId, position: ScreenPoint) -> bool {
        if let Some(entry) = self.points.iter_mut().find(|(known, _)| *known == id) {
            entry.1 = position;
            return true;
        }
        if self.points.len() >= Self::LIMIT {
            return false;
        }
        self.points.push((id, position));
        true
    }

    fn update(&mut self, id: PointerId, position: ScreenPoint) -> bool {
        match self.points.iter_mut().find(|(known, _)| *known == id) {
            Some(entry) => {
                entry.1 = position;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: PointerId) -> bool {
        let before = self.points.len();
        self.points.retain(|(known, _)| *known != id);
        self.points.len() != before
    }

    fn pair(&self) -> Option<(ScreenPoint, ScreenPoint)> {
        match self.points.as_slice() {
            [(_, first), (_, second)] => Some((*first, *second)),
            _ => None,
        }
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn clear(&mut self) {
        self.points.clear();
    }
}

/// Routes all editor input through one state machine.
#[derive(Debug, Clone)]
pub struct GestureDispatcher {
    state: GestureState,
    tools: ToolState,
    touches: TouchPoints,
    wheel_sensitivity: f32,
}

impl Default for GestureDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_WHEEL_SENSITIVITY)
    }
}

impl GestureDispatcher {
    pub fn new(wheel_sensitivity: f32) -> Self {
        Self {
            state: GestureState::Idle,
            tools: ToolState::default(),
            touches: TouchPoints::default(),
            wheel_sensitivity,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn tools(&self) -> ToolState {
        self.tools
    }

    pub fn dispatch<S: RasterSurface>(
        &mut self,
        event: &InputEvent,
        canvas: &mut Canvas<S>,
    ) -> Result<Outcome> {
        let outcome = match event {
            InputEvent::Pointer(pointer) if !pointer.position.is_finite() => {
                log::warn!("ignoring pointer event at non-finite position");
                Outcome::Ignored
            }
            InputEvent::Wheel { position, delta_y }
                if !(position.is_finite() && delta_y.is_finite()) =>
            {
                log::warn!("ignoring non-finite wheel event");
                Outcome::Ignored
            }
            InputEvent::Pointer(pointer) => self.on_pointer(pointer, canvas),
            InputEvent::Wheel { position, delta_y } => {
                let zoom = canvas.viewport().zoom();
                let next = zoom - delta_y * self.wheel_sensitivity;
                canvas.viewport_mut().zoom_at(*position, next);
                Outcome::ViewChanged
            }
            InputEvent::Key(key) => match shortcut_for(key) {
                Some(shortcut) => self.on_shortcut(shortcut, canvas)?,
                None => Outcome::Ignored,
            },
            InputEvent::ToolSelect { tool } => {
                self.on_shortcut(Shortcut::SelectTool(*tool), canvas)?
            }
            InputEvent::SetBrushSize { size_px } => {
                canvas.set_brush_size(*size_px);
                Outcome::BrushChanged(canvas.brush().size_px())
            }
            InputEvent::Undo => self.on_shortcut(Shortcut::Undo, canvas)?,
            InputEvent::Redo => self.on_shortcut(Shortcut::Redo, canvas)?,
            InputEvent::ClearMask => {
                if !self.state.is_idle() || canvas.is_empty() {
                    Outcome::Ignored
                } else {
                    canvas.clear()?;
                    Outcome::HistoryChanged
                }
            }
            InputEvent::Close => self.on_shortcut(Shortcut::Close, canvas)?,
        };
        Ok(outcome)
    }

    /// Drops any gesture in flight without committing it.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.touches.clear();
        self.tools.space_pan = false;
    }

    fn on_shortcut<S: RasterSurface>(
        &mut self,
        shortcut: Shortcut,
        canvas: &mut Canvas<S>,
    ) -> Result<Outcome> {
        let outcome = match shortcut {
            Shortcut::Close => {
                self.reset();
                Outcome::CloseRequested
            }
            Shortcut::SelectTool(tool) => {
                self.tools.selected = tool;
                Outcome::ToolChanged(tool)
            }
            Shortcut::SpacePan(held) => {
                if self.tools.space_pan == held {
                    Outcome::Ignored
                } else {
                    self.tools.space_pan = held;
                    Outcome::ToolChanged(self.tools.effective())
                }
            }
            Shortcut::Undo | Shortcut::Redo if !self.state.is_idle() => {
                log::debug!("history shortcut ignored while {}", self.state.name());
                Outcome::Ignored
            }
            Shortcut::Undo => history_outcome(canvas.undo()?),
            Shortcut::Redo => history_outcome(canvas.redo()?),
        };
        Ok(outcome)
    }

    fn on_pointer<S: RasterSurface>(
        &mut self,
        event: &PointerEvent,
        canvas: &mut Canvas<S>,
    ) -> Outcome {
        let state = std::mem::take(&mut self.state);
        let before = state.name();
        let (next, outcome) = match event.phase {
            PointerPhase::Down => self.on_down(state, event, canvas),
            PointerPhase::Move => self.on_move(state, event, canvas),
            PointerPhase::Up | PointerPhase::Leave | PointerPhase::Cancel => {
                self.on_release(state, event, canvas)
            }
        };
        if next.name() != before {
            log::debug!("gesture {} -> {}", before, next.name());
        }
        self.state = next;
        outcome
    }

    fn on_down<S: RasterSurface>(
        &mut self,
        state: GestureState,
        event: &PointerEvent,
        canvas: &mut Canvas<S>,
    ) -> (GestureState, Outcome) {
        if event.kind == PointerKind::Touch {
            if !self.touches.insert(event.id, event.position) {
                log::warn!("ignoring extra touch point {}", event.id);
                return (state, Outcome::Ignored);
            }
            if let Some((first, second)) = self.touches.pair() {
                let mut outcome = Outcome::ViewChanged;
                if let GestureState::Drawing(_) = state {
                    // Keep buffer and history in step before the stroke is dropped.
                    canvas.commit_stroke();
                    outcome = Outcome::StrokeCommitted;
                }
                let pinch = PinchGesture::begin(canvas.viewport(), first, second);
                return (GestureState::PanningPinch(pinch), outcome);
            }
        }

        if !state.is_idle() {
            return (state, Outcome::Ignored);
        }

        let pans = event.button != PointerButton::Primary || self.tools.effective() == Tool::Pan;
        if pans {
            let anchor = event.position.relative_to(canvas.viewport().pan());
            return (
                GestureState::PanningSingle {
                    pointer: event.id,
                    kind: event.kind,
                    anchor,
                },
                Outcome::Ignored,
            );
        }

        match self.tools.effective().stroke() {
            Some(tool) => {
                let point = canvas.viewport().to_image_space(event.position);
                let radius = canvas.brush_radius();
                canvas.surface_mut().paint_point(point, tool, radius);
                let session = StrokeSession {
                    pointer: event.id,
                    kind: event.kind,
                    tool,
                    last_image_point: point,
                };
                (GestureState::Drawing(session), Outcome::Painted)
            }
            None => (state, Outcome::Ignored),
        }
    }

    fn on_move<S: RasterSurface>(
        &mut self,
        state: GestureState,
        event: &PointerEvent,
        canvas: &mut Canvas<S>,
    ) -> (GestureState, Outcome) {
        if event.kind == PointerKind::Touch && !self.touches.update(event.id, event.position) {
            return (state, Outcome::Ignored);
        }

        match state {
            GestureState::Drawing(mut session) if session.owns(event) => {
                let point = canvas.viewport().to_image_space(event.position);
                let diameter = canvas.brush_diameter();
                canvas
                    .surface_mut()
                    .paint_segment(session.last_image_point, point, session.tool, diameter);
                session.last_image_point = point;
                (GestureState::Drawing(session), Outcome::Painted)
            }
            GestureState::PanningSingle {
                pointer,
                kind,
                anchor,
            } if (kind, pointer) == (event.kind, event.id) => {
                canvas
                    .viewport_mut()
                    .set_pan(event.position.relative_to(anchor));
                (state, Outcome::ViewChanged)
            }
            GestureState::PanningPinch(pinch) => match self.touches.pair() {
                Some((first, second)) => {
                    pinch.apply(canvas.viewport_mut(), first, second);
                    (state, Outcome::ViewChanged)
                }
                None => (state, Outcome::Ignored),
            },
            other => (other, Outcome::Ignored),
        }
    }

    fn on_release<S: RasterSurface>(
        &mut self,
        state: GestureState,
        event: &PointerEvent,
        canvas: &mut Canvas<S>,
    ) -> (GestureState, Outcome) {
        if event.kind == PointerKind::Touch {
            self.touches.remove(event.id);
        }

        match state {
            GestureState::Drawing(session) if session.owns(event) => {
                canvas.commit_stroke();
                (GestureState::Idle, Outcome::StrokeCommitted)
            }
            GestureState::PanningSingle { pointer, kind, .. }
                if (kind, pointer) == (event.kind, event.id) =>
            {
                (GestureState::Idle, Outcome::Ignored)
            }
            GestureState::PanningPinch(_) if self.touches.is_empty() => {
                (GestureState::Idle, Outcome::Ignored)
            }
            other => (other, Outcome::Ignored),
        }
    }
}

fn history_outcome(changed: bool) -> Outcome {
    if changed {
        Outcome::HistoryChanged
    } else {
        Outcome::Ignored
    }
}
