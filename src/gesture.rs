mod canvas;
mod dispatcher;
mod events;
mod shortcuts;
mod state;


pub use canvas::Canvas;
pub use dispatcher::{DEFAULT_WHEEL_SENSITIVITY, GestureDispatcher, Outcome};
pub use events::{
    InputEvent, Key, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerId, PointerKind,
    PointerPhase,
};
pub use shortcuts::{Shortcut, shortcut_for};
pub use state::{GestureState, StrokeSession};
