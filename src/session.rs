mod config;
mod editor;
mod error;
mod host;


pub use config::EditorConfig;
pub use editor::EditorSession;
pub use error::{Result, SessionError};
pub use host::{ApplyPayload, EditorHost, EditorVariant};
