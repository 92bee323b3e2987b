//! Controller layer: control events and the state owner that re-derives the
//! catalog view on every change.

pub mod events;
pub mod orchestration;

pub use events::{parse_session_line, ControlEvent, SessionCommand};
pub use orchestration::Controller;
