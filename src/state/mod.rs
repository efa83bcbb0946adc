//! State Module - Runtime input state
//!
//! - **Focus** - Focusable registry, Tab cycling
//! - **Keyboard** - Event types, dispatch, handler registry
//! - **Global keys** - Quit and focus shortcuts, routing priority
//! - **Input** - crossterm event conversion and polling

pub mod focus;
pub mod global_keys;
pub mod input;
pub mod keyboard;

pub use focus::FocusId;
pub use global_keys::{GlobalKeysHandle, route_keyboard_event, setup_global_keys};
pub use input::{InputEvent, poll_event, route_event};
pub use keyboard::{KeyState, KeyboardEvent, Modifiers};
