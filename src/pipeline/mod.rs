//! Reactive Pipeline
//!
//! This module connects the view tree to the terminal.
//!
//! # Pipeline Architecture
//!
//! ```text
//! App (signals + store) → frameDerived → render effect → DiffRenderer
//! ```
//!
//! ## Data Flow
//!
//! 1. **frameDerived** - Reads terminal size, renders the App into a FrameBuffer
//! 2. **render effect** - Monitors frameDerived, writes only changed cells
//!
//! Key handlers mutate signals; the effect picks the change up and redraws.

pub mod frame;
pub mod mount;
pub mod terminal;

// Re-exports
pub use frame::{FrameResult, create_frame_derived, render_frame};
pub use mount::{MountHandle, mount, run, tick};
pub use terminal::{set_terminal_size, terminal_height, terminal_width};
