//! Terminal renderer - the "blind" output layer.
//!
//! The renderer knows only about cells. It doesn't understand posts, the
//! store or reactivity. It takes a filled FrameBuffer and writes the cells
//! that changed since the last frame.

pub mod buffer;
pub mod diff;
pub mod output;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer};
