//! Free-fly camera controller
//!
//! Turns per-frame input snapshots (pointer position, held keys, focus,
//! button presses) and elapsed time into a view matrix. Windowing and
//! rendering stay with the host; see `src/main.rs` for a winit host loop.

pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod motion;
pub mod orientation;
pub mod traits;
pub mod types;
pub mod window;

pub use camera::{CameraController, CameraState, TickOutcome};
pub use config::FlyConfig;
pub use orientation::{LookScheme, Orientation};
