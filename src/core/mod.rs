pub mod capture;
pub mod clock;
pub mod controller;
pub mod input_adapter;
pub mod timer;
pub mod window;

pub use capture::{CaptureManager, CaptureState, CaptureTransition};
pub use clock::Clock;
pub use controller::{Controller, InputSnapshot, Key};
pub use input_adapter::WinitController;
pub use timer::Throttled;
pub use window::Viewport;
