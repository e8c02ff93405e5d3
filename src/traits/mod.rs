pub mod camera;
pub mod window;

pub use camera::*;
pub use window::*;
