mod angle;
mod basis;
mod view;

pub use angle::{clamp_pitch, wrap_angle, MAX_PITCH, MIN_PITCH};
pub use basis::Basis;
pub use view::{look_at, perspective, PITCH_LIMIT_SIN_MARGIN};
