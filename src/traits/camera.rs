use glam::{DMat4, DVec3};

/// Read-only camera view for the rendering layer
pub trait ViewProvider {
    /// Get the view matrix computed by the last tick
    fn view_matrix(&self) -> DMat4;

    /// Get the camera position in world space
    fn position(&self) -> DVec3;

    /// Get the camera forward direction
    fn forward(&self) -> DVec3;
}
