//! Grid sizing for the host's picker node.

/// Width assumed when the host cannot measure its root node.
pub const GIF_DEFAULT_WIDTH: f64 = 500.0;

/// Horizontal margin kept on each side of the grid.
pub const GIF_MARGIN_ENDS: f64 = 12.0;

/// Usable grid width for a measured root width.
pub fn grid_width(measured_root_width: Option<f64>) -> f64 {
    measured_root_width.unwrap_or(GIF_DEFAULT_WIDTH) - 2.0 * GIF_MARGIN_ENDS
}
