use crate::color::Color;

// GEOMETRY TRANSFORM
/// Horizontal scale in percent of the original width, so 100 leaves the geometry unscaled.
pub const DEFAULT_WIDTH: f64 = 100.;
/// Horizontal shear angle in degrees.
pub const DEFAULT_SLANT: f64 = 0.;
pub const DEFAULT_WEIGHT: f64 = 0.;

// BEVEL
pub const DEFAULT_BEVEL_SIZE: f64 = 10.;
pub const DEFAULT_CHAMFER_ANGLE: f64 = bevel_engine::consts::DEFAULT_CHAMFER_ANGLE;

// STYLE
pub const DEFAULT_STROKE_WIDTH: f64 = 2.;
pub const DEFAULT_FILL_COLOR: Color = Color::BLACK;
pub const DEFAULT_OPACITY: f64 = 1.;
