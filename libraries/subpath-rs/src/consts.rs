// Implementation constants

/// Two anchors closer than this are treated as the same point when building or merging subpaths.
pub const POINT_COINCIDENCE_EPSILON: f64 = 1e-9;
/// Accuracy passed to kurbo's arc length solvers. Exact for lines, approximate for quadratic and cubic curves.
pub const ARCLEN_ACCURACY: f64 = 1e-9;
/// Maximum deviation allowed when approximating a circular arc by cubic Bézier segments.
pub const ARC_TOLERANCE: f64 = 1e-4;
/// Below this magnitude the three points given to an arc are considered collinear.
pub const COLLINEAR_DETERMINANT_EPSILON: f64 = 1e-12;

// Method argument defaults

/// Based on <https://pomax.github.io/bezierinfo/#circles_cubic>.
pub const ELLIPSE_HANDLE_OFFSET_FACTOR: f64 = 0.551784777779014;
