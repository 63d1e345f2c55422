// CORNERS
/// A corner whose turn cross product is smaller than this (in absolute value) is treated as a straight continuation.
pub const COLLINEAR_CROSS_EPSILON: f64 = 1e-6;

// BEVELS
/// Accuracy used when measuring curves and locating the trim points of a bevel.
pub const BEVEL_ARCLEN_ACCURACY: f64 = 1e-9;
/// An anchor produced by an inset subtraction that lies this close to an original anchor inherits that anchor's node id.
pub const ANCHOR_MATCH_TOLERANCE: f64 = 1e-6;

// DEFAULTS
pub const DEFAULT_CHAMFER_ANGLE: f64 = 45.;
