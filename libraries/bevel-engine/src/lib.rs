//! Corner bevels that are regenerated from an untouched subpath every time their parameters change.
//!
//! Convex corners are cut with a straight chamfer or a rounded fillet. Concave corners are notched by subtracting a small
//! inset shape centered on the corner. Every corner can override the global settings through a [NodeOverrides] map keyed by
//! the corner's index in the original subpath.
#[macro_use]
extern crate log;

pub mod consts;
mod corner;
mod engine;
mod inset;
mod params;
mod resolve;

pub use corner::{CornerType, classify_corner, classify_corners, corner_turn};
pub use engine::apply_bevel;
pub use inset::inset_shape;
pub use params::*;
pub use resolve::resolve_node_params;

// Re-export the geometry crate that appears in this crate's API
pub use subpath_rs;
