//! Subpath-rs: editable vector subpaths for the Facet editor.
//!
//! A [Subpath] is an ordered list of [ManipulatorGroup]s (an anchor plus optional in and out handles).
//! Curves between adjacent groups are never stored, they are derived on demand as [kurbo::PathSeg]s.
#[macro_use]
extern crate log;

#[cfg(test)]
pub(crate) mod compare;

pub mod consts;
mod subpath;
mod utils;

pub use subpath::*;
pub use utils::{dvec2_to_point, point_to_dvec2, scale_about, shear_about};

// Re-export dependencies that users of this crate will need
pub use glam;
pub use kurbo;
