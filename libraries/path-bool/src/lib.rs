//! Boolean operations between closed subpaths.
//!
//! Operands are flattened into polygons and combined with the `geo` crate's overlay. The resulting rings are converted back
//! into closed subpaths, with every run of edges that follows a curve of an operand replaced by a piece of that curve.
#[macro_use]
extern crate log;

mod convert;
mod restore;
mod subtract;

pub use subtract::{subtract, subtract_all};

use thiserror::Error;

/// Maximum distance between a curve and the polyline that replaces it during a boolean operation.
pub const FLATTEN_TOLERANCE: f64 = 1e-3;

/// The reasons a boolean operation can refuse its operands.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BooleanError {
	#[error("Boolean operands must be closed subpaths")]
	OpenPath,

	#[error("Boolean operand encloses no area (fewer than 3 distinct points after flattening)")]
	Degenerate,
}
