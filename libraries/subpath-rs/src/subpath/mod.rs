mod builder;
mod core;
mod lookup;
mod manipulators;
mod structs;
mod transform;
pub use builder::SubpathBuilder;
pub use lookup::combined_bounding_box;
pub use structs::*;

use kurbo::PathSeg;
use std::fmt::{Debug, Formatter, Result};
use std::ops::{Index, IndexMut};

/// Structure used to represent a path composed of Bézier curves between consecutive [ManipulatorGroup]s.
#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subpath {
	manipulator_groups: Vec<ManipulatorGroup>,
	pub closed: bool,
}

/// Iteration structure for iterating across each curve of a `Subpath`, using an intermediate [PathSeg] representation.
pub struct SubpathIter<'a> {
	index: usize,
	subpath: &'a Subpath,
}

impl Index<usize> for Subpath {
	type Output = ManipulatorGroup;

	fn index(&self, index: usize) -> &Self::Output {
		assert!(index < self.len(), "Index out of bounds in trait Index of SubPath.");
		&self.manipulator_groups[index]
	}
}

impl IndexMut<usize> for Subpath {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		assert!(index < self.len(), "Index out of bounds in trait IndexMut of SubPath.");
		&mut self.manipulator_groups[index]
	}
}

impl Iterator for SubpathIter<'_> {
	type Item = PathSeg;

	// Returns the curve of each `Subpath` segment, defined between a pair of adjacent manipulator groups.
	fn next(&mut self) -> Option<Self::Item> {
		if self.index >= self.subpath.len_segments() {
			return None;
		}
		let start_index = self.index;
		let end_index = (self.index + 1) % self.subpath.len();
		self.index += 1;

		Some(self.subpath[start_index].to_bezier(&self.subpath[end_index]))
	}
}

impl Debug for Subpath {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		f.debug_struct("Subpath").field("closed", &self.closed).field("manipulator_groups", &self.manipulator_groups).finish()
	}
}
