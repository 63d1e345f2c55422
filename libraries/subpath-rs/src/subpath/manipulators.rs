use super::*;

impl Subpath {
	/// Get a mutable reference to the manipulator group at `index`, if it exists.
	pub fn manipulator_group_mut(&mut self, index: usize) -> Option<&mut ManipulatorGroup> {
		self.manipulator_groups.get_mut(index)
	}

	/// Remove the manipulator group at `index`, returning it if it existed.
	/// A closed subpath left with fewer than 2 groups is reopened.
	pub fn remove_manipulator_group(&mut self, index: usize) -> Option<ManipulatorGroup> {
		if index >= self.len() {
			return None;
		}
		let removed = self.manipulator_groups.remove(index);
		if self.closed && self.len() < 2 {
			debug!("Reopening subpath left with {} manipulator group(s)", self.len());
			self.closed = false;
		}
		Some(removed)
	}
}
