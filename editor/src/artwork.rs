use crate::misc::EditorError;
use crate::style::PathStyle;

use bevel_engine::ArtworkId;
use glam::DVec2;
use subpath_rs::{ManipulatorGroup, Subpath};

/// Selects one of the two handles of a [ManipulatorGroup].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HandleType {
	In,
	Out,
}

/// One piece of artwork in a document.
///
/// `original` is the untouched geometry every recompute starts from, one entry per constituent subpath. `live` is what gets
/// displayed. The pipeline only ever rewrites `live`; only direct edits rewrite `original`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArtworkItem {
	id: ArtworkId,
	/// Whether the item takes part in parameter-driven recomputes.
	user_geometry: bool,
	original: Option<Vec<Subpath>>,
	live: Vec<Subpath>,
	pub style: PathStyle,
}

impl ArtworkItem {
	/// Creates user geometry with its original snapshot taken right away, as after an import or a finished drawing.
	pub fn new(id: ArtworkId, subpaths: Vec<Subpath>) -> Self {
		Self {
			id,
			user_geometry: true,
			original: Some(subpaths.clone()),
			live: subpaths,
			style: PathStyle::default(),
		}
	}

	/// Creates user geometry without a snapshot. The first recompute snapshots the live geometry.
	pub fn from_live(id: ArtworkId, subpaths: Vec<Subpath>) -> Self {
		Self {
			id,
			user_geometry: true,
			original: None,
			live: subpaths,
			style: PathStyle::default(),
		}
	}

	/// Creates geometry that parameter changes never touch, such as guides.
	pub fn non_user(id: ArtworkId, subpaths: Vec<Subpath>) -> Self {
		Self {
			id,
			user_geometry: false,
			original: None,
			live: subpaths,
			style: PathStyle::default(),
		}
	}

	pub fn id(&self) -> ArtworkId {
		self.id
	}

	pub fn is_user_geometry(&self) -> bool {
		self.user_geometry
	}

	pub fn original(&self) -> Option<&[Subpath]> {
		self.original.as_deref()
	}

	pub fn live(&self) -> &[Subpath] {
		&self.live
	}

	/// Snapshots the live geometry as the original unless a snapshot already exists.
	pub fn ensure_snapshot(&mut self) -> &[Subpath] {
		self.original.get_or_insert_with(|| self.live.clone())
	}

	/// Replaces the displayed geometry. The original snapshot is left alone.
	pub(crate) fn set_live(&mut self, live: Vec<Subpath>) {
		self.live = live;
	}

	/// Replaces the original snapshot with the current live geometry.
	pub fn snapshot(&mut self) {
		trace!("Snapshotting {} subpath(s) of {:?}", self.live.len(), self.id);
		self.original = Some(self.live.clone());
	}

	fn group_mut(&mut self, subpath_index: usize, anchor_index: usize) -> Result<&mut ManipulatorGroup, EditorError> {
		let subpath = self.live.get_mut(subpath_index).ok_or(EditorError::InvalidSubpath(subpath_index))?;
		subpath.manipulator_group_mut(anchor_index).ok_or(EditorError::InvalidAnchor(anchor_index))
	}

	/// Moves an anchor together with its handles, then re-snapshots.
	pub fn move_anchor(&mut self, subpath_index: usize, anchor_index: usize, position: DVec2) -> Result<(), EditorError> {
		let group = self.group_mut(subpath_index, anchor_index)?;
		let delta = position - group.anchor;
		group.anchor = position;
		group.in_handle = group.in_handle.map(|handle| handle + delta);
		group.out_handle = group.out_handle.map(|handle| handle + delta);

		self.snapshot();
		Ok(())
	}

	/// Places one handle of an anchor at `position`, creating the handle if it was missing, then re-snapshots.
	pub fn move_handle(&mut self, subpath_index: usize, anchor_index: usize, handle: HandleType, position: DVec2) -> Result<(), EditorError> {
		let group = self.group_mut(subpath_index, anchor_index)?;
		match handle {
			HandleType::In => group.in_handle = Some(position),
			HandleType::Out => group.out_handle = Some(position),
		}

		self.snapshot();
		Ok(())
	}

	/// Removes an anchor, then re-snapshots. A subpath left without anchors is removed as well.
	pub fn delete_anchor(&mut self, subpath_index: usize, anchor_index: usize) -> Result<(), EditorError> {
		let subpath = self.live.get_mut(subpath_index).ok_or(EditorError::InvalidSubpath(subpath_index))?;
		subpath.remove_manipulator_group(anchor_index).ok_or(EditorError::InvalidAnchor(anchor_index))?;
		if subpath.is_empty() {
			self.live.remove(subpath_index);
		}

		self.snapshot();
		Ok(())
	}

	/// Replaces the whole geometry, as with the result of a boolean operation, and snapshots it.
	pub fn replace_geometry(&mut self, subpaths: Vec<Subpath>) {
		self.live = subpaths;
		self.snapshot();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::square;
	use pretty_assertions::assert_eq;

	#[test]
	fn lazy_items_snapshot_once() {
		let mut item = ArtworkItem::from_live(ArtworkId(1), vec![square(10.)]);
		assert_eq!(item.original(), None);

		item.ensure_snapshot();
		item.set_live(Vec::new());
		item.ensure_snapshot();
		assert_eq!(item.original(), Some([square(10.)].as_slice()));
	}

	#[test]
	fn moving_an_anchor_carries_its_handles() {
		let mut subpath = square(10.);
		subpath[1].in_handle = Some(DVec2::new(8., 0.));
		let mut item = ArtworkItem::new(ArtworkId(1), vec![subpath]);

		item.move_anchor(0, 1, DVec2::new(12., 1.)).unwrap();
		let group = item.live()[0][1];
		assert_eq!(group.anchor, DVec2::new(12., 1.));
		assert_eq!(group.in_handle, Some(DVec2::new(10., 1.)));
		assert_eq!(group.out_handle, None);
		assert_eq!(item.original(), Some(item.live()));
	}

	#[test]
	fn moving_a_handle_creates_it() {
		let mut item = ArtworkItem::new(ArtworkId(1), vec![square(10.)]);
		item.move_handle(0, 0, HandleType::Out, DVec2::new(3., -2.)).unwrap();
		assert_eq!(item.live()[0][0].out_handle, Some(DVec2::new(3., -2.)));
		assert_eq!(item.original().map(|original| original[0][0].out_handle), Some(Some(DVec2::new(3., -2.))));
	}

	#[test]
	fn invalid_indices_are_errors() {
		let mut item = ArtworkItem::new(ArtworkId(1), vec![square(10.)]);
		assert_eq!(item.move_anchor(1, 0, DVec2::ZERO), Err(EditorError::InvalidSubpath(1)));
		assert_eq!(item.move_handle(0, 4, HandleType::In, DVec2::ZERO), Err(EditorError::InvalidAnchor(4)));
		assert_eq!(item.delete_anchor(0, 9), Err(EditorError::InvalidAnchor(9)));
		assert_eq!(item.live(), [square(10.)].as_slice());
	}

	#[test]
	fn deleting_the_last_anchor_drops_the_subpath() {
		let mut item = ArtworkItem::new(ArtworkId(1), vec![Subpath::from_anchors([DVec2::ZERO], false), square(10.)]);
		item.delete_anchor(0, 0).unwrap();
		assert_eq!(item.live(), [square(10.)].as_slice());
		assert_eq!(item.original(), Some([square(10.)].as_slice()));
	}

	#[test]
	fn replacing_geometry_resnapshots() {
		let mut item = ArtworkItem::from_live(ArtworkId(1), vec![square(10.)]);
		item.replace_geometry(vec![square(4.), square(2.)]);
		assert_eq!(item.original().map(<[Subpath]>::len), Some(2));
	}
}
