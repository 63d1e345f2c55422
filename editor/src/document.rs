use crate::artwork::{ArtworkItem, HandleType};
use crate::misc::EditorError;
use crate::params::TransformParams;
use crate::pipeline::{apply_all, recompute_artwork};

use bevel_engine::{ArtworkId, NodeId, NodeOverride, NodeOverrides};
use glam::DVec2;
use subpath_rs::Subpath;

/// Owns the artwork items together with the parameters and node overrides they are displayed with.
///
/// Any change to the parameters or the overrides recomputes every user geometry item from its original snapshot. Direct edits
/// only touch the edited item and do not recompute: they bake the edited live geometry into a new snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkDocument {
	items: Vec<ArtworkItem>,
	params: TransformParams,
	overrides: NodeOverrides,
	next_id: u64,
}

impl ArtworkDocument {
	pub fn new() -> Self {
		Self::default()
	}

	fn allocate_id(&mut self) -> ArtworkId {
		let id = ArtworkId(self.next_id);
		self.next_id += 1;
		id
	}

	/// Adds user geometry, snapshotting it as the original and displaying it with the current parameters.
	pub fn add_item(&mut self, subpaths: Vec<Subpath>) -> ArtworkId {
		let id = self.allocate_id();
		let mut item = ArtworkItem::new(id, subpaths);
		recompute_artwork(&mut item, &self.params, &self.overrides);
		debug!("Added {id:?} with {} subpath(s)", item.live().len());

		self.items.push(item);
		id
	}

	/// Adds geometry that is never recomputed.
	pub fn add_non_user_item(&mut self, subpaths: Vec<Subpath>) -> ArtworkId {
		let id = self.allocate_id();
		self.items.push(ArtworkItem::non_user(id, subpaths));
		id
	}

	pub fn remove_item(&mut self, id: ArtworkId) -> Result<ArtworkItem, EditorError> {
		let index = self.items.iter().position(|item| item.id() == id).ok_or(EditorError::UnknownArtwork(id))?;
		Ok(self.items.remove(index))
	}

	pub fn item(&self, id: ArtworkId) -> Option<&ArtworkItem> {
		self.items.iter().find(|item| item.id() == id)
	}

	fn item_mut(&mut self, id: ArtworkId) -> Result<&mut ArtworkItem, EditorError> {
		self.items.iter_mut().find(|item| item.id() == id).ok_or(EditorError::UnknownArtwork(id))
	}

	pub fn items(&self) -> &[ArtworkItem] {
		&self.items
	}

	pub fn params(&self) -> &TransformParams {
		&self.params
	}

	pub fn overrides(&self) -> &NodeOverrides {
		&self.overrides
	}

	fn recompute(&mut self) {
		debug!("Recomputing {} artwork item(s) with {} node override(s)", self.items.len(), self.overrides.len());
		apply_all(&mut self.items, &self.params, &self.overrides);
	}

	pub fn set_params(&mut self, params: TransformParams) {
		self.params = params;
		self.recompute();
	}

	/// Sets the override for one node. The node must belong to an item of this document.
	pub fn set_node_override(&mut self, node: NodeId, node_override: NodeOverride) -> Result<(), EditorError> {
		if self.item(node.path.artwork).is_none() {
			return Err(EditorError::UnknownArtwork(node.path.artwork));
		}

		self.overrides.insert(node, node_override);
		self.recompute();
		Ok(())
	}

	/// Removes the override for one node, returning it if there was one.
	pub fn clear_node_override(&mut self, node: NodeId) -> Option<NodeOverride> {
		let removed = self.overrides.remove(&node);
		if removed.is_some() {
			self.recompute();
		}
		removed
	}

	/// Drops every override whose node no longer exists in the original geometry of its item.
	pub fn retain_node_overrides(&mut self) {
		let items = &self.items;
		let before = self.overrides.len();
		self.overrides.retain(|node, _| {
			items
				.iter()
				.find(|item| item.id() == node.path.artwork)
				.and_then(ArtworkItem::original)
				.and_then(|original| original.get(node.path.subpath))
				.is_some_and(|subpath| node.segment < subpath.len())
		});

		if self.overrides.len() != before {
			debug!("Dropped {} stale node override(s)", before - self.overrides.len());
			self.recompute();
		}
	}

	pub fn move_anchor(&mut self, id: ArtworkId, subpath_index: usize, anchor_index: usize, position: DVec2) -> Result<(), EditorError> {
		self.item_mut(id)?.move_anchor(subpath_index, anchor_index, position)
	}

	pub fn move_handle(&mut self, id: ArtworkId, subpath_index: usize, anchor_index: usize, handle: HandleType, position: DVec2) -> Result<(), EditorError> {
		self.item_mut(id)?.move_handle(subpath_index, anchor_index, handle, position)
	}

	pub fn delete_anchor(&mut self, id: ArtworkId, subpath_index: usize, anchor_index: usize) -> Result<(), EditorError> {
		self.item_mut(id)?.delete_anchor(subpath_index, anchor_index)
	}

	pub fn replace_geometry(&mut self, id: ArtworkId, subpaths: Vec<Subpath>) -> Result<(), EditorError> {
		self.item_mut(id)?.replace_geometry(subpaths);
		Ok(())
	}
}
