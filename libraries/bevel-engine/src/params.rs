use crate::consts::DEFAULT_CHAMFER_ANGLE;

use rustc_hash::FxHashMap;

/// Stable identifier of an artwork item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtworkId(pub u64);

/// Identifies one constituent subpath of an artwork item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathId {
	pub artwork: ArtworkId,
	pub subpath: usize,
}

impl PathId {
	pub const fn new(artwork: ArtworkId, subpath: usize) -> Self {
		Self { artwork, subpath }
	}

	/// The node at `segment` (an anchor index) of this subpath.
	pub const fn node(self, segment: usize) -> NodeId {
		NodeId { path: self, segment }
	}
}

/// Identifies one anchor by its index in the original, unbeveled subpath.
///
/// Indices into beveled output are meaningless: beveling inserts and removes anchors, so a `NodeId` must always be resolved
/// against the original subpath it was created from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId {
	pub path: PathId,
	pub segment: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BevelType {
	#[default]
	None,
	/// Cuts a convex corner with a straight line.
	Chamfer,
	/// Rounds a convex corner with a circular arc.
	Fillet,
	/// Notches a concave corner with a square.
	ConcaveSquare,
	/// Notches a concave corner with an octagon.
	ConcaveChamfer,
	/// Notches a concave corner with a circle.
	ConcaveRound,
}

impl std::fmt::Display for BevelType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			BevelType::None => "None",
			BevelType::Chamfer => "Chamfer",
			BevelType::Fillet => "Fillet",
			BevelType::ConcaveSquare => "Concave Square",
			BevelType::ConcaveChamfer => "Concave Chamfer",
			BevelType::ConcaveRound => "Concave Round",
		};
		write!(f, "{name}")
	}
}

impl BevelType {
	/// Whether this type applies to convex corners.
	pub fn is_convex(self) -> bool {
		matches!(self, BevelType::Chamfer | BevelType::Fillet)
	}

	/// Whether this type applies to concave corners.
	pub fn is_concave(self) -> bool {
		matches!(self, BevelType::ConcaveSquare | BevelType::ConcaveChamfer | BevelType::ConcaveRound)
	}
}

/// The bevel settings in effect at a corner: either the global settings or the result of applying a [NodeOverride] to them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BevelSettings {
	pub bevel_type: BevelType,
	pub bevel_size: f64,
	/// Carried through resolution, but has no geometric effect.
	pub chamfer_angle: f64,
}

impl Default for BevelSettings {
	fn default() -> Self {
		Self {
			bevel_type: BevelType::None,
			bevel_size: 0.,
			chamfer_angle: DEFAULT_CHAMFER_ANGLE,
		}
	}
}

impl BevelSettings {
	pub fn new(bevel_type: BevelType, bevel_size: f64) -> Self {
		Self {
			bevel_type,
			bevel_size,
			..Default::default()
		}
	}
}

/// Partial bevel settings for one node. Fields left as `None` inherit the global value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeOverride {
	pub bevel_type: Option<BevelType>,
	pub bevel_size: Option<f64>,
	pub chamfer_angle: Option<f64>,
}

impl NodeOverride {
	/// An override that only replaces the bevel type. `BevelType::None` suppresses beveling at the node.
	pub fn with_type(bevel_type: BevelType) -> Self {
		Self {
			bevel_type: Some(bevel_type),
			..Default::default()
		}
	}

	pub fn with_size(mut self, bevel_size: f64) -> Self {
		self.bevel_size = Some(bevel_size);
		self
	}

	pub fn with_chamfer_angle(mut self, chamfer_angle: f64) -> Self {
		self.chamfer_angle = Some(chamfer_angle);
		self
	}
}

/// Per-node overrides of the global bevel settings.
///
/// Entries are never purged automatically when the geometry they refer to changes. Owners that know which nodes still exist
/// can drop stale entries with [NodeOverrides::retain].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<NodeOverrideEntry>", into = "Vec<NodeOverrideEntry>"))]
pub struct NodeOverrides(FxHashMap<NodeId, NodeOverride>);

/// Serialized form of a single [NodeOverrides] entry, since JSON object keys must be strings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeOverrideEntry {
	pub node: NodeId,
	#[cfg_attr(feature = "serde", serde(rename = "override"))]
	pub node_override: NodeOverride,
}

impl From<Vec<NodeOverrideEntry>> for NodeOverrides {
	fn from(entries: Vec<NodeOverrideEntry>) -> Self {
		Self(entries.into_iter().map(|entry| (entry.node, entry.node_override)).collect())
	}
}

impl From<NodeOverrides> for Vec<NodeOverrideEntry> {
	fn from(overrides: NodeOverrides) -> Self {
		let mut entries: Vec<_> = overrides.0.into_iter().map(|(node, node_override)| NodeOverrideEntry { node, node_override }).collect();
		entries.sort_by_key(|entry| entry.node);
		entries
	}
}

impl NodeOverrides {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, node: &NodeId) -> Option<&NodeOverride> {
		self.0.get(node)
	}

	/// Sets the override for `node`, returning the one it replaced.
	pub fn insert(&mut self, node: NodeId, node_override: NodeOverride) -> Option<NodeOverride> {
		self.0.insert(node, node_override)
	}

	pub fn remove(&mut self, node: &NodeId) -> Option<NodeOverride> {
		self.0.remove(node)
	}

	/// Whether any node of the subpath `path` has an override.
	pub fn has_overrides_for(&self, path: PathId) -> bool {
		self.0.keys().any(|node| node.path == path)
	}

	/// Keeps only the overrides for which `keep` returns true.
	pub fn retain(&mut self, mut keep: impl FnMut(&NodeId, &NodeOverride) -> bool) {
		self.0.retain(|node, node_override| keep(node, node_override))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &NodeOverride)> {
		self.0.iter()
	}
}

impl FromIterator<(NodeId, NodeOverride)> for NodeOverrides {
	fn from_iter<T: IntoIterator<Item = (NodeId, NodeOverride)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}
