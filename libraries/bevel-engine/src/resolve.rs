use crate::params::{BevelSettings, NodeId, NodeOverrides};

/// Resolves the settings in effect at `node`: every field the node's override defines wins over the global value.
/// Nodes without an override inherit all of `global`.
pub fn resolve_node_params(node: NodeId, global: &BevelSettings, overrides: &NodeOverrides) -> BevelSettings {
	let Some(node_override) = overrides.get(&node) else {
		return *global;
	};

	BevelSettings {
		bevel_type: node_override.bevel_type.unwrap_or(global.bevel_type),
		bevel_size: node_override.bevel_size.unwrap_or(global.bevel_size),
		chamfer_angle: node_override.chamfer_angle.unwrap_or(global.chamfer_angle),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::params::{ArtworkId, BevelType, NodeOverride, PathId};

	const PATH: PathId = PathId::new(ArtworkId(1), 0);

	fn global() -> BevelSettings {
		BevelSettings {
			bevel_type: BevelType::Chamfer,
			bevel_size: 5.,
			chamfer_angle: 30.,
		}
	}

	#[test]
	fn missing_override_inherits_everything() {
		assert_eq!(resolve_node_params(PATH.node(0), &global(), &NodeOverrides::new()), global());
	}

	#[test]
	fn override_fields_replace_global_fields_individually() {
		let mut overrides = NodeOverrides::new();
		overrides.insert(PATH.node(2), NodeOverride::default().with_size(9.));
		overrides.insert(PATH.node(3), NodeOverride::with_type(BevelType::Fillet).with_chamfer_angle(60.));

		let sized = resolve_node_params(PATH.node(2), &global(), &overrides);
		assert_eq!(sized, BevelSettings { bevel_size: 9., ..global() });

		let filleted = resolve_node_params(PATH.node(3), &global(), &overrides);
		assert_eq!(filleted.bevel_type, BevelType::Fillet);
		assert_eq!(filleted.bevel_size, 5.);
		assert_eq!(filleted.chamfer_angle, 60.);

		// Same segment index on another subpath is a different node
		assert_eq!(resolve_node_params(PathId::new(ArtworkId(1), 1).node(2), &global(), &overrides), global());
	}

	#[test]
	fn none_override_suppresses_global_type() {
		let mut overrides = NodeOverrides::new();
		overrides.insert(PATH.node(1), NodeOverride::with_type(BevelType::None));
		assert_eq!(resolve_node_params(PATH.node(1), &global(), &overrides).bevel_type, BevelType::None);
	}
}
