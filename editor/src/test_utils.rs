use crate::document::ArtworkDocument;
use crate::params::TransformParams;

use bevel_engine::ArtworkId;
use glam::DVec2;
use subpath_rs::Subpath;

/// A set of utility functions to make the writing of editor tests more declarative
pub struct EditorTestUtils {
	pub document: ArtworkDocument,
}

impl EditorTestUtils {
	pub fn create() -> Self {
		init_logger();
		Self { document: ArtworkDocument::new() }
	}

	pub fn add_square(&mut self, size: f64) -> ArtworkId {
		self.document.add_item(vec![square(size)])
	}

	pub fn add_l_shape(&mut self) -> ArtworkId {
		self.document.add_item(vec![l_shape()])
	}

	pub fn set_params(&mut self, params: TransformParams) {
		self.document.set_params(params);
	}

	/// The anchors of the live geometry of `id`, one list per subpath.
	pub fn live_anchors(&self, id: ArtworkId) -> Vec<Vec<DVec2>> {
		self.document.item(id).map(|item| item.live().iter().map(Subpath::anchors).collect()).unwrap_or_default()
	}
}

pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// An axis-aligned square with a corner at the origin, traversed clockwise on a Y-down canvas.
pub fn square(size: f64) -> Subpath {
	Subpath::from_anchors([DVec2::ZERO, DVec2::new(size, 0.), DVec2::new(size, size), DVec2::new(0., size)], true)
}

/// A 20 by 20 square missing its 10 by 10 bottom right quarter. Anchor 3 at (10, 10) is the only reflex corner.
pub fn l_shape() -> Subpath {
	Subpath::from_anchors(points(&[(0., 0.), (20., 0.), (20., 10.), (10., 10.), (10., 20.), (0., 20.)]), true)
}

pub fn points(coordinates: &[(f64, f64)]) -> Vec<DVec2> {
	coordinates.iter().map(|&(x, y)| DVec2::new(x, y)).collect()
}
