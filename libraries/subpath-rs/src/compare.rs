// Comparison functions used for tests in the subpath module

use crate::ManipulatorGroup;
use glam::DVec2;

const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-9;

pub fn compare_points(p1: DVec2, p2: DVec2) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}

pub fn compare_vec_of_points(vec_p1: Vec<DVec2>, vec_p2: Vec<DVec2>) -> bool {
	vec_p1.len() == vec_p2.len() && vec_p1.into_iter().zip(vec_p2).all(|(p1, p2)| compare_points(p1, p2))
}

pub fn compare_manipulator_groups(group1: &ManipulatorGroup, group2: &ManipulatorGroup) -> bool {
	let handles_match = |h1: Option<DVec2>, h2: Option<DVec2>| match (h1, h2) {
		(Some(h1), Some(h2)) => compare_points(h1, h2),
		(None, None) => true,
		_ => false,
	};
	compare_points(group1.anchor, group2.anchor) && handles_match(group1.in_handle, group2.in_handle) && handles_match(group1.out_handle, group2.out_handle)
}
