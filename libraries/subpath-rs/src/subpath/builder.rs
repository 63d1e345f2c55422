use super::*;
use crate::consts::{ARC_TOLERANCE, COLLINEAR_DETERMINANT_EPSILON, POINT_COINCIDENCE_EPSILON};
use crate::utils::{circumcircle, dvec2_to_point, point_to_dvec2};

use glam::DVec2;
use kurbo::{Arc, PathEl};
use std::f64::consts::TAU;

/// Incrementally assembles a single [Subpath] from drawing commands, starting at a given point.
/// Pieces that would not move the pen (zero-length lines and collapsed curves) are dropped.
#[derive(Clone, Debug)]
pub struct SubpathBuilder {
	manipulator_groups: Vec<ManipulatorGroup>,
}

impl SubpathBuilder {
	pub fn new(start: DVec2) -> Self {
		Self {
			manipulator_groups: vec![ManipulatorGroup::new_anchor(start)],
		}
	}

	/// The anchor the next drawing command starts from.
	pub fn current_point(&self) -> DVec2 {
		self.manipulator_groups.last().map_or(DVec2::ZERO, |group| group.anchor)
	}

	fn is_current_point(&self, point: DVec2) -> bool {
		self.current_point().abs_diff_eq(point, POINT_COINCIDENCE_EPSILON)
	}

	fn set_out_handle(&mut self, handle: DVec2) {
		if let Some(last) = self.manipulator_groups.last_mut() {
			last.out_handle = Some(handle);
		}
	}

	pub fn line_to(&mut self, point: DVec2) -> &mut Self {
		if !self.is_current_point(point) {
			self.manipulator_groups.push(ManipulatorGroup::new_anchor(point));
		}
		self
	}

	pub fn quad_to(&mut self, handle: DVec2, point: DVec2) -> &mut Self {
		if self.is_current_point(point) && self.is_current_point(handle) {
			return self;
		}
		self.set_out_handle(handle);
		self.manipulator_groups.push(ManipulatorGroup::new_anchor(point));
		self
	}

	pub fn cubic_to(&mut self, handle1: DVec2, handle2: DVec2, point: DVec2) -> &mut Self {
		if self.is_current_point(point) && self.is_current_point(handle1) && self.is_current_point(handle2) {
			return self;
		}
		self.set_out_handle(handle1);
		self.manipulator_groups.push(ManipulatorGroup::new(point, Some(handle2), None));
		self
	}

	/// Appends a curve, assuming it starts at the current point.
	pub fn push_segment(&mut self, segment: PathSeg) -> &mut Self {
		match segment {
			PathSeg::Line(line) => self.line_to(point_to_dvec2(line.p1)),
			PathSeg::Quad(quad) => self.quad_to(point_to_dvec2(quad.p1), point_to_dvec2(quad.p2)),
			PathSeg::Cubic(cubic) => self.cubic_to(point_to_dvec2(cubic.p1), point_to_dvec2(cubic.p2), point_to_dvec2(cubic.p3)),
		}
	}

	/// Appends the curve between two adjacent manipulator groups of another subpath, keeping their handles exactly.
	/// The current point is assumed to be the anchor of `start`.
	pub fn push_curve_between(&mut self, start: &ManipulatorGroup, end: &ManipulatorGroup) -> &mut Self {
		if let Some(last) = self.manipulator_groups.last_mut() {
			last.out_handle = start.out_handle;
		}
		self.manipulator_groups.push(ManipulatorGroup::new(end.anchor, end.in_handle, None));
		self
	}

	/// Appends a circular arc from the current point that passes through `through` and ends exactly at `to`.
	/// The arc is approximated by cubic Bézier segments. Collinear points degrade to a straight line to `to`.
	pub fn arc_through(&mut self, through: DVec2, to: DVec2) -> &mut Self {
		let from = self.current_point();
		let Some((center, radius)) = circumcircle(from, through, to, COLLINEAR_DETERMINANT_EPSILON) else {
			trace!("Arc through {through} is degenerate, drawing a line to {to}");
			return self.line_to(to);
		};

		let angle_of = |point: DVec2| (point - center).y.atan2((point - center).x);
		let start_angle = angle_of(from);
		let through_sweep = (angle_of(through) - start_angle).rem_euclid(TAU);
		let end_sweep = (angle_of(to) - start_angle).rem_euclid(TAU);
		// Travel in whichever direction reaches `through` before `to`
		let sweep_angle = if through_sweep <= end_sweep { end_sweep } else { end_sweep - TAU };

		let arc = Arc {
			center: dvec2_to_point(center),
			radii: kurbo::Vec2::new(radius, radius),
			start_angle,
			sweep_angle,
			x_rotation: 0.,
		};
		for element in arc.append_iter(ARC_TOLERANCE) {
			match element {
				PathEl::CurveTo(handle1, handle2, point) => {
					self.cubic_to(point_to_dvec2(handle1), point_to_dvec2(handle2), point_to_dvec2(point));
				}
				PathEl::QuadTo(handle, point) => {
					self.quad_to(point_to_dvec2(handle), point_to_dvec2(point));
				}
				PathEl::LineTo(point) => {
					self.line_to(point_to_dvec2(point));
				}
				PathEl::MoveTo(_) | PathEl::ClosePath => {}
			}
		}

		// Snap the trigonometric end point onto the requested one
		self.snap_current_point(to)
	}

	/// Moves the current point onto `point`, shifting its in handle by the same amount.
	pub fn snap_current_point(&mut self, point: DVec2) -> &mut Self {
		if let Some(last) = self.manipulator_groups.last_mut() {
			let correction = point - last.anchor;
			last.anchor = point;
			last.in_handle = last.in_handle.map(|handle| handle + correction);
		}
		self
	}

	/// Finishes the subpath. When closing, a final anchor that lands on the first anchor is merged into it.
	pub fn build(mut self, closed: bool) -> Subpath {
		if closed && self.manipulator_groups.len() > 1 {
			let first = self.manipulator_groups[0].anchor;
			if self.current_point().abs_diff_eq(first, POINT_COINCIDENCE_EPSILON) {
				if let Some(last) = self.manipulator_groups.pop() {
					self.manipulator_groups[0].in_handle = last.in_handle;
				}
			}
		}
		Subpath::new(self.manipulator_groups, closed)
	}
}
