use crate::FLATTEN_TOLERANCE;

use glam::DVec2;
use kurbo::{Line, ParamCurve, ParamCurveNearest, PathSeg};
use subpath_rs::{Subpath, SubpathBuilder, dvec2_to_point};

/// Flattened points stray at most this far from the curve they were sampled from.
const ON_CURVE_TOLERANCE: f64 = 2. * FLATTEN_TOLERANCE;
/// A polyline edge belongs to a curve when the curve passes this close to the edge half-way between its end points.
const CHORD_TOLERANCE: f64 = 4. * FLATTEN_TOLERANCE;
/// Anchors of the subject closer than this to a result vertex replace it.
const ANCHOR_SNAP_TOLERANCE: f64 = 1e-6;
const NEAREST_ACCURACY: f64 = 1e-9;
const PARAMETER_EPSILON: f64 = 1e-9;

/// The stretch of a source curve that a polyline edge follows, from `start` to `end` in curve parameters.
/// `start > end` when the edge runs against the curve's direction.
#[derive(Clone, Copy, Debug, PartialEq)]
struct CurveSpan {
	curve: usize,
	start: f64,
	end: f64,
}

impl CurveSpan {
	fn continues_into(&self, next: &CurveSpan) -> bool {
		self.curve == next.curve && (self.end - next.start).abs() < PARAMETER_EPSILON && (self.end - self.start).signum() == (next.end - next.start).signum()
	}
}

/// The quadratic and cubic curves of the operands, which are the only ones flattening approximates.
pub(crate) fn curved_segments<'a>(operands: impl IntoIterator<Item = &'a Subpath>) -> Vec<PathSeg> {
	operands.into_iter().flat_map(Subpath::iter).filter(|curve| !matches!(curve, PathSeg::Line(_))).collect()
}

/// Rebuilds a closed polyline produced by flattening so that every run of edges following one of `curves` becomes a piece of
/// that curve again. Vertices coinciding with one of `anchors` are snapped onto it and always stay anchors.
pub(crate) fn restore_curves(polyline: &Subpath, curves: &[PathSeg], anchors: &[DVec2]) -> Subpath {
	let vertices = polyline
		.anchors()
		.into_iter()
		.map(|vertex| anchors.iter().copied().find(|anchor| anchor.abs_diff_eq(vertex, ANCHOR_SNAP_TOLERANCE)).unwrap_or(vertex))
		.collect::<Vec<_>>();
	let len = vertices.len();
	if curves.is_empty() || len < 3 || !polyline.closed {
		return Subpath::from_anchors(vertices, polyline.closed);
	}

	let spans = (0..len).map(|index| edge_span(vertices[index], vertices[(index + 1) % len], curves)).collect::<Vec<_>>();
	let continues = |index: usize| match (spans[(index + len - 1) % len], spans[index]) {
		(Some(previous), Some(span)) => !anchors.contains(&vertices[index]) && previous.continues_into(&span),
		_ => false,
	};

	// Start where a run begins so that no run wraps around the start
	let Some(first) = (0..len).find(|&index| !continues(index)) else {
		return Subpath::from_anchors(vertices, true);
	};

	let mut builder = SubpathBuilder::new(vertices[first]);
	let mut run: Option<(CurveSpan, DVec2)> = None;
	let mut restored = 0;
	for offset in 0..len {
		let index = (first + offset) % len;
		let end = vertices[(index + 1) % len];

		if let (Some(span), Some((current, current_end))) = (spans[index], run.as_mut()) {
			if continues(index) {
				current.end = span.end;
				*current_end = end;
				continue;
			}
		}

		if let Some((span, span_end)) = run.take() {
			push_span(&mut builder, &curves[span.curve], span, span_end);
			restored += 1;
		}
		match spans[index] {
			Some(span) => run = Some((span, end)),
			None => {
				builder.line_to(end);
			}
		}
	}
	if let Some((span, span_end)) = run.take() {
		push_span(&mut builder, &curves[span.curve], span, span_end);
		restored += 1;
	}

	trace!("Restored {restored} curve piece(s) on a polyline of {len} vertices");
	builder.build(true)
}

fn push_span(builder: &mut SubpathBuilder, curve: &PathSeg, span: CurveSpan, end: DVec2) {
	let piece = if span.start == 0. && span.end == 1. {
		*curve
	} else if span.start == 1. && span.end == 0. {
		curve.reverse()
	} else {
		curve.subsegment(span.start..span.end)
	};
	builder.push_segment(piece).snap_current_point(end);
}

/// Finds the curve that the edge from `start` to `end` was flattened from, if any.
fn edge_span(start: DVec2, end: DVec2, curves: &[PathSeg]) -> Option<CurveSpan> {
	curves.iter().enumerate().find_map(|(curve_index, curve)| {
		let start_parameter = parameter_on(curve, start)?;
		let end_parameter = parameter_on(curve, end)?;
		if start_parameter == end_parameter {
			return None;
		}

		let middle = curve.eval((start_parameter + end_parameter) / 2.);
		let chord = Line::new(dvec2_to_point(start), dvec2_to_point(end));
		let deviation = chord.nearest(middle, NEAREST_ACCURACY).distance_sq.sqrt();
		(deviation <= CHORD_TOLERANCE).then_some(CurveSpan {
			curve: curve_index,
			start: start_parameter,
			end: end_parameter,
		})
	})
}

fn parameter_on(curve: &PathSeg, point: DVec2) -> Option<f64> {
	let nearest = curve.nearest(dvec2_to_point(point), NEAREST_ACCURACY);
	if nearest.distance_sq > ON_CURVE_TOLERANCE * ON_CURVE_TOLERANCE {
		return None;
	}
	Some(match nearest.t {
		t if t < PARAMETER_EPSILON => 0.,
		t if t > 1. - PARAMETER_EPSILON => 1.,
		t => t,
	})
}
