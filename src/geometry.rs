use std::f64::consts::PI;
use std::fmt;

use crate::{
	route::{PathStep, Position},
	vec::Vec2,
};

// cos(~8 deg), fixed cones for straight and u-turn
const STRAIGHT_DOT: f64 = 0.99;
const U_TURN_DOT: f64 = -0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnLabel {
	Straight,
	Left,
	Right,
	UTurn,
	Unknown,
}

impl fmt::Display for TurnLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			TurnLabel::Straight => "Straight",
			TurnLabel::Left => "Left",
			TurnLabel::Right => "Right",
			TurnLabel::UTurn => "U-turn",
			TurnLabel::Unknown => "Unknown",
		};
		f.write_str(label)
	}
}

/// Offset in map units produced by walking one step.
pub fn displacement(step: &PathStep, scale: f64) -> Vec2 {
	let angle = step.direction.angle_deg() * PI / 180.0;
	let (sin, cos) = angle.sin_cos();
	Vec2::new(cos, sin) * (step.distance * scale)
}

pub fn distance(a: &Position, b: &Position) -> f64 {
	(b.vec() - a.vec()).mag()
}

pub fn normalize(x: f64, y: f64) -> Vec2 {
	Vec2::new(x, y).normalised()
}

/// Classifies the turn from `prev` to `curr`, both expected to be unit vectors.
pub fn classify_turn(prev: Vec2, curr: Vec2) -> TurnLabel {
	let dot = prev.dot(curr);
	let cross = prev.cross(curr);

	if dot > STRAIGHT_DOT {
		TurnLabel::Straight
	} else if dot < U_TURN_DOT {
		TurnLabel::UTurn
	} else if cross > 0.0 {
		TurnLabel::Left
	} else if cross < 0.0 {
		TurnLabel::Right
	} else {
		TurnLabel::Unknown
	}
}

/// Turn the user has to make from their `heading` to face `target`.
///
/// Anything within `angle_tolerance` degrees counts as straight ahead. A
/// missing heading or a target under the user's feet has no angle, so the raw
/// classification is returned.
pub fn heading_turn(
	heading: Option<Vec2>,
	position: &Position,
	target: &Position,
	angle_tolerance: f64,
) -> TurnLabel {
	let heading = heading.unwrap_or(Vec2::ZERO);
	let to_target = (target.vec() - position.vec()).normalised();

	let raw = classify_turn(heading, to_target);
	match heading.angle_deg(to_target) {
		Some(angle) if angle < angle_tolerance => TurnLabel::Straight,
		_ => raw,
	}
}
