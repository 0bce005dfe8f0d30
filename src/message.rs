use crate::{config::NavConfig, geometry::TurnLabel};

pub const ARRIVED: &str = "You have arrived at your destination.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
	pub text: String,
	/// the user is too far off for corrective turns, fetch a new route
	pub needs_replanning: bool,
}

impl Guidance {
	fn say(text: String) -> Self {
		Self {
			text,
			needs_replanning: false,
		}
	}
}

/// Picks the message tier for a turn `meters` away from the user.
pub fn format_message(turn: TurnLabel, meters: f64, on_track: bool, config: &NavConfig) -> Guidance {
	let shown = meters.round() as i64;

	if !on_track {
		if meters > config.correctible_deviation {
			return Guidance {
				text: format!("You're {shown}m off course."),
				needs_replanning: true,
			};
		}
		if turn == TurnLabel::Unknown {
			return Guidance::say("You're deviating. Head back to the route.".to_string());
		}
		return Guidance::say(format!("You're deviating. Make a {turn} to rejoin."));
	}

	let anticipation = config.turn_anticipation_distance;
	let text = match turn {
		TurnLabel::Straight => format!("Continue straight for {shown} meters."),
		// no heading to compare against
		TurnLabel::Unknown => format!("Continue for {shown} meters."),
		_ if meters <= anticipation => format!("Turn {turn} now."),
		_ if meters <= 2.0 * anticipation => format!("Prepare to turn {turn} in {shown} meters."),
		_ => format!("Continue straight, then turn {turn} in {shown} meters."),
	};
	Guidance::say(text)
}
