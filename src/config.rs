use std::str::FromStr;

// one meter is PX_SCALE * CM_SCALE map units
pub const PX_SCALE: f64 = 1.0;
// 210 cm per meter on the floor plans
pub const CM_SCALE: f64 = 210.0;
pub const DISTANCE_TOLERANCE: f64 = 1.0;
pub const CORRECTIBLE_DEVIATION: f64 = 10.0;
pub const TURN_ANTICIPATION_DISTANCE: f64 = 2.0;
pub const ANGLE_TOLERANCE: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
	pub px_scale: f64,
	pub cm_scale: f64,
	/// meters from a route point at which it counts as reached
	pub distance_tolerance: f64,
	/// meters off course beyond which the route should be replanned
	pub correctible_deviation: f64,
	pub turn_anticipation_distance: f64,
	/// degrees between heading and target below which the user counts as
	/// walking straight at it
	pub angle_tolerance: f64,
}

impl Default for NavConfig {
	fn default() -> Self {
		Self {
			px_scale: PX_SCALE,
			cm_scale: CM_SCALE,
			distance_tolerance: DISTANCE_TOLERANCE,
			correctible_deviation: CORRECTIBLE_DEVIATION,
			turn_anticipation_distance: TURN_ANTICIPATION_DISTANCE,
			angle_tolerance: ANGLE_TOLERANCE,
		}
	}
}

impl NavConfig {
	/// map units per meter
	pub fn scale(&self) -> f64 {
		self.px_scale * self.cm_scale
	}

	pub fn to_meters(&self, units: f64) -> f64 {
		units / self.scale()
	}

	/// Builds a config from the defaults overridden by `WAYFINDER_*`
	/// environment variables. A `.env` file is loaded first if one exists.
	pub fn from_env() -> Self {
		dotenvy::dotenv().ok();

		let mut config = Self::default();
		override_from_env("WAYFINDER_PX_SCALE", &mut config.px_scale);
		override_from_env("WAYFINDER_CM_SCALE", &mut config.cm_scale);
		override_from_env("WAYFINDER_DISTANCE_TOLERANCE", &mut config.distance_tolerance);
		override_from_env("WAYFINDER_CORRECTIBLE_DEVIATION", &mut config.correctible_deviation);
		override_from_env(
			"WAYFINDER_TURN_ANTICIPATION_DISTANCE",
			&mut config.turn_anticipation_distance,
		);
		override_from_env("WAYFINDER_ANGLE_TOLERANCE", &mut config.angle_tolerance);

		if config.scale() <= 0.0 {
			log::warn!(
				"non-positive map scale ({} x {}), falling back to defaults",
				config.px_scale,
				config.cm_scale
			);
			config.px_scale = PX_SCALE;
			config.cm_scale = CM_SCALE;
		}
		config
	}
}

fn override_from_env(key: &str, slot: &mut f64) {
	let Ok(raw) = std::env::var(key) else {
		return;
	};
	match parse_finite(&raw) {
		Some(v) => {
			log::info!("{key} overridden to {v}");
			*slot = v;
		}
		None => log::warn!("ignoring {key}={raw:?}: not a finite number"),
	}
}

fn parse_finite(raw: &str) -> Option<f64> {
	f64::from_str(raw.trim()).ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_scale_is_210_units_per_meter() {
		let config = NavConfig::default();
		assert_eq!(config.scale(), 210.0);
		assert_eq!(config.to_meters(420.0), 2.0);
	}

	#[test]
	fn parse_finite_rejects_garbage() {
		assert_eq!(parse_finite(" 2.5 "), Some(2.5));
		assert_eq!(parse_finite("NaN"), None);
		assert_eq!(parse_finite("inf"), None);
		assert_eq!(parse_finite("ten"), None);
	}

	#[test]
	fn env_override_replaces_single_value() {
		std::env::set_var("WAYFINDER_ANGLE_TOLERANCE", "20");
		let config = NavConfig::from_env();
		std::env::remove_var("WAYFINDER_ANGLE_TOLERANCE");
		assert_eq!(config.angle_tolerance, 20.0);
		assert_eq!(config.distance_tolerance, DISTANCE_TOLERANCE);
	}
}
