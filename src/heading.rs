use crate::vec::Vec2;

fn wrap_deg(deg: f64) -> f64 {
	((deg % 360.0) + 360.0) % 360.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingCalibration {
	/// true heading reported while facing the floor plan's north
	pub reference_deg: f64,
}

impl HeadingCalibration {
	pub fn new(reference_deg: f64) -> Self {
		Self { reference_deg }
	}

	/// heading in degrees relative to plan north, in [0, 360)
	pub fn to_local(&self, true_heading: f64) -> f64 {
		wrap_deg(true_heading - self.reference_deg)
	}

	/// Unit heading vector in map coordinates (east is +x, north is -y).
	/// Returns `None` for readings that are not finite.
	pub fn to_vector(&self, true_heading: f64) -> Option<Vec2> {
		if !true_heading.is_finite() {
			log::warn!("discarding non-finite compass reading {true_heading}");
			return None;
		}
		// map angles run clockwise from east, compass angles clockwise from north
		let angle = (self.to_local(true_heading) - 90.0).to_radians();
		let (sin, cos) = angle.sin_cos();
		Some(Vec2::new(cos, sin))
	}
}

impl Default for HeadingCalibration {
	fn default() -> Self {
		// reading observed facing plan north on the surveyed floors
		Self::new(90.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn close(v: Vec2, x: f64, y: f64) -> bool {
		(v.x() - x).abs() < 1e-9 && (v.y() - y).abs() < 1e-9
	}

	#[test]
	fn local_heading_wraps() {
		let cal = HeadingCalibration::new(90.0);
		assert_eq!(cal.to_local(90.0), 0.0);
		assert_eq!(cal.to_local(45.0), 315.0);
		assert_eq!(cal.to_local(450.0), 0.0);
	}

	#[test]
	fn cardinal_readings_map_to_axes() {
		let cal = HeadingCalibration::new(0.0);
		assert!(close(cal.to_vector(0.0).unwrap(), 0.0, -1.0));
		assert!(close(cal.to_vector(90.0).unwrap(), 1.0, 0.0));
		assert!(close(cal.to_vector(180.0).unwrap(), 0.0, 1.0));
		assert!(close(cal.to_vector(270.0).unwrap(), -1.0, 0.0));
	}

	#[test]
	fn calibration_offset_is_applied() {
		let cal = HeadingCalibration::default();
		// facing plan east reads 180 when plan north reads 90
		assert!(close(cal.to_vector(180.0).unwrap(), 1.0, 0.0));
	}

	#[test]
	fn nan_reading_is_dropped() {
		assert_eq!(HeadingCalibration::default().to_vector(f64::NAN), None);
	}
}
