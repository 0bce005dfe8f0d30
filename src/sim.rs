use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{projector::ProjectedRoute, route::Position, vec::Vec2};

/// fraction of a leg covered per tick, 50 ticks per leg
pub const DEFAULT_STEP: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detour {
	pub from_tick: usize,
	pub until_tick: usize,
	/// map units added to the position while detouring
	pub offset: Vec2,
}

/// Walks a projected route leg by leg, one position and heading per tick.
pub struct RouteWalker {
	points: Vec<Position>,
	ticks_per_leg: usize,
	leg: usize,
	tick_in_leg: usize,
	tick: usize,
	heading: Option<Vec2>,
	detour: Option<Detour>,
	jitter: f64,
	rng: StdRng,
	finished: bool,
}

impl RouteWalker {
	pub fn new(route: &ProjectedRoute, step: f64) -> Self {
		let step = if step > 0.0 && step <= 1.0 {
			step
		} else {
			log::warn!("invalid walker step {step}, using {DEFAULT_STEP}");
			DEFAULT_STEP
		};
		Self {
			points: route.flat().cloned().collect(),
			ticks_per_leg: (1.0 / step).round().max(1.0) as usize,
			leg: 0,
			tick_in_leg: 0,
			tick: 0,
			heading: None,
			detour: None,
			jitter: 0.0,
			rng: StdRng::seed_from_u64(0),
			finished: false,
		}
	}

	pub fn with_detour(mut self, detour: Detour) -> Self {
		self.detour = Some(detour);
		self
	}

	/// Adds uniform noise of up to `amplitude` map units on each axis.
	pub fn with_jitter(mut self, amplitude: f64, seed: u64) -> Self {
		self.jitter = amplitude.abs();
		self.rng = StdRng::seed_from_u64(seed);
		self
	}

	fn perturb(&mut self, mut pos: Vec2) -> Vec2 {
		if let Some(detour) = self.detour {
			if (detour.from_tick..detour.until_tick).contains(&self.tick) {
				pos += detour.offset;
			}
		}
		if self.jitter > 0.0 {
			let j = self.jitter;
			pos += Vec2::new(self.rng.gen_range(-j..=j), self.rng.gen_range(-j..=j));
		}
		pos
	}
}

impl Iterator for RouteWalker {
	type Item = (Position, Option<Vec2>);

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let (pos, node) = match (self.points.get(self.leg), self.points.get(self.leg + 1)) {
			(Some(from), Some(to)) => {
				let delta = to.vec() - from.vec();
				// a zero length leg keeps the previous heading
				if !delta.is_zero() {
					self.heading = Some(delta.normalised());
				}
				let progress = self.tick_in_leg as f64 / self.ticks_per_leg as f64;
				let node = from.node.clone();

				self.tick_in_leg += 1;
				if self.tick_in_leg >= self.ticks_per_leg {
					self.tick_in_leg = 0;
					self.leg += 1;
				}
				(from.vec() + delta * progress, node)
			}
			// the final point is emitted once so the walk can arrive
			(Some(last), None) => {
				self.finished = true;
				(last.vec(), last.node.clone())
			}
			_ => {
				self.finished = true;
				return None;
			}
		};

		let pos = self.perturb(pos);
		self.tick += 1;
		let mut sample = Position::from(pos);
		sample.node = node;
		Some((sample, self.heading))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::projector::fixtures::projected;

	fn straight() -> ProjectedRoute {
		projected(vec![vec![(0.0, 0.0)], vec![(100.0, 0.0)], vec![(100.0, 50.0)]])
	}

	#[test]
	fn walks_every_leg_and_ends_on_destination() {
		let samples: Vec<_> = RouteWalker::new(&straight(), 0.25).collect();
		// 4 ticks for each of the 2 legs plus the destination
		assert_eq!(samples.len(), 9);
		assert_eq!(samples[0].0.vec(), Vec2::ZERO);
		assert_eq!(samples[1].0.vec(), Vec2::new(25.0, 0.0));
		assert_eq!(samples[4].0.vec(), Vec2::new(100.0, 0.0));
		assert_eq!(samples[8].0.vec(), Vec2::new(100.0, 50.0));
		assert_eq!(samples[1].1, Some(Vec2::new(1.0, 0.0)));
		assert_eq!(samples[5].1, Some(Vec2::new(0.0, 1.0)));
	}

	#[test]
	fn detour_only_applies_in_range() {
		let detour = Detour {
			from_tick: 2,
			until_tick: 3,
			offset: Vec2::new(0.0, 500.0),
		};
		let samples: Vec<_> = RouteWalker::new(&straight(), 0.25).with_detour(detour).collect();
		assert_eq!(samples[1].0.y, 0.0);
		assert_eq!(samples[2].0.y, 500.0);
		assert_eq!(samples[3].0.y, 0.0);
	}

	#[test]
	fn jitter_is_bounded_and_seeded() {
		let a: Vec<_> = RouteWalker::new(&straight(), 0.1).with_jitter(3.0, 7).collect();
		let b: Vec<_> = RouteWalker::new(&straight(), 0.1).with_jitter(3.0, 7).collect();
		let clean: Vec<_> = RouteWalker::new(&straight(), 0.1).collect();
		assert_eq!(a, b);
		for ((noisy, _), (exact, _)) in a.iter().zip(&clean) {
			assert!((noisy.x - exact.x).abs() <= 3.0);
			assert!((noisy.y - exact.y).abs() <= 3.0);
		}
	}

	#[test]
	fn single_point_route_yields_one_sample() {
		let route = projected(vec![vec![(4.0, 2.0)]]);
		let samples: Vec<_> = RouteWalker::new(&route, DEFAULT_STEP).collect();
		assert_eq!(samples.len(), 1);
		assert_eq!(samples[0].1, None);
	}
}
