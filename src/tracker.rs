use crate::{
	config::NavConfig,
	geometry::{distance, heading_turn, TurnLabel},
	instructions::{Instruction, InstructionGroups},
	message::{format_message, Guidance, ARRIVED},
	projector::ProjectedRoute,
	route::Position,
	vec::Vec2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	Tracking { main: usize, sub: usize },
	Arrived,
}

/// Snapshot handed to the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerState {
	pub main_index: usize,
	pub sub_index: usize,
	pub on_track: bool,
	/// meters from the target when the last sample did not reach it
	pub deviation_meters: f64,
	pub message: String,
	pub arrived: bool,
	pub needs_replanning: bool,
	/// meters from the last sample to the current target
	pub distance_to_target: Option<f64>,
}

impl Default for TrackerState {
	fn default() -> Self {
		Self {
			main_index: 0,
			sub_index: 0,
			on_track: true,
			deviation_meters: 0.0,
			message: String::new(),
			arrived: false,
			needs_replanning: false,
			distance_to_target: None,
		}
	}
}

impl TrackerState {
	pub fn phase(&self) -> Phase {
		if self.arrived {
			Phase::Arrived
		} else {
			Phase::Tracking {
				main: self.main_index,
				sub: self.sub_index,
			}
		}
	}
}

pub struct RouteTracker {
	projected: ProjectedRoute,
	instructions: InstructionGroups,
	config: NavConfig,
	state: TrackerState,
	last_sample: Option<(Position, Option<Vec2>)>,
}

impl RouteTracker {
	pub fn new(projected: ProjectedRoute, instructions: InstructionGroups, config: NavConfig) -> Self {
		Self {
			projected,
			instructions,
			config,
			state: TrackerState::default(),
			last_sample: None,
		}
	}

	pub fn state(&self) -> &TrackerState {
		&self.state
	}
	pub fn projected(&self) -> &ProjectedRoute {
		&self.projected
	}
	pub fn instructions(&self) -> &InstructionGroups {
		&self.instructions
	}
	/// instruction cards for the edge currently being walked
	pub fn current_instructions(&self) -> &[Instruction] {
		self.instructions.for_main_index(self.state.main_index)
	}
	pub fn target(&self) -> Option<&Position> {
		match self.state.phase() {
			Phase::Tracking { main, sub } => self.projected.get(main, sub),
			Phase::Arrived => None,
		}
	}

	/// Feeds one position sample through the state machine.
	///
	/// At most one route point is reached per sample. Delivering the same
	/// sample twice leaves the state untouched, as does anything after arrival.
	pub fn on_sample(&mut self, position: Position, heading: Option<Vec2>) -> &TrackerState {
		if self.state.arrived {
			return &self.state;
		}
		let sample = (position, heading);
		if self.last_sample.as_ref() == Some(&sample) {
			log::trace!("duplicate sample ignored");
			return &self.state;
		}
		self.step(&sample.0, sample.1);
		self.last_sample = Some(sample);
		&self.state
	}

	fn step(&mut self, position: &Position, heading: Option<Vec2>) {
		if self.projected.is_trivial() {
			log::info!("route has no edges, already at the destination");
			self.arrive();
			return;
		}

		self.skip_empty_edges();
		let Some(target) = self.target().cloned() else {
			// only reachable when the trailing edges had no steps
			return;
		};

		let d = self.config.to_meters(distance(&target, position));
		self.state.distance_to_target = Some(d);
		log::debug!(
			"sample ({:.1}, {:.1}) is {d:.2}m from target {}/{}",
			position.x,
			position.y,
			self.state.main_index,
			self.state.sub_index
		);

		if d < self.config.distance_tolerance {
			self.state.on_track = true;
			self.state.deviation_meters = 0.0;
			self.state.needs_replanning = false;
			self.advance(position, heading);
			return;
		}

		let turn = heading_turn(heading, position, &target, self.config.angle_tolerance);
		let on_track = turn == TurnLabel::Straight;
		let before = (self.state.on_track, self.state.needs_replanning);
		self.state.on_track = on_track;
		self.state.deviation_meters = d;
		self.apply(format_message(turn, d, on_track, &self.config));

		match deviation_change(before, (self.state.on_track, self.state.needs_replanning)) {
			Some(Deviation::Lost) => log::warn!("user is {d:.1}m off course, route should be replanned"),
			Some(Deviation::LeftRoute) => log::warn!("user left the route {d:.1}m from target, needs a {turn}"),
			None => {}
		}
	}

	/// Moves the target one point along the route, arriving past the last one.
	fn advance(&mut self, position: &Position, heading: Option<Vec2>) {
		let Phase::Tracking { main, sub } = self.state.phase() else {
			return;
		};

		if sub + 1 < self.projected[main].len() {
			self.state.sub_index = sub + 1;
		} else if main + 1 < self.projected.len() {
			self.state.main_index = main + 1;
			self.state.sub_index = 0;
			log::info!("starting edge {} of {}", main + 1, self.projected.len() - 1);
		} else {
			self.arrive();
			return;
		}
		self.skip_empty_edges();

		let Some(target) = self.target().cloned() else {
			return;
		};
		let turn = heading_turn(heading, position, &target, self.config.angle_tolerance);
		let d = self.config.to_meters(distance(&target, position));
		self.state.distance_to_target = Some(d);
		self.apply(format_message(turn, d, true, &self.config));
		log::debug!(
			"reached point, next target {}/{}: {}",
			self.state.main_index,
			self.state.sub_index,
			self.state.message
		);
	}

	// edges without steps have no point to reach, step straight over them
	fn skip_empty_edges(&mut self) {
		while let Phase::Tracking { main, sub } = self.state.phase() {
			if self.projected.get(main, sub).is_some() {
				return;
			}
			if main + 1 < self.projected.len() {
				log::debug!("edge {main} has no points, skipping");
				self.state.main_index = main + 1;
				self.state.sub_index = 0;
			} else {
				self.arrive();
			}
		}
	}

	fn arrive(&mut self) {
		log::info!("arrived at destination");
		self.state.arrived = true;
		self.state.on_track = true;
		self.state.deviation_meters = 0.0;
		self.state.needs_replanning = false;
		self.state.distance_to_target = None;
		self.state.message = ARRIVED.to_string();
	}

	fn apply(&mut self, guidance: Guidance) {
		self.state.message = guidance.text;
		self.state.needs_replanning = guidance.needs_replanning;
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deviation {
	LeftRoute,
	Lost,
}

// (on_track, needs_replanning) before and after a sample, only edges count
fn deviation_change(before: (bool, bool), after: (bool, bool)) -> Option<Deviation> {
	if !before.1 && after.1 {
		Some(Deviation::Lost)
	} else if before.0 && !after.0 {
		Some(Deviation::LeftRoute)
	} else {
		None
	}
}
