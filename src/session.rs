use crate::{
	config::NavConfig,
	error::Result,
	instructions::{generate, Instruction},
	projector::project_from_table,
	route::{NodeTable, Position, Route},
	tracker::{RouteTracker, TrackerState},
	vec::Vec2,
};

/// One active navigation: the route, its projection and the tracker over it.
///
/// Replacing the route swaps all of them together, so samples always see a
/// tracker consistent with the route it was built from.
pub struct NavigationSession {
	config: NavConfig,
	route: Route,
	tracker: RouteTracker,
}

impl NavigationSession {
	/// Projects `route` from its start node in `nodes`. Fails when the start
	/// node has no known position.
	pub fn start(route: Route, nodes: &NodeTable, config: NavConfig) -> Result<Self> {
		let tracker = build_tracker(&route, nodes, config)?;
		log::info!(
			"navigation started: {} -> {} ({:.1}m)",
			route.start,
			route.destination(),
			route.length()
		);
		Ok(Self {
			config,
			route,
			tracker,
		})
	}

	pub fn on_sample(&mut self, position: Position, heading: Option<Vec2>) -> &TrackerState {
		self.tracker.on_sample(position, heading)
	}

	/// Swaps in a freshly planned route. On error the current route keeps
	/// running untouched.
	pub fn replace_route(&mut self, route: Route, nodes: &NodeTable) -> Result<()> {
		let tracker = build_tracker(&route, nodes, self.config)?;
		log::info!(
			"route replaced: {} -> {} (was {} -> {})",
			route.start,
			route.destination(),
			self.route.start,
			self.route.destination()
		);
		self.route = route;
		self.tracker = tracker;
		Ok(())
	}

	pub fn state(&self) -> &TrackerState {
		self.tracker.state()
	}
	pub fn current_instructions(&self) -> &[Instruction] {
		self.tracker.current_instructions()
	}
	pub fn route(&self) -> &Route {
		&self.route
	}
	pub fn tracker(&self) -> &RouteTracker {
		&self.tracker
	}
	pub fn config(&self) -> &NavConfig {
		&self.config
	}
}

fn build_tracker(route: &Route, nodes: &NodeTable, config: NavConfig) -> Result<RouteTracker> {
	let projected = project_from_table(route, nodes, config.scale())?;
	let instructions = generate(&projected, config.scale());
	Ok(RouteTracker::new(projected, instructions, config))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::NavError;
	use crate::route::{fixtures::edge, Direction::*};

	fn nodes() -> NodeTable {
		let mut table = NodeTable::new();
		table.insert("A", Vec2::ZERO);
		table.insert("C", Vec2::new(0.0, 2100.0));
		table
	}

	#[test]
	fn start_requires_anchor() {
		let route = Route::new("Z", vec![edge("A", &[(East, 1.0)])]);
		let err = NavigationSession::start(route, &nodes(), NavConfig::default()).err();
		assert_eq!(err, Some(NavError::MissingAnchor { node: "Z".into() }));
	}

	#[test]
	fn replace_route_resets_progress() {
		let config = NavConfig::default();
		let route = Route::new("A", vec![edge("B", &[(East, 10.0)])]);
		let mut session = NavigationSession::start(route, &nodes(), config).unwrap();
		session.on_sample(Position::new(0.0, 0.0), Some(Vec2::new(1.0, 0.0)));
		assert_eq!(session.state().main_index, 1);

		let replan = Route::new("C", vec![edge("B", &[(North, 10.0), (East, 10.0)])]);
		session.replace_route(replan, &nodes()).unwrap();
		assert_eq!(session.route().start, "C");
		assert_eq!(*session.state(), TrackerState::default());
		assert_eq!(session.tracker().projected().anchor().y, 2100.0);
		assert_eq!(session.current_instructions().len(), 2);
	}

	#[test]
	fn failed_replace_keeps_current_route() {
		let route = Route::new("A", vec![edge("B", &[(East, 10.0)])]);
		let mut session = NavigationSession::start(route, &nodes(), NavConfig::default()).unwrap();
		session.on_sample(Position::new(0.0, 0.0), None);
		let before = session.state().clone();

		let bad = Route::new("missing", vec![]);
		assert!(session.replace_route(bad, &nodes()).is_err());
		assert_eq!(session.route().start, "A");
		assert_eq!(*session.state(), before);
	}
}
