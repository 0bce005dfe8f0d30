use wayfinder::{
	sim::{Detour, RouteWalker, DEFAULT_STEP},
	Direction::*,
	Edge, NavConfig, NavigationSession, NodeTable, PathStep, Route, Vec2,
};

fn edge(to: &str, path: &[(wayfinder::Direction, f64)]) -> Edge {
	Edge {
		to: to.to_string(),
		weight: path.iter().map(|(_, m)| m).sum(),
		path: path.iter().map(|&(d, m)| PathStep::new(d, m)).collect(),
	}
}

// north entrance up to the vice chancellor's office on the fourth floor
fn demo_route() -> Route {
	Route::new(
		"northEntrance",
		vec![
			edge("southEntrance", &[(North, 19.62)]),
			edge("lift_F0_West", &[(North, 1.0), (West, 1.0), (South, 1.0)]),
			edge("lift_F4_West", &[(North, 1.0)]),
			edge("passage_F4_west", &[(West, 1.5)]),
			edge("office of the vc", &[(North, 2.73)]),
		],
	)
}

fn main() -> anyhow::Result<()> {
	env_logger::init();
	let config = NavConfig::from_env();

	let route = demo_route();
	let nodes = NodeTable::relative_to_anchor(
		&route.start,
		Vec2::new(-1549.8, -2118.9),
		[&route],
		&config,
	);
	let mut session = NavigationSession::start(route, &nodes, config)?;

	// wander 12 m east for a stretch of the first corridor
	let walker = RouteWalker::new(session.tracker().projected(), DEFAULT_STEP)
		.with_detour(Detour {
			from_tick: 10,
			until_tick: 25,
			offset: Vec2::new(12.0 * config.scale(), 0.0),
		})
		.with_jitter(0.05 * config.scale(), 42);

	let mut last_message = String::new();
	for (position, heading) in walker {
		let state = session.on_sample(position, heading);
		if state.message != last_message {
			println!(
				"[{}/{}] {}{}",
				state.main_index,
				state.sub_index,
				state.message,
				if state.needs_replanning { " (replan)" } else { "" }
			);
			last_message = state.message.clone();
		}
		if state.arrived {
			break;
		}
	}

	if !session.state().arrived {
		anyhow::bail!("walk ended before reaching {}", session.route().destination());
	}
	Ok(())
}
