use crate::{
	geometry::{classify_turn, distance, normalize, TurnLabel},
	projector::ProjectedRoute,
	route::Position,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction {
	pub turn: TurnLabel,
	pub meters: f64,
}

/// Turn-by-turn cards grouped by edge.
///
/// Group `e` holds the legs that start on a point of edge `e`, including the
/// leg that crosses into the next edge. The leg leaving the anchor is folded
/// into group 0. An edge without steps has an empty group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstructionGroups {
	groups: Vec<Vec<Instruction>>,
}

impl InstructionGroups {
	pub fn len(&self) -> usize {
		self.groups.len()
	}
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}
	pub fn get(&self, edge: usize) -> Option<&[Instruction]> {
		self.groups.get(edge).map(Vec::as_slice)
	}
	/// Group to show while targeting projected main index `main`.
	///
	/// Targeting the anchor (main 0) and walking the first edge (main 1) both
	/// show group 0.
	pub fn for_main_index(&self, main: usize) -> &[Instruction] {
		self.get(main.saturating_sub(1)).unwrap_or(&[])
	}
	pub fn iter(&self) -> impl Iterator<Item = &[Instruction]> + '_ {
		self.groups.iter().map(Vec::as_slice)
	}
	pub fn total_meters(&self) -> f64 {
		self.groups.iter().flatten().map(|i| i.meters).sum()
	}
}

/// Derives a distance and turn for every leg between consecutive route points.
pub fn generate(projected: &ProjectedRoute, scale: f64) -> InstructionGroups {
	let edges = projected.len().saturating_sub(1);
	let mut groups = vec![Vec::new(); edges];

	let mut prev: Option<(usize, &Position)> = None;
	for (main, points) in projected.groups().iter().enumerate() {
		for point in points {
			if let Some((from_main, from)) = prev {
				// the anchor sits at main 0 and shares group 0 with the first edge
				groups[from_main.saturating_sub(1)].push(leg(from, point, scale));
			}
			prev = Some((main, point));
		}
	}

	log::debug!(
		"generated {} instructions over {} edges",
		groups.iter().map(Vec::len).sum::<usize>(),
		edges
	);
	InstructionGroups { groups }
}

fn leg(from: &Position, to: &Position, scale: f64) -> Instruction {
	// the turn compares the points' directions from the map origin
	let turn = classify_turn(normalize(from.x, from.y), normalize(to.x, to.y));
	Instruction {
		turn,
		meters: distance(from, to) / scale,
	}
}
