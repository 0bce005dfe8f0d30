use std::collections::HashMap;
use std::fmt;

use crate::{config::NavConfig, geometry::displacement, vec::Vec2};

pub type NodeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	North,
	South,
	East,
	West,
}

impl Direction {
	/// clockwise from east, matching the y-down floor plan coordinates
	pub fn angle_deg(self) -> f64 {
		match self {
			Direction::East => 0.0,
			Direction::South => 90.0,
			Direction::West => 180.0,
			Direction::North => 270.0,
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Direction::North => "north",
			Direction::South => "south",
			Direction::East => "east",
			Direction::West => "west",
		};
		f.write_str(name)
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathStep {
	pub direction: Direction,
	/// meters
	pub distance: f64,
}

impl PathStep {
	pub fn new(direction: Direction, distance: f64) -> Self {
		Self {
			direction,
			distance,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
	pub to: NodeId,
	pub weight: f64,
	pub path: Vec<PathStep>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route {
	pub start: NodeId,
	pub edges: Vec<Edge>,
}

impl Route {
	pub fn new(start: impl Into<NodeId>, edges: Vec<Edge>) -> Self {
		Self {
			start: start.into(),
			edges,
		}
	}
	/// an empty route means the user is already at the destination
	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}
	pub fn destination(&self) -> &str {
		self.edges.last().map_or(&self.start, |e| &e.to)
	}
	/// walking length in meters
	pub fn length(&self) -> f64 {
		self.edges
			.iter()
			.flat_map(|e| e.path.iter())
			.map(|s| s.distance)
			.sum()
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Position {
	pub x: f64,
	pub y: f64,
	pub node: Option<NodeId>,
}

impl Position {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, node: None }
	}
	pub fn at_node(x: f64, y: f64, node: impl Into<NodeId>) -> Self {
		Self {
			x,
			y,
			node: Some(node.into()),
		}
	}
	pub fn vec(&self) -> Vec2 {
		Vec2::new(self.x, self.y)
	}
}

impl From<Vec2> for Position {
	fn from(v: Vec2) -> Self {
		Self::new(v.x(), v.y())
	}
}

/// Absolute positions of graph nodes, keyed by node id.
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
	nodes: HashMap<NodeId, Vec2>,
}

impl NodeTable {
	pub fn new() -> Self {
		Self::default()
	}
	pub fn insert(&mut self, node: impl Into<NodeId>, pos: Vec2) {
		self.nodes.insert(node.into(), pos);
	}
	pub fn get(&self, node: &str) -> Option<Position> {
		self.nodes
			.get(node)
			.map(|p| Position::at_node(p.x(), p.y(), node))
	}
	pub fn len(&self) -> usize {
		self.nodes.len()
	}
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Places every route's destination relative to `anchor`, which sits at
	/// `origin`. Each route must start at the anchor node; routes starting
	/// anywhere else are skipped with a warning.
	pub fn relative_to_anchor<'a>(
		anchor: &str,
		origin: Vec2,
		routes: impl IntoIterator<Item = &'a Route>,
		config: &NavConfig,
	) -> Self {
		let mut table = Self::new();
		table.insert(anchor, origin);
		for route in routes {
			if route.start != anchor {
				log::warn!(
					"route to {} starts at {} instead of anchor {anchor}, skipping",
					route.destination(),
					route.start
				);
				continue;
			}
			let mut pos = origin;
			for edge in &route.edges {
				for step in &edge.path {
					pos += displacement(step, config.scale());
				}
				table.insert(edge.to.clone(), pos);
			}
		}
		table
	}
}
