use std::ops::Index;

use crate::{
	error::{NavError, Result},
	geometry::displacement,
	route::{NodeTable, Position, Route},
};

/// Absolute route points grouped by edge.
///
/// `points[0]` is always the single anchor point. `points[e + 1]` holds one
/// point per step of edge `e` (the "main" index is the outer index, the "sub"
/// index the inner one). An edge without steps has no points.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRoute {
	points: Vec<Vec<Position>>,
}

impl ProjectedRoute {
	pub fn get(&self, main: usize, sub: usize) -> Option<&Position> {
		self.points.get(main)?.get(sub)
	}
	/// number of main indices, anchor included
	pub fn len(&self) -> usize {
		self.points.len()
	}
	/// always false for projected routes, the anchor is always present
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
	/// true when the route had no edges to project
	pub fn is_trivial(&self) -> bool {
		self.points.len() <= 1
	}
	pub fn anchor(&self) -> &Position {
		&self.points[0][0]
	}
	pub fn destination(&self) -> &Position {
		self.flat().last().unwrap_or_else(|| self.anchor())
	}
	pub fn groups(&self) -> &[Vec<Position>] {
		&self.points
	}
	/// every point in walking order
	pub fn flat(&self) -> impl DoubleEndedIterator<Item = &Position> + '_ {
		self.points.iter().flatten()
	}
}

impl Index<usize> for ProjectedRoute {
	type Output = [Position];

	fn index(&self, main: usize) -> &Self::Output {
		&self.points[main]
	}
}

/// Walks `route` from `anchor`, accumulating each step's displacement.
///
/// The last point of every non-empty edge is tagged with the node the edge
/// leads to.
pub fn project(route: &Route, anchor: Position, scale: f64) -> Result<ProjectedRoute> {
	let mut anchor = anchor;
	if anchor.node.is_none() {
		anchor.node = Some(route.start.clone());
	}

	let mut cursor = anchor.vec();
	let mut points = Vec::with_capacity(route.edges.len() + 1);
	points.push(vec![anchor]);

	for (e, edge) in route.edges.iter().enumerate() {
		let mut edge_points = Vec::with_capacity(edge.path.len());
		for (s, step) in edge.path.iter().enumerate() {
			if !(step.distance.is_finite() && step.distance > 0.0) {
				return Err(NavError::InvalidStep {
					edge: e,
					step: s,
					distance: step.distance,
				});
			}
			cursor += displacement(step, scale);
			edge_points.push(Position::from(cursor));
		}
		if let Some(last) = edge_points.last_mut() {
			last.node = Some(edge.to.clone());
		} else {
			log::debug!("edge {e} to {} has no path, projecting it empty", edge.to);
		}
		points.push(edge_points);
	}

	log::info!(
		"projected route from {} over {} edges ({} points)",
		route.start,
		route.edges.len(),
		points.iter().map(Vec::len).sum::<usize>()
	);
	Ok(ProjectedRoute { points })
}

/// Like [`project`] but looks the anchor up in a node table.
pub fn project_from_table(route: &Route, table: &NodeTable, scale: f64) -> Result<ProjectedRoute> {
	let anchor = table.get(&route.start).ok_or_else(|| {
		log::error!("start node {} is not in the node table", route.start);
		NavError::MissingAnchor {
			node: route.start.clone(),
		}
	})?;
	project(route, anchor, scale)
}

#[cfg(test)]
pub(crate) mod fixtures {
	use super::*;

	/// builds a projected route straight from coordinates
	pub fn projected(points: Vec<Vec<(f64, f64)>>) -> ProjectedRoute {
		ProjectedRoute {
			points: points
				.into_iter()
				.map(|edge| edge.into_iter().map(|(x, y)| Position::new(x, y)).collect())
				.collect(),
		}
	}
}
