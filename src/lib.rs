pub mod config;
pub mod error;
pub mod feed;
pub mod geometry;
pub mod heading;
pub mod instructions;
pub mod message;
pub mod projector;
pub mod route;
pub mod session;
pub mod sim;
pub mod tracker;
pub mod vec;

pub use crate::{
	config::NavConfig,
	error::{NavError, Result},
	geometry::TurnLabel,
	instructions::{Instruction, InstructionGroups},
	projector::ProjectedRoute,
	route::{Direction, Edge, NodeTable, PathStep, Position, Route},
	session::NavigationSession,
	tracker::{Phase, RouteTracker, TrackerState},
	vec::Vec2,
};
