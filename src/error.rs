use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NavError {
	/// the route's start node has no known position, so nothing can be projected
	#[error("no anchor position for start node {node:?}")]
	MissingAnchor { node: String },
	#[error("edge {edge} step {step} has an invalid distance ({distance})")]
	InvalidStep {
		edge: usize,
		step: usize,
		distance: f64,
	},
	#[error("every producer of the sample feed has disconnected")]
	FeedClosed,
}

pub type Result<T> = std::result::Result<T, NavError>;
