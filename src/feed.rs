use std::sync::mpsc::{self, Receiver, SendError, Sender, TryRecvError};

use crate::{
	error::{NavError, Result},
	route::Position,
	session::NavigationSession,
	tracker::TrackerState,
	vec::Vec2,
};

pub type Sample = (Position, Option<Vec2>);

#[derive(Debug, Clone)]
pub struct SampleProducer {
	tx: Sender<Sample>,
}

impl SampleProducer {
	pub fn send(&self, position: Position, heading: Option<Vec2>) -> std::result::Result<(), SendError<Sample>> {
		self.tx.send((position, heading))
	}
}

/// Every producer pushes into one channel, the session owner drains it in order.
pub struct SampleFeed {
	rx: Receiver<Sample>,
}

impl SampleFeed {
	pub fn channel() -> (SampleProducer, SampleFeed) {
		let (tx, rx) = mpsc::channel();
		(SampleProducer { tx }, SampleFeed { rx })
	}

	/// Applies every sample already queued, without blocking. Returns how
	/// many were applied.
	pub fn pump(&self, session: &mut NavigationSession) -> usize {
		let mut applied = 0;
		loop {
			match self.rx.try_recv() {
				Ok((position, heading)) => {
					session.on_sample(position, heading);
					applied += 1;
				}
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
		applied
	}

	/// Blocks on the queue until the session arrives, calling `observe` after
	/// every sample. Gives up with [`NavError::FeedClosed`] when every
	/// producer hangs up first.
	pub fn run<F>(&self, session: &mut NavigationSession, mut observe: F) -> Result<()>
	where
		F: FnMut(&TrackerState),
	{
		while !session.state().arrived {
			let (position, heading) = self.rx.recv().map_err(|_| NavError::FeedClosed)?;
			observe(session.on_sample(position, heading));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::NavConfig;
	use crate::route::{fixtures::edge, Direction::*, NodeTable, Route};

	fn session() -> NavigationSession {
		let mut nodes = NodeTable::new();
		nodes.insert("A", Vec2::ZERO);
		let route = Route::new("A", vec![edge("B", &[(East, 10.0)])]);
		NavigationSession::start(route, &nodes, NavConfig::default()).unwrap()
	}

	#[test]
	fn samples_from_many_threads_reach_one_session() {
		let (producer, feed) = SampleFeed::channel();
		let mut session = session();

		let handles: Vec<_> = (0..4)
			.map(|i| {
				let producer = producer.clone();
				std::thread::spawn(move || {
					producer
						.send(Position::new(1000.0 + i as f64, 5000.0), None)
						.unwrap();
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}

		assert_eq!(feed.pump(&mut session), 4);
		assert!(!session.state().on_track);
		assert_eq!(feed.pump(&mut session), 0);
	}

	#[test]
	fn run_stops_on_arrival() {
		let (producer, feed) = SampleFeed::channel();
		let mut session = session();
		producer.send(Position::new(0.0, 0.0), None).unwrap();
		producer.send(Position::new(2100.0, 0.0), None).unwrap();
		// never consumed, the session has arrived by then
		producer.send(Position::new(9999.0, 0.0), None).unwrap();

		let mut seen = 0;
		feed.run(&mut session, |_| seen += 1).unwrap();
		assert_eq!(seen, 2);
		assert!(session.state().arrived);
	}

	#[test]
	fn run_reports_closed_feed() {
		let (producer, feed) = SampleFeed::channel();
		let mut session = session();
		drop(producer);
		assert_eq!(feed.run(&mut session, |_| {}), Err(NavError::FeedClosed));
	}
}
