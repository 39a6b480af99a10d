//! The serialized event loop driving one buffer pairing.


use duet_engine::{Action, BufferState, Event, PrimaryState, SecondaryState};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};

use crate::config::SyncConfig;
use crate::driver::{DriverError, PrimaryDriver, SecondaryDriver, UserSignal};
use crate::handle::MediatorHandle;

/// Owns one [`BufferState`] and the drivers for both sides of a pairing.
///
/// Driver notifications, user refreshes and the token timeout all funnel
/// through one queue and are processed strictly one at a time. The actions of
/// each transition are fully issued before the next event is taken, and there
/// is no mid-action cancellation.
pub struct Mediator<P, S, U> {
	state: BufferState,
	rx: mpsc::Receiver<Event>,
	primary: P,
	secondary: S,
	signal: U,
	config: SyncConfig,
	/// Single-slot token timeout. Re-arming replaces the deadline; elapse
	/// injects exactly one `TokenTimedOut` event and disarms. There is never
	/// more than one live timeout per pairing.
	deadline: Option<Instant>,
}

impl<P, S, U> Mediator<P, S, U>
where
	P: PrimaryDriver,
	S: SecondaryDriver,
	U: UserSignal,
{
	/// Establishes a pairing from both sides' initial state.
	///
	/// Returns the mediator plus the handle used to feed it; the mediator
	/// exits once every handle clone is dropped.
	pub fn new(
		primary_state: PrimaryState,
		secondary_state: SecondaryState,
		primary: P,
		secondary: S,
		signal: U,
		config: SyncConfig,
	) -> (Self, MediatorHandle) {
		let (tx, rx) = mpsc::channel(config.queue_capacity);
		let mediator = Self {
			state: BufferState::new(primary_state, secondary_state),
			rx,
			primary,
			secondary,
			signal,
			config,
			deadline: None,
		};
		(mediator, MediatorHandle::new(tx))
	}

	/// Runs the pairing until every handle is dropped.
	pub async fn run(mut self) {
		while let Some(event) = self.next_event().await {
			self.step(event).await;
		}
		tracing::debug!("pairing torn down, mediator exiting");
	}

	/// Waits for the next event from the queue or the timeout slot.
	async fn next_event(&mut self) -> Option<Event> {
		match self.deadline {
			Some(deadline) => tokio::select! {
				event = self.rx.recv() => event,
				_ = sleep_until(deadline) => {
					self.deadline = None;
					Some(Event::TokenTimedOut)
				}
			},
			None => self.rx.recv().await,
		}
	}

	/// Feeds one event through the engine and executes the resulting actions.
	async fn step(&mut self, event: Event) {
		for action in self.state.on(event) {
			if let Err(error) = self.execute(action).await {
				tracing::warn!(%error, "driver failed to carry out an action");
				// Route the fault back through the engine so it surfaces to
				// the user like any other collaborator failure.
				for followup in self.state.on(Event::OperationFailed {
					message: error.to_string(),
				}) {
					// The failure transition only produces signal actions,
					// which cannot themselves fail.
					let _ = self.execute(followup).await;
				}
			}
		}
	}

	async fn execute(&mut self, action: Action) -> Result<(), DriverError> {
		match action {
			Action::ApplyToPrimary { lines, script, cursor } => {
				self.primary.apply(&lines, &script, cursor).await
			}
			Action::SetPrimaryCursor { position } => self.primary.set_cursor(position).await,
			Action::ApplyToSecondary { lines, script, selection } => {
				self.secondary.apply(&lines, &script, selection).await
			}
			Action::ApplyPartialToSecondary { change } => {
				self.secondary.apply_partial(&change).await
			}
			Action::SetSecondarySelection { selection } => {
				self.secondary.set_selection(selection).await
			}
			Action::RearmTimeout => {
				self.deadline = Some(Instant::now() + self.config.token_timeout);
				Ok(())
			}
			Action::Ring => {
				self.signal.ring();
				Ok(())
			}
			Action::Alert { message } => {
				self.signal.alert(&message);
				Ok(())
			}
		}
	}
}
