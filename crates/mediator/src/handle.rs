//! Sender half of the mediator's event queue.
//!
//! Every driver notification translates 1:1 into an engine event; arrival
//! order on this queue is the processing order. The handle is the only way
//! to feed a running mediator, which keeps the engine's no-reentrancy
//! contract trivially satisfied.

use duet_engine::{ChangeDescriptor, Event, Side};
use duet_primitives::{Cursor, Selection};
use thiserror::Error;
use tokio::sync::mpsc;

/// The mediator's event queue is gone because its run loop exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("mediator event queue is closed")]
pub struct MediatorClosed;

/// Cloneable handle feeding events into one mediator's queue.
#[derive(Debug, Clone)]
pub struct MediatorHandle {
	tx: mpsc::Sender<Event>,
}

impl MediatorHandle {
	pub(crate) fn new(tx: mpsc::Sender<Event>) -> Self {
		Self { tx }
	}

	async fn send(&self, event: Event) -> Result<(), MediatorClosed> {
		self.tx.send(event).await.map_err(|_| MediatorClosed)
	}

	/// Reports a primary buffer content change.
	pub async fn primary_content_changed(
		&self,
		lines: Vec<String>,
		change: ChangeDescriptor,
	) -> Result<(), MediatorClosed> {
		self.send(Event::PrimaryContentChanged { lines, change }).await
	}

	/// Reports a primary cursor move or mode switch.
	pub async fn primary_cursor_changed(&self, cursor: Cursor) -> Result<(), MediatorClosed> {
		self.send(Event::PrimaryCursorChanged { cursor }).await
	}

	/// Reports the secondary buffer regaining focus, with its currently
	/// observed content and selection.
	pub async fn secondary_did_focus(
		&self,
		lines: Vec<String>,
		selection: Selection,
	) -> Result<(), MediatorClosed> {
		self.send(Event::SecondaryDidFocus { lines, selection }).await
	}

	/// Reports a secondary buffer content change.
	pub async fn secondary_content_changed(&self, lines: Vec<String>) -> Result<(), MediatorClosed> {
		self.send(Event::SecondaryContentChanged { lines }).await
	}

	/// Reports a secondary selection change.
	pub async fn secondary_selection_changed(
		&self,
		selection: Selection,
	) -> Result<(), MediatorClosed> {
		self.send(Event::SecondarySelectionChanged { selection }).await
	}

	/// Requests a full resync using `source` as ground truth.
	pub async fn request_refresh(&self, source: Side) -> Result<(), MediatorClosed> {
		self.send(Event::UserRequestedRefresh { source }).await
	}

	/// Reports a collaborator fault to surface to the user.
	pub async fn report_failure(&self, message: impl Into<String>) -> Result<(), MediatorClosed> {
		self.send(Event::OperationFailed {
			message: message.into(),
		})
		.await
	}
}
