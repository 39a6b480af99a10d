//! Driver seams toward the live buffers and the user-facing signal channel.
//!
//! Drivers translate engine actions into whatever native operations the
//! underlying buffer exposes. Both buffer drivers carry the same
//! echo-suppression obligation: an edit or cursor/selection write issued
//! through the driver must not come back as a change notification, or the
//! reconciliation loop would oscillate instead of converge.

use async_trait::async_trait;
use duet_engine::{ChangeDescriptor, EditScript};
use duet_primitives::{Position, Selection};
use thiserror::Error;

/// Fault reported by a buffer driver while carrying out an action.
///
/// The mediator does not retry; the fault is routed back through the engine
/// and surfaces to the user as an alert.
#[derive(Debug, Error)]
pub enum DriverError {
	/// The underlying buffer or its transport is gone.
	#[error("driver connection closed: {0}")]
	Closed(String),
	/// The driver failed to carry out the requested operation.
	#[error("{0}")]
	Failed(String),
}

/// Writes reconciliation actions into the primary editor engine.
///
/// Edits must be applied atomically relative to the driver's own
/// notification stream.
#[async_trait]
pub trait PrimaryDriver: Send {
	/// Replaces content per the edit script, then sets the cursor.
	async fn apply(
		&mut self,
		lines: &[String],
		script: &EditScript,
		cursor: Position,
	) -> Result<(), DriverError>;

	/// Moves the cursor.
	async fn set_cursor(&mut self, position: Position) -> Result<(), DriverError>;
}

/// Writes reconciliation actions into the secondary UI buffer.
#[async_trait]
pub trait SecondaryDriver: Send {
	/// Replaces content per the edit script, then sets the selection.
	async fn apply(
		&mut self,
		lines: &[String],
		script: &EditScript,
		selection: Selection,
	) -> Result<(), DriverError>;

	/// Applies the primary's own delta directly, without a preceding diff.
	async fn apply_partial(&mut self, change: &ChangeDescriptor) -> Result<(), DriverError>;

	/// Moves the selection.
	async fn set_selection(&mut self, selection: Selection) -> Result<(), DriverError>;
}

/// Presentation-layer notifications. Fire-and-forget, no return value.
pub trait UserSignal: Send {
	/// Signals that an operation was rejected.
	fn ring(&mut self);

	/// Surfaces a collaborator fault.
	fn alert(&mut self, message: &str);
}
