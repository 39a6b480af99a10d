//! Corrective actions emitted by the reconciliation engine.

use duet_primitives::{Position, Selection};

use crate::diff::EditScript;
use crate::event::ChangeDescriptor;

/// One corrective step for the mediator to execute.
///
/// Actions returned from a single transition are ordered; the mediator must
/// issue them all before feeding the next event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Replace primary content per the edit script, then set the cursor.
	ApplyToPrimary {
		/// Target content once the script has run.
		lines: Vec<String>,
		/// Line edits transforming the primary's current content.
		script: EditScript,
		/// Cursor position to set after the edit lands.
		cursor: Position,
	},
	/// Move the primary cursor.
	SetPrimaryCursor {
		/// The new cursor position.
		position: Position,
	},
	/// Replace secondary content per the edit script, then set the selection.
	ApplyToSecondary {
		/// Target content once the script has run.
		lines: Vec<String>,
		/// Line edits transforming the secondary's current content.
		script: EditScript,
		/// Selection to set after the edit lands.
		selection: Selection,
	},
	/// Apply the primary's own delta to the secondary directly, bypassing
	/// diffing.
	ApplyPartialToSecondary {
		/// The delta as described by the primary engine.
		change: ChangeDescriptor,
	},
	/// Move the secondary selection.
	SetSecondarySelection {
		/// The new selection.
		selection: Selection,
	},
	/// (Re)start the token timeout; any pending timeout is superseded.
	RearmTimeout,
	/// Notify the user an operation was rejected.
	Ring,
	/// Surface a collaborator fault to the user.
	Alert {
		/// Opaque fault description.
		message: String,
	},
}
