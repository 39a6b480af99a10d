//! Inbound notifications consumed by the reconciliation engine.

use duet_primitives::{Cursor, Selection};

use crate::state::Side;

/// Primary-engine-native description of a content change: the half-open line
/// range `[first_line, last_line)` is replaced by `lines`.
///
/// Carried alongside full content so the secondary side can be patched
/// directly without recomputing a diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDescriptor {
	/// Index of the first replaced line.
	pub first_line: usize,
	/// One past the index of the last replaced line.
	pub last_line: usize,
	/// Replacement lines.
	pub lines: Vec<String>,
}

/// One notification from either side, the timer, or the user.
///
/// Events form a closed set; the mediator translates driver notifications
/// 1:1 and feeds them in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
	/// The outstanding token timeout elapsed with no further activity.
	TokenTimedOut,
	/// Force a full resync using `source` as ground truth.
	UserRequestedRefresh {
		/// Side whose content wins.
		source: Side,
	},
	/// Primary buffer content changed.
	PrimaryContentChanged {
		/// Full content after the change.
		lines: Vec<String>,
		/// The primary engine's own delta for this change.
		change: ChangeDescriptor,
	},
	/// Primary cursor moved or switched mode.
	PrimaryCursorChanged {
		/// The new cursor.
		cursor: Cursor,
	},
	/// Secondary buffer regained focus. A third party may have mutated it
	/// while unfocused, so the currently observed content and selection are
	/// supplied.
	SecondaryDidFocus {
		/// Observed content.
		lines: Vec<String>,
		/// Observed selection.
		selection: Selection,
	},
	/// Secondary buffer content changed.
	SecondaryContentChanged {
		/// Full content after the change.
		lines: Vec<String>,
	},
	/// Secondary selection changed.
	SecondarySelectionChanged {
		/// The new selection.
		selection: Selection,
	},
	/// A collaborator reported a fault while carrying out an action.
	OperationFailed {
		/// Opaque description of the fault, forwarded verbatim to the user.
		message: String,
	},
}
