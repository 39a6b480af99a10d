//! Transition logic for the buffer reconciliation state machine.
//!
//! Every transition records the reporting side's fields unconditionally and
//! then arbitrates through the edition token. Corrective actions are emitted
//! in the same step that detected the divergence; there is no deferred
//! reconciliation.


use duet_primitives::{Cursor, Selection};

use crate::action::Action;
use crate::diff;
use crate::event::{ChangeDescriptor, Event};
use crate::state::{BufferState, EditionToken, Side};

impl BufferState {
	/// Advances the state machine by one event, returning the ordered
	/// corrective actions to execute.
	///
	/// Not reentrant: the caller must fully issue the returned actions before
	/// feeding the next event, since later transitions assume earlier actions
	/// are in flight.
	pub fn on(&mut self, event: Event) -> Vec<Action> {
		match event {
			Event::TokenTimedOut => self.on_token_timed_out(),
			Event::UserRequestedRefresh { source } => self.on_refresh_requested(source),
			Event::PrimaryContentChanged { lines, change } => self.on_primary_content(lines, change),
			Event::PrimaryCursorChanged { cursor } => self.on_primary_cursor(cursor),
			Event::SecondaryDidFocus { lines, selection } => self.on_secondary_focus(lines, selection),
			Event::SecondaryContentChanged { lines } => self.on_secondary_content(lines),
			Event::SecondarySelectionChanged { selection } => self.on_secondary_selection(selection),
			Event::OperationFailed { message } => vec![Action::Alert { message }],
		}
	}

	fn on_token_timed_out(&mut self) -> Vec<Action> {
		match self.token {
			EditionToken::Free => Vec::new(),
			EditionToken::Synchronizing => {
				self.token = EditionToken::Free;
				Vec::new()
			}
			// A stale acquisition is treated as the owner handing authority
			// back through a full sync of whatever it last wrote.
			EditionToken::Acquired(owner) => self.synchronize(owner),
		}
	}

	fn on_refresh_requested(&mut self, source: Side) -> Vec<Action> {
		if self.token == EditionToken::Free {
			self.synchronize(source)
		} else {
			tracing::debug!(
				source = source.name(),
				token = ?self.token,
				"refresh rejected while token is busy"
			);
			vec![Action::Ring]
		}
	}

	fn on_primary_content(&mut self, lines: Vec<String>, change: ChangeDescriptor) -> Vec<Action> {
		self.primary.lines = lines;
		if !self.acquire(Side::Primary) {
			return Vec::new();
		}
		vec![
			Action::RearmTimeout,
			Action::ApplyPartialToSecondary { change },
			Action::SetSecondarySelection {
				selection: self.primary.cursor.to_selection(),
			},
		]
	}

	fn on_primary_cursor(&mut self, cursor: Cursor) -> Vec<Action> {
		self.primary.cursor = cursor;
		if !self.acquire(Side::Primary) {
			return Vec::new();
		}
		vec![
			Action::RearmTimeout,
			Action::SetSecondarySelection {
				selection: cursor.to_selection(),
			},
		]
	}

	fn on_secondary_focus(&mut self, lines: Vec<String>, selection: Selection) -> Vec<Action> {
		self.secondary.lines = lines;
		self.secondary.selection = selection;
		self.propagate_secondary_content()
	}

	fn on_secondary_content(&mut self, lines: Vec<String>) -> Vec<Action> {
		self.secondary.lines = lines;
		self.propagate_secondary_content()
	}

	fn on_secondary_selection(&mut self, selection: Selection) -> Vec<Action> {
		self.secondary.selection = selection;
		if !self.acquire(Side::Secondary) {
			return Vec::new();
		}
		let mut actions = vec![Action::RearmTimeout];
		// Skip the write when the primary cursor is already there.
		if selection.start != self.primary.cursor.position {
			actions.push(Action::SetPrimaryCursor {
				position: selection.start,
			});
		}
		actions
	}

	/// Pushes the secondary's recorded content onto the primary as a full
	/// sync. The primary has no equivalent of a partial change descriptor
	/// originating from the secondary, so the whole divergence is diffed.
	fn propagate_secondary_content(&mut self) -> Vec<Action> {
		if !self.acquire(Side::Secondary) {
			return Vec::new();
		}
		let mut actions = vec![Action::RearmTimeout];
		if !contents_match(&self.primary.lines, &self.secondary.lines) {
			actions.push(Action::ApplyToPrimary {
				lines: self.secondary.lines.clone(),
				script: diff::diff(&self.primary.lines, &self.secondary.lines),
				cursor: self.secondary.selection.start,
			});
		}
		actions
	}

	/// Attempts to claim the edition token for `side`.
	///
	/// Succeeds iff the token is free or already held by the same side. On
	/// failure the triggering event's payload stays recorded; the
	/// authoritative side's release will resync the divergence later.
	fn acquire(&mut self, side: Side) -> bool {
		match self.token {
			EditionToken::Free => {
				self.token = EditionToken::Acquired(side);
				true
			}
			EditionToken::Acquired(owner) if owner == side => true,
			EditionToken::Acquired(owner) => {
				tracing::debug!(
					held_by = owner.name(),
					requested_by = side.name(),
					"edit recorded but not propagated while token is held"
				);
				false
			}
			EditionToken::Synchronizing => {
				tracing::debug!(
					requested_by = side.name(),
					"edit recorded but not propagated while a resync is in flight"
				);
				false
			}
		}
	}

	/// Dispatches a full-content resync with `source` as ground truth.
	///
	/// When the two sides already agree (after trailing-empty-line
	/// normalization) the token is simply released.
	fn synchronize(&mut self, source: Side) -> Vec<Action> {
		if contents_match(&self.primary.lines, &self.secondary.lines) {
			self.token = EditionToken::Free;
			return Vec::new();
		}

		tracing::debug!(source = source.name(), "dispatching full resync");
		let action = match source {
			Side::Primary => Action::ApplyToSecondary {
				lines: self.primary.lines.clone(),
				script: diff::diff(&self.secondary.lines, &self.primary.lines),
				selection: self.primary.cursor.to_selection(),
			},
			Side::Secondary => Action::ApplyToPrimary {
				lines: self.secondary.lines.clone(),
				script: diff::diff(&self.primary.lines, &self.secondary.lines),
				cursor: self.secondary.selection.start,
			},
		};
		self.token = EditionToken::Synchronizing;
		vec![action, Action::RearmTimeout]
	}
}

/// Compares the two sides' content, reconciling the trailing-empty-line
/// convention: some secondary hosts always append a trailing blank line, so
/// when the secondary ends with an empty line the primary lacks, the primary
/// is compared as if it carried one too. Comparison only; emitted scripts
/// always work on the raw line vectors.
fn contents_match(primary: &[String], secondary: &[String]) -> bool {
	if primary == secondary {
		return true;
	}
	let n = primary.len();
	secondary.len() == n + 1
		&& secondary[n].is_empty()
		&& !primary.last().is_some_and(|line| line.is_empty())
		&& secondary[..n] == primary[..]
}
