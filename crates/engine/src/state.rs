//! Reconciliation state: both sides' last-known buffers and the edition
//! token arbitrating write authority between them.

use duet_primitives::{Cursor, Selection};

/// Identifies one of the two paired buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
	/// The externally driven editing engine, usually authoritative.
	Primary,
	/// The UI-observed buffer kept in sync with the primary.
	Secondary,
}

impl Side {
	/// Returns a simple string identifier for the side.
	pub fn name(self) -> &'static str {
		match self {
			Side::Primary => "primary",
			Side::Secondary => "secondary",
		}
	}
}

/// Tri-state ownership flag: the single piece of mutable arbitration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditionToken {
	/// Neither side holds write authority; the next edit from either side may
	/// acquire it.
	#[default]
	Free,
	/// The named side holds authority. Its own further edits pass through;
	/// edits from the other side are recorded but not propagated.
	Acquired(Side),
	/// A full-content resync was dispatched to the non-authoritative side;
	/// reverts to [`EditionToken::Free`] on the next timeout.
	Synchronizing,
}

/// Last-known primary buffer state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimaryState {
	/// Cursor as last reported by the primary engine.
	pub cursor: Cursor,
	/// Content as last observed from the primary buffer.
	pub lines: Vec<String>,
}

/// Last-known secondary buffer state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecondaryState {
	/// Selection as last observed from the secondary buffer.
	pub selection: Selection,
	/// Content as last observed from the secondary buffer.
	pub lines: Vec<String>,
}

/// Entire persistent reconciliation state for one logical buffer pairing.
///
/// Value-typed and owned exclusively by one mediator.
/// Constructed once both sides reported initial content, mutated
/// only through [`BufferState::on`](crate::BufferState::on), and dropped when
/// the pairing is torn down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferState {
	pub(crate) token: EditionToken,
	pub(crate) primary: PrimaryState,
	pub(crate) secondary: SecondaryState,
}

impl BufferState {
	/// Creates the state for a freshly established pairing.
	pub fn new(primary: PrimaryState, secondary: SecondaryState) -> Self {
		Self {
			token: EditionToken::Free,
			primary,
			secondary,
		}
	}

	/// Current ownership token.
	pub fn token(&self) -> EditionToken {
		self.token
	}

	/// Last-known primary state.
	pub fn primary(&self) -> &PrimaryState {
		&self.primary
	}

	/// Last-known secondary state.
	pub fn secondary(&self) -> &SecondaryState {
		&self.secondary
	}
}
