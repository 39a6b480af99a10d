use serde::{Deserialize, Serialize};

use crate::Position;

/// A span in the secondary buffer between two positions.
///
/// `start` and `end` carry whatever anchor/head semantics the caller supplies;
/// no ordering between them is enforced. An empty selection has
/// `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
	/// Anchor position.
	pub start: Position,
	/// Head position.
	pub end: Position,
}

impl Selection {
	/// Creates a new selection.
	pub const fn new(start: Position, end: Position) -> Self {
		Self { start, end }
	}

	/// Creates an empty selection collapsed to a single position.
	pub const fn point(pos: Position) -> Self {
		Self { start: pos, end: pos }
	}

	/// Returns `true` when the selection is collapsed to a single point.
	pub fn is_point(&self) -> bool {
		self.start == self.end
	}
}
