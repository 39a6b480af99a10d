use serde::{Deserialize, Serialize};

use crate::{Mode, Position, Selection};

/// Primary-side cursor: a position plus the mode it was observed in.
///
/// The secondary side has no native concept of a mode, only a selection, so a
/// cursor is projected into a [`Selection`] whenever primary state crosses
/// over (see [`Cursor::to_selection`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursor {
	/// Position of the cursor.
	pub position: Position,
	/// Mode the primary engine was in when the cursor was observed.
	pub mode: Mode,
}

impl Cursor {
	/// Creates a new cursor.
	pub const fn new(position: Position, mode: Mode) -> Self {
		Self { position, mode }
	}

	/// Projects the cursor into a secondary-side selection.
	///
	/// Insert-like modes collapse to a point at the cursor position. Every
	/// other mode spans from the cursor to one column past it on the same
	/// line, a character-wise approximation of a block cursor. Rectangular
	/// visual selections cannot be represented by this mapping; the
	/// approximation is deliberate.
	pub fn to_selection(&self) -> Selection {
		if self.mode.is_insertion() {
			Selection::point(self.position)
		} else {
			Selection::new(
				self.position,
				Position::new(self.position.line, self.position.column + 1),
			)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_mode_projects_to_point() {
		let cursor = Cursor::new(Position::new(3, 7), Mode::Insert);
		let sel = cursor.to_selection();
		assert!(sel.is_point());
		assert_eq!(sel.start, Position::new(3, 7));
	}

	#[test]
	fn replace_mode_projects_to_point() {
		let cursor = Cursor::new(Position::new(0, 0), Mode::Replace);
		assert!(cursor.to_selection().is_point());
	}

	#[test]
	fn normal_mode_projects_to_one_column_span() {
		let cursor = Cursor::new(Position::new(2, 4), Mode::Normal);
		let sel = cursor.to_selection();
		assert_eq!(sel.start, Position::new(2, 4));
		assert_eq!(sel.end, Position::new(2, 5));
	}

	#[test]
	fn visual_block_projects_to_one_column_span() {
		// Rectangular selections are approximated by a single-cell span.
		let cursor = Cursor::new(Position::new(5, 1), Mode::VisualBlock);
		let sel = cursor.to_selection();
		assert_eq!(sel.end, Position::new(5, 2));
	}

	#[test]
	fn positions_order_line_then_column() {
		assert!(Position::new(1, 9) < Position::new(2, 0));
		assert!(Position::new(2, 1) < Position::new(2, 4));
	}
}
