use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Zero-based buffer position in line/column coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based column offset in the line.
	pub column: usize,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}
}

impl Ord for Position {
	fn cmp(&self, other: &Self) -> Ordering {
		self.line.cmp(&other.line).then(self.column.cmp(&other.column))
	}
}

impl PartialOrd for Position {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
