//! Line-level diffing between the two sides' contents.
//!
//! [`diff`] computes a minimal edit script over whole lines using Myers'
//! algorithm and lowers it into ordered [`Edit`] steps. Scripts are
//! deterministic for identical inputs: where a block of lines is replaced,
//! the deletion is always emitted before the insertion at the same index.

#[cfg(test)]
mod tests;

use similar::{Algorithm, DiffOp, capture_diff_slices};

/// A single step of an [`EditScript`].
///
/// Indices refer to the sequence as already transformed by the preceding
/// steps of the same script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
	/// Remove `count` lines starting at index `at`.
	Delete {
		/// Index of the first removed line.
		at: usize,
		/// Number of removed lines.
		count: usize,
	},
	/// Insert `lines` before index `at`.
	Insert {
		/// Index the lines are inserted before.
		at: usize,
		/// The inserted lines.
		lines: Vec<String>,
	},
}

/// Ordered list of line insertions and deletions sufficient to transform one
/// line sequence into another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditScript {
	edits: Vec<Edit>,
}

impl EditScript {
	/// Returns `true` when the script performs no edits.
	pub fn is_empty(&self) -> bool {
		self.edits.is_empty()
	}

	/// Returns the individual edit steps in application order.
	pub fn edits(&self) -> &[Edit] {
		&self.edits
	}

	/// Replays the script against `lines` in place.
	pub fn apply_to(&self, lines: &mut Vec<String>) {
		for edit in &self.edits {
			match edit {
				Edit::Delete { at, count } => {
					lines.drain(*at..*at + *count);
				}
				Edit::Insert { at, lines: inserted } => {
					lines.splice(*at..*at, inserted.iter().cloned());
				}
			}
		}
	}
}

impl From<Vec<Edit>> for EditScript {
	fn from(edits: Vec<Edit>) -> Self {
		Self { edits }
	}
}

/// Computes the line edit script transforming `from` into `to`.
pub fn diff(from: &[String], to: &[String]) -> EditScript {
	let mut edits = Vec::new();
	// Offset between indices in `from` and indices in the partially
	// transformed sequence the script operates on.
	let mut offset = 0isize;

	for op in capture_diff_slices(Algorithm::Myers, from, to) {
		match op {
			DiffOp::Equal { .. } => {}
			DiffOp::Delete { old_index, old_len, .. } => {
				edits.push(Edit::Delete {
					at: (old_index as isize + offset) as usize,
					count: old_len,
				});
				offset -= old_len as isize;
			}
			DiffOp::Insert { old_index, new_index, new_len } => {
				edits.push(Edit::Insert {
					at: (old_index as isize + offset) as usize,
					lines: to[new_index..new_index + new_len].to_vec(),
				});
				offset += new_len as isize;
			}
			DiffOp::Replace { old_index, old_len, new_index, new_len } => {
				let at = (old_index as isize + offset) as usize;
				edits.push(Edit::Delete { at, count: old_len });
				edits.push(Edit::Insert {
					at,
					lines: to[new_index..new_index + new_len].to_vec(),
				});
				offset += new_len as isize - old_len as isize;
			}
		}
	}

	EditScript { edits }
}
