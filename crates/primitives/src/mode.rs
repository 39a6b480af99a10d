//!
//! Primary editor mode state.

use serde::{Deserialize, Serialize};

/// Mode reported by the primary editor engine.
///
/// Only the insert/replace and visual/select families influence how a cursor
/// is projected into a selection; the remaining modes are carried through
/// reconciliation unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
	#[default]
	Normal,
	Insert,
	Replace,
	/// Character-wise visual selection.
	Visual,
	VisualLine,
	VisualBlock,
	Select,
	SelectLine,
	SelectBlock,
	/// Waiting for a motion to complete an operator.
	OperatorPending,
	CommandLine,
	Terminal,
	/// Any mode the primary engine reports that has no dedicated variant.
	Other,
}

impl Mode {
	/// Returns a simple string identifier for the mode.
	pub fn name(&self) -> &'static str {
		match self {
			Mode::Normal => "normal",
			Mode::Insert => "insert",
			Mode::Replace => "replace",
			Mode::Visual => "visual",
			Mode::VisualLine => "visual-line",
			Mode::VisualBlock => "visual-block",
			Mode::Select => "select",
			Mode::SelectLine => "select-line",
			Mode::SelectBlock => "select-block",
			Mode::OperatorPending => "operator-pending",
			Mode::CommandLine => "command-line",
			Mode::Terminal => "terminal",
			Mode::Other => "other",
		}
	}

	/// Returns `true` for modes whose cursor marks a bare insertion point.
	pub fn is_insertion(&self) -> bool {
		matches!(self, Mode::Insert | Mode::Replace)
	}
}
