use proptest::prelude::*;

use super::{Edit, diff};

fn lines(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn identical_sequences_produce_an_empty_script() {
	let content = lines(&["a", "b", "c"]);
	assert!(diff(&content, &content).is_empty());
}

#[test]
fn empty_sequences_produce_an_empty_script() {
	assert!(diff(&[], &[]).is_empty());
}

#[test]
fn empty_to_content_inserts_everything() {
	let script = diff(&[], &lines(&["a", "b"]));
	assert_eq!(
		script.edits(),
		&[Edit::Insert {
			at: 0,
			lines: lines(&["a", "b"]),
		}]
	);
}

#[test]
fn content_to_empty_deletes_everything() {
	let script = diff(&lines(&["a", "b"]), &[]);
	assert_eq!(script.edits(), &[Edit::Delete { at: 0, count: 2 }]);
}

#[test]
fn insertion_in_the_middle() {
	let script = diff(&lines(&["a", "b"]), &lines(&["a", "x", "b"]));
	assert_eq!(
		script.edits(),
		&[Edit::Insert {
			at: 1,
			lines: lines(&["x"]),
		}]
	);
}

#[test]
fn replacement_emits_the_deletion_before_the_insertion() {
	let script = diff(&lines(&["a", "old", "b"]), &lines(&["a", "new", "b"]));
	assert_eq!(
		script.edits(),
		&[
			Edit::Delete { at: 1, count: 1 },
			Edit::Insert {
				at: 1,
				lines: lines(&["new"]),
			},
		]
	);
}

#[test]
fn complete_replacement_round_trips() {
	let from = lines(&["a", "b"]);
	let to = lines(&["x", "y", "z"]);
	let script = diff(&from, &to);

	assert!(matches!(script.edits()[0], Edit::Delete { .. }));

	let mut patched = from;
	script.apply_to(&mut patched);
	assert_eq!(patched, to);
}

#[test]
fn multi_hunk_scripts_replay_in_order() {
	let from = lines(&["fn main() {", "    old();", "}", "", "mod a {}"]);
	let to = lines(&["fn main() {", "    new();", "}", "", "mod a {}", "mod b {}"]);

	let script = diff(&from, &to);
	let mut patched = from;
	script.apply_to(&mut patched);
	assert_eq!(patched, to);
}

proptest! {
	/// Applying `diff(a, b)` to `a` yields exactly `b`.
	#[test]
	fn prop_diff_round_trip(
		a in prop::collection::vec("[ab]{0,2}", 0..12),
		b in prop::collection::vec("[ab]{0,2}", 0..12),
	) {
		let script = diff(&a, &b);
		let mut patched = a.clone();
		script.apply_to(&mut patched);
		prop_assert_eq!(patched, b);
	}

	/// A script is empty exactly when the inputs are already equal.
	#[test]
	fn prop_empty_script_iff_equal(
		a in prop::collection::vec("[ab]{0,2}", 0..10),
		b in prop::collection::vec("[ab]{0,2}", 0..10),
	) {
		prop_assert_eq!(diff(&a, &b).is_empty(), a == b);
	}
}
