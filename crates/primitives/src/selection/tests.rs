use super::*;
use crate::{Rope, Transaction};

#[test]
fn point_selection() {
	let sel = Selection::point(5);
	assert_eq!(sel.primary(), Range::point(5));
	assert_eq!(sel.start(), 5);
}

#[test]
fn backward_selection_starts_at_head() {
	let sel = Selection::single(9, 2);
	assert_eq!(sel.start(), 2);
	assert_eq!(sel.primary().to(), 9);
}

#[test]
fn cursor_at_insertion_point_advances() {
	let doc = Rope::from("x = 1;");
	let tx = Transaction::insert_at(doc.slice(..), 6, "abc".into()).expect("in bounds");
	let mapped = Selection::point(6).map(tx.changes());
	assert_eq!(mapped, Selection::point(9));
}

#[test]
fn cursor_before_insertion_stays() {
	let doc = Rope::from("hello");
	let tx = Transaction::insert_at(doc.slice(..), 3, "--".into()).expect("in bounds");
	let mapped = Selection::point(1).map(tx.changes());
	assert_eq!(mapped, Selection::point(1));
}

#[test]
fn selection_after_insertion_shifts() {
	let doc = Rope::from("hello world");
	let tx = Transaction::insert_at(doc.slice(..), 0, "!! ".into()).expect("in bounds");
	let mapped = Selection::single(6, 11).map(tx.changes());
	assert_eq!(mapped.primary(), Range::new(9, 14));
}

#[test]
fn clamp_and_bounds() {
	let mut sel = Selection::single(2, 20);
	assert!(!sel.is_in_bounds(10));
	sel.clamp(10);
	assert!(sel.is_in_bounds(10));
	assert_eq!(sel.primary(), Range::new(2, 10));
}
