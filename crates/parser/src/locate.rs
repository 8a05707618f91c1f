//! Offset locator.
//!
//! Offsets resolve against half-open spans: a statement `[start, end)` owns
//! `start` but not `end`, so an offset on the boundary between two siblings
//! belongs to the second one. Zero-width statements never match.

use crate::reduce::{StatementArena, StatementId};

/// Innermost statement containing `offset`, if any.
pub fn statement_at(arena: &StatementArena, offset: usize) -> Option<StatementId> {
  let mut found = None;
  let mut level: &[StatementId] = &arena.roots;

  // Siblings are ordered and disjoint, so their ends are sorted too.
  loop {
    let at = level.partition_point(|&id| arena.get(id).end <= offset);
    match level.get(at) {
      Some(&id) if arena.get(id).contains(offset) => {
        found = Some(id);
        level = &arena.get(id).children;
      }
      _ => return found,
    }
  }
}
