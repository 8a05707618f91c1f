//! Statement reducer: raw syntax tree + classification table → statement forest.

use std::ops::Range;

use tokio_util::sync::CancellationToken;

use crate::{
  error::TreeError,
  parser::{RawId, RawNode, RawTree},
  rules::{Classification, LanguageRules},
};

/// Index of a statement in a [`StatementArena`]
pub type StatementId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementData {
  pub kind: &'static str,
  pub start: usize,
  pub end: usize,
  pub start_byte: usize,
  pub end_byte: usize,
  pub compound: bool,
  pub parent: Option<StatementId>,
  pub children: Vec<StatementId>,
}

impl StatementData {
  /// Half-open containment: `start <= offset < end`
  pub fn contains(&self, offset: usize) -> bool {
    self.start <= offset && offset < self.end
  }
}

/// Backing storage for one built tree. Parents are indices, not owners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementArena {
  pub nodes: Vec<StatementData>,
  pub roots: Vec<StatementId>,
}

impl StatementArena {
  pub const EMPTY: StatementArena = StatementArena {
    nodes: Vec::new(),
    roots: Vec::new(),
  };

  pub fn get(&self, id: StatementId) -> &StatementData {
    &self.nodes[id]
  }
}

/// Walks a raw tree once, depth first, keeping statements that overlap the
/// range or enclose it.
pub struct Reducer<'a> {
  tree: &'a RawTree,
  rules: &'static LanguageRules,
  range: Range<usize>,
  cancel: &'a CancellationToken,
  check_interval: usize,
  visited: usize,
  arena: StatementArena,
}

impl<'a> Reducer<'a> {
  pub fn new(tree: &'a RawTree, rules: &'static LanguageRules, range: Range<usize>, cancel: &'a CancellationToken) -> Self {
    Self {
      tree,
      rules,
      range,
      cancel,
      check_interval: 256,
      visited: 0,
      arena: StatementArena::default(),
    }
  }

  pub fn check_interval(mut self, interval: usize) -> Self {
    self.check_interval = interval.max(1);
    self
  }

  pub fn reduce(mut self) -> Result<StatementArena, TreeError> {
    let Some(root) = self.tree.root() else {
      return Ok(self.arena);
    };

    // Popped in document order, so children are appended already sorted.
    let mut stack: Vec<(RawId, Option<StatementId>)> = vec![(root, None)];
    while let Some((id, parent)) = stack.pop() {
      self.visited += 1;
      if self.visited % self.check_interval == 0 && self.cancel.is_cancelled() {
        return Err(TreeError::Disposed);
      }

      let tree = self.tree;
      let node = tree.node(id);
      if !self.in_scope(node) {
        continue;
      }

      let below = match self.rules.classify(tree, id) {
        Classification::Opaque => continue,
        Classification::Skip => parent,
        Classification::Statement { compound, descend } => {
          let statement = self.push(node, compound, parent);
          if !descend {
            continue;
          }
          Some(statement)
        }
      };
      stack.extend(node.children.iter().rev().map(|&child| (child, below)));
    }
    Ok(self.arena)
  }

  fn push(&mut self, node: &RawNode, compound: bool, parent: Option<StatementId>) -> StatementId {
    let statement = self.arena.nodes.len();
    self.arena.nodes.push(StatementData {
      kind: node.kind,
      start: node.start,
      end: node.end,
      start_byte: node.start_byte,
      end_byte: node.end_byte,
      compound,
      parent,
      children: Vec::new(),
    });
    match parent {
      Some(parent) => self.arena.nodes[parent].children.push(statement),
      None => self.arena.roots.push(statement),
    }
    statement
  }

  /// Overlaps the range, or encloses it (which also covers an empty range).
  fn in_scope(&self, node: &RawNode) -> bool {
    let Range { start, end } = self.range;
    let overlaps = node.start < end && node.end > start;
    let encloses = node.start <= start && end <= node.end;
    overlaps || encloses
  }
}
