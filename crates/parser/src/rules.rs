//! Statement classification tables.
//!
//! Each grammar contributes one [`LanguageRules`] value. Classification looks at
//! a node's position (parent kind and field) first, then its kind, then whether
//! its parent is a statement container. Anything left over is transparent.

use tracing::trace;

use crate::parser::{RawId, RawTree};

/// How a syntax node takes part in the statement tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
  /// Not a statement; children are considered in its place
  Skip,
  /// Not a statement and never descended into
  Opaque,
  /// Statement leaf
  Atomic,
  /// Statement whose body may hold further statements
  Compound,
  /// Compound when the shape check holds, atomic otherwise
  CompoundIf(Shape),
  /// Non-compound statement that still carries the statement it wraps (labels)
  Wrapper,
  /// Positional rules only: the occupant is a statement, compound or atomic by its kind
  Statement,
}

/// Structural checks used by [`Rule::CompoundIf`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
  /// A direct child sits in the named field
  HasField(&'static str),
  /// Some descendant has one of these kinds
  Contains(&'static [&'static str]),
  /// The node spans more than one line
  Multiline,
}

/// Single-line collapse: `if (x) y = 1;` is one statement, not two.
#[derive(Debug, Clone, Copy)]
pub struct Collapse {
  /// Kinds eligible for collapsing
  pub kinds: &'static [&'static str],
  /// Body kinds that keep the construct nested even on one line
  pub blocks: &'static [&'static str],
  /// Compound flag reported for a collapsed statement
  pub keep_compound: bool,
}

/// Classification table for one grammar
#[derive(Debug)]
pub struct LanguageRules {
  /// Rules by node kind
  pub kinds: &'static [(&'static str, Rule)],
  /// Rules by `(parent kind, field)`; a parent of `"*"` matches any parent
  pub fields: &'static [(&'static str, &'static str, Rule)],
  /// Parents whose named children without a field are statements
  pub containers: &'static [&'static str],
  pub collapse: Option<Collapse>,
}

/// Outcome of classifying one raw node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
  Skip,
  Opaque,
  Statement {
    /// Reported as `is_compound_statement_type`
    compound: bool,
    /// Whether nested statements are attached as children
    descend: bool,
  },
}

impl LanguageRules {
  pub fn kind_rule(&self, kind: &str) -> Option<Rule> {
    self.kinds.iter().find(|(k, _)| *k == kind).map(|(_, rule)| *rule)
  }

  pub fn field_rule(&self, parent: &str, field: &str) -> Option<Rule> {
    self
      .fields
      .iter()
      .find(|(p, f, _)| (*p == parent || *p == "*") && *f == field)
      .map(|(_, _, rule)| *rule)
  }

  /// Resolve the rule that applies to a node in its position.
  pub(crate) fn rule_for(&self, tree: &RawTree, id: RawId) -> Rule {
    let node = tree.node(id);
    let parent = node.parent.map(|p| tree.node(p).kind);

    if let (Some(parent), Some(field)) = (parent, node.field)
      && let Some(rule) = self.field_rule(parent, field)
    {
      return match rule {
        Rule::Statement => match self.kind_rule(node.kind) {
          Some(rule @ (Rule::Atomic | Rule::Compound | Rule::CompoundIf(_) | Rule::Wrapper)) => rule,
          _ => Rule::Atomic,
        },
        rule => rule,
      };
    }

    if let Some(rule) = self.kind_rule(node.kind) {
      return rule;
    }

    if node.field.is_none()
      && let Some(parent) = parent
      && self.containers.contains(&parent)
    {
      return Rule::Atomic;
    }

    Rule::Skip
  }

  /// Classify a node for the reducer.
  pub(crate) fn classify(&self, tree: &RawTree, id: RawId) -> Classification {
    let (compound, descend) = match self.rule_for(tree, id) {
      Rule::Skip => return Classification::Skip,
      Rule::Opaque => return Classification::Opaque,
      Rule::Atomic | Rule::Statement => (false, false),
      Rule::Wrapper => (false, true),
      Rule::Compound => (true, true),
      Rule::CompoundIf(shape) => {
        let holds = self.shape_holds(tree, id, shape);
        (holds, holds)
      }
    };

    if descend && self.collapses(tree, id) {
      let node = tree.node(id);
      trace!(kind = node.kind, start = node.start, end = node.end, "collapsed single-line statement");
      return Classification::Statement {
        compound: self.collapse.is_some_and(|c| c.keep_compound),
        descend: false,
      };
    }

    Classification::Statement { compound, descend }
  }

  fn shape_holds(&self, tree: &RawTree, id: RawId, shape: Shape) -> bool {
    let node = tree.node(id);
    match shape {
      Shape::HasField(field) => node.children.iter().any(|&c| tree.node(c).field == Some(field)),
      Shape::Contains(kinds) => tree.descendants(id).any(|d| kinds.contains(&tree.node(d).kind)),
      Shape::Multiline => node.start_row != node.end_row,
    }
  }

  fn collapses(&self, tree: &RawTree, id: RawId) -> bool {
    let Some(collapse) = &self.collapse else {
      return false;
    };
    let node = tree.node(id);
    collapse.kinds.contains(&node.kind)
      && node.start_row == node.end_row
      && !self.has_block_body(tree, id, collapse.blocks)
  }

  /// Looks for a block among the children, seeing through transparent nodes.
  fn has_block_body(&self, tree: &RawTree, id: RawId, blocks: &[&str]) -> bool {
    let mut pending = vec![id];
    while let Some(next) = pending.pop() {
      for &child in &tree.node(next).children {
        if blocks.contains(&tree.node(child).kind) {
          return true;
        }
        if self.rule_for(tree, child) == Rule::Skip {
          pending.push(child);
        }
      }
    }
    false
  }
}
