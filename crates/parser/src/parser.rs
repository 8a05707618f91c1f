//! Syntax parser adapter: tree-sitter in, owned raw tree out.

use tree_sitter::{Parser, Tree};

use crate::{error::TreeError, offsets::OffsetIndex, registry::Grammar};
use stree_core::Language;

/// Index of a node in a [`RawTree`]
pub type RawId = usize;

/// One named syntax node, with offsets already converted to public units.
#[derive(Debug, Clone)]
pub struct RawNode {
  pub kind: &'static str,
  /// Field name in the parent, if the grammar assigns one
  pub field: Option<&'static str>,
  pub start: usize,
  pub end: usize,
  pub start_byte: usize,
  pub end_byte: usize,
  pub start_row: usize,
  pub end_row: usize,
  pub parent: Option<RawId>,
  pub children: Vec<RawId>,
}

/// Owned concrete syntax tree restricted to named nodes.
///
/// Anonymous tokens (punctuation, keywords) are dropped; a named node below an
/// anonymous one is attached to the nearest named ancestor. Node 0 is the root.
#[derive(Debug, Clone, Default)]
pub struct RawTree {
  nodes: Vec<RawNode>,
}

impl RawTree {
  pub(crate) fn from_nodes(nodes: Vec<RawNode>) -> Self {
    Self { nodes }
  }

  /// Copy a tree-sitter tree, converting byte offsets through `index`.
  pub fn from_syntax(tree: &Tree, index: &OffsetIndex) -> Self {
    let mut nodes: Vec<RawNode> = Vec::new();
    let mut cursor = tree.walk();
    // Nearest named ancestor for each depth below the cursor
    let mut ancestors: Vec<Option<RawId>> = Vec::new();

    loop {
      let node = cursor.node();
      let parent = ancestors.last().copied().flatten();

      let id = if node.is_named() {
        let id = nodes.len();
        nodes.push(RawNode {
          kind: node.kind(),
          field: cursor.field_name(),
          start: index.to_units(node.start_byte()),
          end: index.to_units(node.end_byte()),
          start_byte: node.start_byte(),
          end_byte: node.end_byte(),
          start_row: node.start_position().row,
          end_row: node.end_position().row,
          parent,
          children: Vec::new(),
        });
        if let Some(parent) = parent {
          nodes[parent].children.push(id);
        }
        Some(id)
      } else {
        None
      };

      if cursor.goto_first_child() {
        ancestors.push(id.or(parent));
        continue;
      }

      loop {
        if cursor.goto_next_sibling() {
          break;
        }
        if !cursor.goto_parent() {
          return Self { nodes };
        }
        ancestors.pop();
      }
    }
  }

  pub fn root(&self) -> Option<RawId> {
    if self.nodes.is_empty() { None } else { Some(0) }
  }

  pub fn node(&self, id: RawId) -> &RawNode {
    &self.nodes[id]
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// All nodes below `id`, depth first.
  pub fn descendants(&self, id: RawId) -> impl Iterator<Item = RawId> + '_ {
    let mut stack: Vec<RawId> = self.nodes[id].children.iter().rev().copied().collect();
    std::iter::from_fn(move || {
      let next = stack.pop()?;
      stack.extend(self.nodes[next].children.iter().rev().copied());
      Some(next)
    })
  }
}

/// Parser resource for one language.
///
/// Allocated when a statement tree is created; the grammar itself is only
/// bound on the first parse, so grammar load failures surface from `build()`.
pub struct SyntaxParser {
  language: Language,
  parser: Parser,
}

impl SyntaxParser {
  pub fn new(language: Language) -> Self {
    Self {
      language,
      parser: Parser::new(),
    }
  }

  pub fn language(&self) -> Language {
    self.language
  }

  /// Parse the whole document. Syntax errors are not failures: the grammar's
  /// error recovery yields ERROR and MISSING nodes instead.
  pub fn parse(&mut self, grammar: &Grammar, text: &str, index: &OffsetIndex) -> Result<RawTree, TreeError> {
    let language = self.language();
    self
      .parser
      .set_language(&grammar.load())
      .map_err(|e| TreeError::parser_fatal(language, e.to_string()))?;

    let tree = self
      .parser
      .parse(text, None)
      .ok_or_else(|| TreeError::parser_fatal(language, "parser returned no tree"))?;

    Ok(RawTree::from_syntax(&tree, index))
  }
}

impl std::fmt::Debug for SyntaxParser {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SyntaxParser").field("language", &self.language).finish()
  }
}
