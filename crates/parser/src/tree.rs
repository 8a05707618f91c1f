//! StatementTree: the public facade over parsing, reduction and lookup.

use std::{fmt, ops::Range, sync::Arc, time::Instant};

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{
  error::TreeError,
  locate,
  offsets::OffsetIndex,
  parser::SyntaxParser,
  reduce::{Reducer, StatementArena, StatementData, StatementId},
  registry::{self, Grammar},
};
use stree_core::{Config, Language, ParserConfig};

static EMPTY: StatementArena = StatementArena::EMPTY;

/// Statements of one document restricted to an offset range.
///
/// Created unbuilt; [`build`](Self::build) parses and reduces once. Dropping or
/// [disposing](Self::dispose) the tree releases the parser and cancels any
/// build still in flight.
pub struct StatementTree {
  language: Language,
  grammar: &'static Grammar,
  text: Arc<str>,
  range: Range<usize>,
  config: ParserConfig,
  parser: Option<SyntaxParser>,
  built: Option<StatementArena>,
  cancel: CancellationToken,
}

impl StatementTree {
  /// Whether an editor language id has a statement grammar.
  pub fn is_supported(language_id: &str) -> bool {
    registry::is_supported(language_id)
  }

  /// Create an unbuilt tree over `[start, end)` with the default config.
  pub fn create(language_id: &str, text: impl Into<Arc<str>>, start: usize, end: usize) -> Result<Self, TreeError> {
    Self::create_with_config(language_id, text, start, end, &Config::default())
  }

  pub fn create_with_config(
    language_id: &str,
    text: impl Into<Arc<str>>,
    start: usize,
    end: usize,
    config: &Config,
  ) -> Result<Self, TreeError> {
    let Some(grammar) = Language::from_language_id(language_id).and_then(registry::grammar_for) else {
      return Err(TreeError::unsupported(language_id));
    };

    let text = text.into();
    let len = config.parser.offset_encoding.measure(&text);
    if start > end || end > len {
      return Err(TreeError::InvalidRange { start, end, len });
    }

    debug!(language = %grammar.language, start, end, len, "created statement tree");

    Ok(Self {
      language: grammar.language,
      grammar,
      text,
      range: start..end,
      config: config.parser.clone(),
      parser: Some(SyntaxParser::new(grammar.language)),
      built: None,
      cancel: CancellationToken::new(),
    })
  }

  pub fn language(&self) -> Language {
    self.language
  }

  pub fn range(&self) -> Range<usize> {
    self.range.clone()
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn is_built(&self) -> bool {
    self.built.is_some() && !self.is_disposed()
  }

  pub fn is_disposed(&self) -> bool {
    self.cancel.is_cancelled()
  }

  /// Parse and reduce. Idempotent: once built, further calls return immediately.
  ///
  /// With `parse_on_worker` the work runs on tokio's blocking pool. Disposing
  /// through a [`DisposeHandle`] while this is pending makes it return
  /// [`TreeError::Disposed`] and leaves the tree empty.
  pub async fn build(&mut self) -> Result<(), TreeError> {
    if self.built.is_some() {
      return Ok(());
    }
    let parser = self.take_parser()?;
    let job = self.job();
    let started = Instant::now();

    let arena = if self.config.parse_on_worker {
      let cancel = self.cancel.clone();
      let task = tokio::task::spawn_blocking(move || job.run(parser));
      tokio::select! {
        biased;
        _ = cancel.cancelled() => {
          warn!(language = %self.language, "statement tree disposed during build");
          return Err(TreeError::Disposed);
        }
        joined = task => joined.map_err(|e| TreeError::parser_fatal(self.language, format!("parse task failed: {e}")))??,
      }
    } else {
      job.run(parser)?
    };

    self.install(arena, started)
  }

  /// [`build`](Self::build) on the calling thread, for callers outside an async runtime.
  pub fn build_blocking(&mut self) -> Result<(), TreeError> {
    if self.built.is_some() {
      return Ok(());
    }
    let parser = self.take_parser()?;
    let started = Instant::now();
    let arena = self.job().run(parser)?;
    self.install(arena, started)
  }

  /// Release the parser and any built statements. Later builds fail with
  /// [`TreeError::Disposed`].
  pub fn dispose(&mut self) {
    self.cancel.cancel();
    self.parser = None;
    self.built = None;
  }

  /// Handle that disposes this tree from elsewhere, e.g. while `build()` is pending.
  pub fn dispose_handle(&self) -> DisposeHandle {
    DisposeHandle {
      token: self.cancel.clone(),
    }
  }

  /// Top-level statements in source order. Empty until built.
  pub fn statements(&self) -> impl ExactSizeIterator<Item = StatementNode<'_>> + '_ {
    let arena = self.arena();
    arena.roots.iter().map(move |&id| self.node(arena, id))
  }

  /// Innermost statement containing `offset` (half-open spans).
  pub fn statement_at(&self, offset: usize) -> Option<StatementNode<'_>> {
    let arena = self.arena();
    locate::statement_at(arena, offset).map(|id| self.node(arena, id))
  }

  /// Debug rendering of the whole forest, one statement per line.
  pub fn dump(&self) -> String {
    fn walk(node: StatementNode<'_>, depth: usize, out: &mut String) {
      out.push_str(&"  ".repeat(depth));
      out.push_str(&node.describe());
      out.push('\n');
      for child in node.children() {
        walk(child, depth + 1, out);
      }
    }

    let mut out = String::new();
    for (i, statement) in self.statements().enumerate() {
      out.push_str(&format!("[{i}] "));
      walk(statement, 0, &mut out);
    }
    out
  }

  fn arena(&self) -> &StatementArena {
    match &self.built {
      Some(arena) if !self.is_disposed() => arena,
      _ => &EMPTY,
    }
  }

  fn node<'a>(&'a self, arena: &'a StatementArena, id: StatementId) -> StatementNode<'a> {
    StatementNode {
      arena,
      text: &self.text,
      id,
    }
  }

  fn take_parser(&mut self) -> Result<SyntaxParser, TreeError> {
    if self.is_disposed() {
      return Err(TreeError::Disposed);
    }
    // A failed build already released its parser; a retry gets a fresh one.
    Ok(self.parser.take().unwrap_or_else(|| SyntaxParser::new(self.language)))
  }

  fn job(&self) -> BuildJob {
    BuildJob {
      grammar: self.grammar,
      text: Arc::clone(&self.text),
      range: self.range.clone(),
      config: self.config.clone(),
      cancel: self.cancel.clone(),
    }
  }

  fn install(&mut self, arena: StatementArena, started: Instant) -> Result<(), TreeError> {
    if self.is_disposed() {
      warn!(language = %self.language, "discarding statements built after disposal");
      return Err(TreeError::Disposed);
    }
    debug!(
      language = %self.language,
      start = self.range.start,
      end = self.range.end,
      statements = arena.nodes.len(),
      roots = arena.roots.len(),
      elapsed_us = started.elapsed().as_micros() as u64,
      "built statement tree"
    );
    self.built = Some(arena);
    Ok(())
  }
}

impl Drop for StatementTree {
  fn drop(&mut self) {
    self.cancel.cancel();
  }
}

impl fmt::Debug for StatementTree {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StatementTree")
      .field("language", &self.language)
      .field("range", &self.range)
      .field("built", &self.is_built())
      .field("disposed", &self.is_disposed())
      .finish()
  }
}

/// Everything a build needs, owned so it can move to a worker thread.
struct BuildJob {
  grammar: &'static Grammar,
  text: Arc<str>,
  range: Range<usize>,
  config: ParserConfig,
  cancel: CancellationToken,
}

impl BuildJob {
  fn run(self, mut parser: SyntaxParser) -> Result<StatementArena, TreeError> {
    if self.cancel.is_cancelled() {
      return Err(TreeError::Disposed);
    }

    let index = OffsetIndex::new(&self.text, self.config.offset_encoding);
    let raw = parser.parse(self.grammar, &self.text, &index);
    drop(parser);
    let raw = raw?;

    if self.cancel.is_cancelled() {
      return Err(TreeError::Disposed);
    }

    Reducer::new(&raw, self.grammar.rules, self.range, &self.cancel)
      .check_interval(self.config.cancel_check_interval)
      .reduce()
  }
}

/// Disposes a [`StatementTree`] from another task.
#[derive(Debug, Clone)]
pub struct DisposeHandle {
  token: CancellationToken,
}

impl DisposeHandle {
  pub fn dispose(&self) {
    self.token.cancel();
  }

  pub fn is_disposed(&self) -> bool {
    self.token.is_cancelled()
  }
}

/// A statement in a built tree. Cheap to copy; borrows the tree.
#[derive(Clone, Copy)]
pub struct StatementNode<'a> {
  arena: &'a StatementArena,
  text: &'a str,
  id: StatementId,
}

impl<'a> StatementNode<'a> {
  fn data(&self) -> &'a StatementData {
    self.arena.get(self.id)
  }

  pub fn start_offset(&self) -> usize {
    self.data().start
  }

  pub fn end_offset(&self) -> usize {
    self.data().end
  }

  /// Grammar node kind, e.g. `if_statement`
  pub fn kind(&self) -> &'static str {
    self.data().kind
  }

  /// Whether this statement's body may hold further statements.
  pub fn is_compound_statement_type(&self) -> bool {
    self.data().compound
  }

  pub fn parent(&self) -> Option<StatementNode<'a>> {
    self.data().parent.map(|id| StatementNode { id, ..*self })
  }

  pub fn children(&self) -> impl ExactSizeIterator<Item = StatementNode<'a>> + 'a {
    let node = *self;
    self.data().children.iter().map(move |&id| StatementNode { id, ..node })
  }

  /// Enclosing statements, innermost first.
  pub fn ancestors(&self) -> impl Iterator<Item = StatementNode<'a>> + 'a {
    std::iter::successors(self.parent(), |node| node.parent())
  }

  /// Source text of the statement.
  pub fn text(&self) -> &'a str {
    let data = self.data();
    &self.text[data.start_byte..data.end_byte]
  }

  /// Render the chain from the top-level statement down to this one.
  ///
  /// The first line starts with `prefix`, deeper lines with `pad` plus two
  /// spaces per level.
  pub fn dump_path(&self, prefix: &str, pad: &str) -> String {
    let mut chain: Vec<StatementNode<'a>> = self.ancestors().collect();
    chain.reverse();
    chain.push(*self);

    let mut out = String::new();
    for (depth, node) in chain.iter().enumerate() {
      if depth == 0 {
        out.push_str(prefix);
      } else {
        out.push('\n');
        out.push_str(pad);
        out.push_str(&"  ".repeat(depth));
      }
      out.push_str(&node.describe());
    }
    out
  }

  fn describe(&self) -> String {
    let data = self.data();
    let class = if data.compound { "compound" } else { "atomic" };
    format!("{} [{}, {}) {}", data.kind, data.start, data.end, class)
  }
}

impl PartialEq for StatementNode<'_> {
  fn eq(&self, other: &Self) -> bool {
    std::ptr::eq(self.arena, other.arena) && self.id == other.id
  }
}

impl Eq for StatementNode<'_> {}

impl fmt::Debug for StatementNode<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.describe())
  }
}
