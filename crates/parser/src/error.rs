//! Error type for building statement trees.

use stree_core::Language;

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
  /// The language id has no statement grammar compiled in.
  #[error("Unsupported language: {0}")]
  UnsupportedLanguage(String),
  /// The requested range does not fit the document.
  #[error("Invalid range {start}..{end} for a document of length {len}")]
  InvalidRange { start: usize, end: usize, len: usize },
  /// The grammar could not be loaded or the parser gave up entirely.
  #[error("Parser failure for {language}: {reason}")]
  ParserFatal { language: Language, reason: String },
  /// The tree was disposed before or while it was being built.
  #[error("Statement tree was disposed")]
  Disposed,
}

impl TreeError {
  pub fn unsupported(language_id: impl Into<String>) -> Self {
    Self::UnsupportedLanguage(language_id.into())
  }

  pub fn parser_fatal(language: Language, reason: impl Into<String>) -> Self {
    Self::ParserFatal {
      language,
      reason: reason.into(),
    }
  }

  /// Failures after which a caller should fall back to treating the range as one unit.
  pub fn is_degradable(&self) -> bool {
    matches!(self, Self::UnsupportedLanguage(_) | Self::ParserFatal { .. })
  }
}
