use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages with a statement grammar.
///
/// JavaScript and JSX share the JavaScript grammar (which parses JSX natively),
/// TypeScript and TSX use the two dialects of the TypeScript grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  TypeScript,
  JavaScript,
  Tsx,
  Jsx,
  Python,
  Go,
  Java,
  CSharp,
  Cpp,
  C,
  Ruby,
  Php,
}

impl Language {
  /// Every language in declaration order.
  pub const ALL: [Language; 12] = [
    Language::TypeScript,
    Language::JavaScript,
    Language::Tsx,
    Language::Jsx,
    Language::Python,
    Language::Go,
    Language::Java,
    Language::CSharp,
    Language::Cpp,
    Language::C,
    Language::Ruby,
    Language::Php,
  ];

  /// Resolve an editor language identifier (`typescriptreact`, `csharp`, ...).
  ///
  /// Identifiers are matched exactly, the way editors report them.
  pub fn from_language_id(id: &str) -> Option<Self> {
    match id {
      "typescript" => Some(Language::TypeScript),
      "typescriptreact" => Some(Language::Tsx),
      "javascript" => Some(Language::JavaScript),
      "javascriptreact" | "jsx" => Some(Language::Jsx),
      "python" => Some(Language::Python),
      "go" => Some(Language::Go),
      "java" => Some(Language::Java),
      "csharp" => Some(Language::CSharp),
      "cpp" => Some(Language::Cpp),
      "c" => Some(Language::C),
      "ruby" => Some(Language::Ruby),
      "php" => Some(Language::Php),
      _ => None,
    }
  }

  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext.to_lowercase().as_str() {
      "ts" | "mts" | "cts" => Some(Language::TypeScript),
      "js" | "mjs" | "cjs" => Some(Language::JavaScript),
      "tsx" => Some(Language::Tsx),
      "jsx" => Some(Language::Jsx),
      "py" | "pyi" => Some(Language::Python),
      "go" => Some(Language::Go),
      "java" => Some(Language::Java),
      "cs" => Some(Language::CSharp),
      "cpp" | "cc" | "cxx" | "hpp" | "hxx" | "hh" => Some(Language::Cpp),
      "c" | "h" => Some(Language::C),
      "rb" | "rake" | "gemspec" => Some(Language::Ruby),
      "php" => Some(Language::Php),
      _ => None,
    }
  }

  /// The canonical editor language id.
  pub fn as_str(&self) -> &'static str {
    match self {
      Language::TypeScript => "typescript",
      Language::JavaScript => "javascript",
      Language::Tsx => "typescriptreact",
      Language::Jsx => "javascriptreact",
      Language::Python => "python",
      Language::Go => "go",
      Language::Java => "java",
      Language::CSharp => "csharp",
      Language::Cpp => "cpp",
      Language::C => "c",
      Language::Ruby => "ruby",
      Language::Php => "php",
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
