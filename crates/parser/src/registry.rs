//! Grammar registry: language → tree-sitter grammar + classification table.
//!
//! Everything here is static and read-only, so trees for different documents
//! can be built concurrently without coordination.

use tree_sitter::Language as TsLanguage;

use crate::{languages, rules::LanguageRules};
use stree_core::Language;

/// A grammar and the statement rules that go with it
pub struct Grammar {
  pub language: Language,
  load: fn() -> TsLanguage,
  pub rules: &'static LanguageRules,
}

impl Grammar {
  /// Instantiate the tree-sitter language
  pub fn load(&self) -> TsLanguage {
    (self.load)()
  }
}

impl std::fmt::Debug for Grammar {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Grammar").field("language", &self.language).finish_non_exhaustive()
  }
}

static TYPESCRIPT: Grammar = Grammar {
  language: Language::TypeScript,
  load: || tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
  rules: &languages::typescript::RULES,
};

static TSX: Grammar = Grammar {
  language: Language::Tsx,
  load: || tree_sitter_typescript::LANGUAGE_TSX.into(),
  rules: &languages::typescript::RULES,
};

static JAVASCRIPT: Grammar = Grammar {
  language: Language::JavaScript,
  load: || tree_sitter_javascript::LANGUAGE.into(),
  rules: &languages::typescript::RULES,
};

static JSX: Grammar = Grammar {
  language: Language::Jsx,
  load: || tree_sitter_javascript::LANGUAGE.into(),
  rules: &languages::typescript::RULES,
};

static PYTHON: Grammar = Grammar {
  language: Language::Python,
  load: || tree_sitter_python::LANGUAGE.into(),
  rules: &languages::python::RULES,
};

static GO: Grammar = Grammar {
  language: Language::Go,
  load: || tree_sitter_go::LANGUAGE.into(),
  rules: &languages::go::RULES,
};

static JAVA: Grammar = Grammar {
  language: Language::Java,
  load: || tree_sitter_java::LANGUAGE.into(),
  rules: &languages::java::RULES,
};

static C: Grammar = Grammar {
  language: Language::C,
  load: || tree_sitter_c::LANGUAGE.into(),
  rules: &languages::c::RULES,
};

static CPP: Grammar = Grammar {
  language: Language::Cpp,
  load: || tree_sitter_cpp::LANGUAGE.into(),
  rules: &languages::cpp::RULES,
};

#[cfg(feature = "tier2")]
static RUBY: Grammar = Grammar {
  language: Language::Ruby,
  load: || tree_sitter_ruby::LANGUAGE.into(),
  rules: &languages::ruby::RULES,
};

#[cfg(feature = "tier2")]
static PHP: Grammar = Grammar {
  language: Language::Php,
  load: || tree_sitter_php::LANGUAGE_PHP.into(),
  rules: &languages::php::RULES,
};

#[cfg(feature = "tier2")]
static CSHARP: Grammar = Grammar {
  language: Language::CSharp,
  load: || tree_sitter_c_sharp::LANGUAGE.into(),
  rules: &languages::csharp::RULES,
};

/// Grammar for a language, if it is compiled in
pub fn grammar_for(language: Language) -> Option<&'static Grammar> {
  match language {
    Language::TypeScript => Some(&TYPESCRIPT),
    Language::Tsx => Some(&TSX),
    Language::JavaScript => Some(&JAVASCRIPT),
    Language::Jsx => Some(&JSX),
    Language::Python => Some(&PYTHON),
    Language::Go => Some(&GO),
    Language::Java => Some(&JAVA),
    Language::C => Some(&C),
    Language::Cpp => Some(&CPP),

    // Tier 2 (feature-gated)
    #[cfg(feature = "tier2")]
    Language::Ruby => Some(&RUBY),
    #[cfg(feature = "tier2")]
    Language::Php => Some(&PHP),
    #[cfg(feature = "tier2")]
    Language::CSharp => Some(&CSHARP),

    // Not compiled
    #[allow(unreachable_patterns)]
    _ => None,
  }
}

/// Whether an editor language id has a statement grammar
pub fn is_supported(language_id: &str) -> bool {
  Language::from_language_id(language_id)
    .and_then(grammar_for)
    .is_some()
}
