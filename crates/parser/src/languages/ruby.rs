use crate::rules::{LanguageRules, Rule, Shape};

/// Ruby is expression oriented: nearly any node can stand as a statement, so
/// statements are found by position. Unfielded children of a container are
/// statements, as are conditions, `case` subjects and modifier bodies. The
/// kind table then only decides which of them are compound.
pub static RULES: LanguageRules = LanguageRules {
  kinds: &[
    ("if", Rule::Compound),
    ("unless", Rule::Compound),
    ("while", Rule::Compound),
    ("until", Rule::Compound),
    ("for", Rule::Compound),
    ("case", Rule::Compound),
    ("case_match", Rule::Compound),
    ("when", Rule::Compound),
    ("in_clause", Rule::Compound),
    ("begin", Rule::Compound),
    ("class", Rule::Compound),
    ("module", Rule::Compound),
    ("method", Rule::Compound),
    ("singleton_method", Rule::Compound),
    ("singleton_class", Rule::Compound),
    ("begin_block", Rule::Compound),
    ("end_block", Rule::Compound),
    ("if_modifier", Rule::Compound),
    ("unless_modifier", Rule::Compound),
    ("while_modifier", Rule::Compound),
    ("until_modifier", Rule::Compound),
    ("rescue_modifier", Rule::Compound),
    ("call", Rule::CompoundIf(Shape::HasField("block"))),
    // Clauses: their bodies belong to the owning statement
    ("then", Rule::Skip),
    ("else", Rule::Skip),
    ("elsif", Rule::Skip),
    ("do", Rule::Skip),
    ("rescue", Rule::Skip),
    ("ensure", Rule::Skip),
    ("comment", Rule::Skip),
    ("heredoc_body", Rule::Skip),
    ("empty_statement", Rule::Skip),
    ("uninterpreted", Rule::Skip),
  ],
  fields: &[
    ("if", "condition", Rule::Statement),
    ("unless", "condition", Rule::Statement),
    ("while", "condition", Rule::Statement),
    ("until", "condition", Rule::Statement),
    ("elsif", "condition", Rule::Statement),
    ("case", "value", Rule::Statement),
    ("case_match", "value", Rule::Statement),
    ("if_modifier", "body", Rule::Statement),
    ("unless_modifier", "body", Rule::Statement),
    ("while_modifier", "body", Rule::Statement),
    ("until_modifier", "body", Rule::Statement),
    ("rescue_modifier", "body", Rule::Statement),
  ],
  containers: &[
    "program",
    "body_statement",
    "begin",
    "then",
    "else",
    "ensure",
    "do",
    "begin_block",
    "end_block",
    "block_body",
    "parenthesized_statements",
    "class",
    "module",
    "method",
    "singleton_method",
    "singleton_class",
    "do_block",
    "block",
  ],
  collapse: None,
};
