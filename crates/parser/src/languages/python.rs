use crate::rules::{Collapse, LanguageRules, Rule};

/// `block` is a statement of its own, so an indented body nests one level
/// deeper than its owning `if`/`def`/`class`. A body written on the header line
/// (`if x: y = 1`) collapses into the owner, which stays compound.
///
/// `type X = ...` aliases are deliberately absent and produce no statement.
pub static RULES: LanguageRules = LanguageRules {
  kinds: &[
    ("expression_statement", Rule::Atomic),
    ("import_statement", Rule::Atomic),
    ("import_from_statement", Rule::Atomic),
    ("future_import_statement", Rule::Atomic),
    ("print_statement", Rule::Atomic),
    ("assert_statement", Rule::Atomic),
    ("delete_statement", Rule::Atomic),
    ("raise_statement", Rule::Atomic),
    ("pass_statement", Rule::Atomic),
    ("break_statement", Rule::Atomic),
    ("continue_statement", Rule::Atomic),
    ("global_statement", Rule::Atomic),
    ("nonlocal_statement", Rule::Atomic),
    ("exec_statement", Rule::Atomic),
    ("return_statement", Rule::Atomic),
    ("block", Rule::Compound),
    ("if_statement", Rule::Compound),
    ("for_statement", Rule::Compound),
    ("while_statement", Rule::Compound),
    ("try_statement", Rule::Compound),
    ("with_statement", Rule::Compound),
    ("function_definition", Rule::Compound),
    ("class_definition", Rule::Compound),
    ("decorated_definition", Rule::Compound),
    ("match_statement", Rule::Compound),
    ("comment", Rule::Skip),
    ("elif_clause", Rule::Skip),
    ("else_clause", Rule::Skip),
    ("except_clause", Rule::Skip),
    ("except_group_clause", Rule::Skip),
    ("finally_clause", Rule::Skip),
    ("case_clause", Rule::Skip),
  ],
  fields: &[],
  containers: &[],
  collapse: Some(Collapse {
    kinds: &["if_statement", "for_statement", "while_statement", "with_statement"],
    blocks: &[],
    keep_compound: true,
  }),
};
