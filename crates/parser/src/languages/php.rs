use crate::rules::{Collapse, LanguageRules, Rule};

/// PHP source interleaves `<?php`/`?>` tags with inline text; both are
/// transparent, so statements on either side of a tag are siblings.
pub static RULES: LanguageRules = LanguageRules {
  kinds: &[
    // Simple statements
    ("echo_statement", Rule::Atomic),
    ("expression_statement", Rule::Atomic),
    ("return_statement", Rule::Atomic),
    ("break_statement", Rule::Atomic),
    ("continue_statement", Rule::Atomic),
    ("global_declaration", Rule::Atomic),
    ("function_static_declaration", Rule::Atomic),
    ("unset_statement", Rule::Atomic),
    ("goto_statement", Rule::Atomic),
    ("named_label_statement", Rule::Atomic),
    ("empty_statement", Rule::Atomic),
    ("namespace_use_declaration", Rule::Atomic),
    ("const_declaration", Rule::Atomic),
    ("property_declaration", Rule::Atomic),
    ("use_declaration", Rule::Atomic),
    ("enum_case", Rule::Atomic),
    // Statements with bodies
    ("compound_statement", Rule::Compound),
    ("if_statement", Rule::Compound),
    ("switch_statement", Rule::Compound),
    ("while_statement", Rule::Compound),
    ("do_statement", Rule::Compound),
    ("for_statement", Rule::Compound),
    ("foreach_statement", Rule::Compound),
    ("try_statement", Rule::Compound),
    ("declare_statement", Rule::Compound),
    // Declarations with bodies
    ("namespace_definition", Rule::Compound),
    ("function_definition", Rule::Compound),
    ("method_declaration", Rule::Compound),
    ("class_declaration", Rule::Compound),
    ("interface_declaration", Rule::Compound),
    ("trait_declaration", Rule::Compound),
    ("enum_declaration", Rule::Compound),
    // Transparent
    ("comment", Rule::Skip),
    ("php_tag", Rule::Skip),
    ("text_interpolation", Rule::Skip),
    ("text", Rule::Skip),
    ("declaration_list", Rule::Skip),
    ("enum_declaration_list", Rule::Skip),
    ("switch_block", Rule::Skip),
    ("case_statement", Rule::Skip),
    ("default_statement", Rule::Skip),
    ("else_clause", Rule::Skip),
    ("else_if_clause", Rule::Skip),
    ("catch_clause", Rule::Skip),
    ("finally_clause", Rule::Skip),
    ("colon_block", Rule::Skip),
  ],
  fields: &[],
  containers: &[],
  collapse: Some(Collapse {
    kinds: &["if_statement", "while_statement", "for_statement", "foreach_statement"],
    blocks: &["compound_statement", "colon_block"],
    keep_compound: false,
  }),
};
