use crate::rules::{Collapse, LanguageRules, Rule};

pub static RULES: LanguageRules = LanguageRules {
  kinds: &[
    // Declarations
    ("package_declaration", Rule::Atomic),
    ("import_declaration", Rule::Atomic),
    ("module_declaration", Rule::Compound),
    ("class_declaration", Rule::Compound),
    ("interface_declaration", Rule::Compound),
    ("enum_declaration", Rule::Compound),
    ("record_declaration", Rule::Compound),
    ("annotation_type_declaration", Rule::Compound),
    ("method_declaration", Rule::Compound),
    ("constructor_declaration", Rule::Compound),
    ("compact_constructor_declaration", Rule::Compound),
    ("static_initializer", Rule::Compound),
    ("field_declaration", Rule::Atomic),
    ("constant_declaration", Rule::Atomic),
    ("annotation_type_element_declaration", Rule::Atomic),
    // Simple statements
    ("local_variable_declaration", Rule::Atomic),
    ("expression_statement", Rule::Atomic),
    ("explicit_constructor_invocation", Rule::Atomic),
    ("assert_statement", Rule::Atomic),
    ("break_statement", Rule::Atomic),
    ("continue_statement", Rule::Atomic),
    ("return_statement", Rule::Atomic),
    ("throw_statement", Rule::Atomic),
    ("yield_statement", Rule::Atomic),
    // Statements with bodies
    ("block", Rule::Compound),
    ("if_statement", Rule::Compound),
    ("for_statement", Rule::Compound),
    ("enhanced_for_statement", Rule::Compound),
    ("while_statement", Rule::Compound),
    ("do_statement", Rule::Compound),
    ("try_statement", Rule::Compound),
    ("try_with_resources_statement", Rule::Compound),
    ("switch_expression", Rule::Compound),
    ("synchronized_statement", Rule::Compound),
    ("labeled_statement", Rule::Compound),
    // Transparent
    ("line_comment", Rule::Skip),
    ("block_comment", Rule::Skip),
    ("class_body", Rule::Skip),
    ("interface_body", Rule::Skip),
    ("enum_body", Rule::Skip),
    ("enum_body_declarations", Rule::Skip),
    ("annotation_type_body", Rule::Skip),
    ("constructor_body", Rule::Skip),
    ("switch_block", Rule::Skip),
    ("switch_block_statement_group", Rule::Skip),
    ("switch_rule", Rule::Skip),
    ("catch_clause", Rule::Skip),
    ("finally_clause", Rule::Skip),
    ("resource_specification", Rule::Opaque),
  ],
  fields: &[("for_statement", "init", Rule::Opaque)],
  containers: &[],
  collapse: Some(Collapse {
    kinds: &[
      "if_statement",
      "for_statement",
      "enhanced_for_statement",
      "while_statement",
      "do_statement",
    ],
    blocks: &["block"],
    keep_compound: false,
  }),
};
