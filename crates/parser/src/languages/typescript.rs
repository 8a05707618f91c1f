use crate::rules::{Collapse, LanguageRules, Rule};

pub static RULES: LanguageRules = LanguageRules {
  kinds: &[
    // Simple statements
    ("expression_statement", Rule::Atomic),
    ("variable_declaration", Rule::Atomic),
    ("lexical_declaration", Rule::Atomic),
    ("import_statement", Rule::Atomic),
    ("debugger_statement", Rule::Atomic),
    ("return_statement", Rule::Atomic),
    ("break_statement", Rule::Atomic),
    ("continue_statement", Rule::Atomic),
    ("throw_statement", Rule::Atomic),
    ("empty_statement", Rule::Atomic),
    ("type_alias_declaration", Rule::Atomic),
    ("function_signature", Rule::Atomic),
    ("abstract_method_signature", Rule::Atomic),
    // Class members (`field_definition` is the JavaScript spelling)
    ("field_definition", Rule::Atomic),
    ("public_field_definition", Rule::Atomic),
    // Statements with bodies
    ("statement_block", Rule::Compound),
    ("export_statement", Rule::Compound),
    ("if_statement", Rule::Compound),
    ("switch_statement", Rule::Compound),
    ("for_statement", Rule::Compound),
    ("for_in_statement", Rule::Compound),
    ("while_statement", Rule::Compound),
    ("do_statement", Rule::Compound),
    ("try_statement", Rule::Compound),
    ("with_statement", Rule::Compound),
    ("labeled_statement", Rule::Compound),
    // Declarations with bodies
    ("function_declaration", Rule::Compound),
    ("generator_function_declaration", Rule::Compound),
    ("class_declaration", Rule::Compound),
    ("abstract_class_declaration", Rule::Compound),
    ("method_definition", Rule::Compound),
    ("class_static_block", Rule::Compound),
    ("interface_declaration", Rule::Compound),
    ("enum_declaration", Rule::Compound),
    ("internal_module", Rule::Compound),
    ("module", Rule::Compound),
    ("ambient_declaration", Rule::Compound),
    // Transparent
    ("comment", Rule::Skip),
    ("class_body", Rule::Skip),
    ("switch_body", Rule::Skip),
    ("switch_case", Rule::Skip),
    ("switch_default", Rule::Skip),
    ("else_clause", Rule::Skip),
    ("catch_clause", Rule::Skip),
    ("finally_clause", Rule::Skip),
  ],
  fields: &[
    // `for (let i = 0; i < n; i++)`: the header is not a statement
    ("for_statement", "initializer", Rule::Opaque),
    ("for_statement", "condition", Rule::Opaque),
    ("for_statement", "increment", Rule::Opaque),
  ],
  containers: &[],
  collapse: Some(Collapse {
    kinds: &[
      "if_statement",
      "for_statement",
      "for_in_statement",
      "while_statement",
      "do_statement",
      "with_statement",
    ],
    blocks: &["statement_block"],
    keep_compound: false,
  }),
};
