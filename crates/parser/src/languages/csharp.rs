use crate::rules::{Collapse, LanguageRules, Rule};

pub static RULES: LanguageRules = LanguageRules {
  kinds: &[
    // Compilation unit
    ("extern_alias_directive", Rule::Atomic),
    ("using_directive", Rule::Atomic),
    ("global_attribute", Rule::Atomic),
    ("global_attribute_list", Rule::Atomic),
    ("namespace_declaration", Rule::Compound),
    ("file_scoped_namespace_declaration", Rule::Compound),
    ("preproc_if", Rule::Compound),
    // Types
    ("class_declaration", Rule::Compound),
    ("struct_declaration", Rule::Compound),
    ("record_declaration", Rule::Compound),
    ("record_struct_declaration", Rule::Compound),
    ("interface_declaration", Rule::Compound),
    ("enum_declaration", Rule::Compound),
    ("delegate_declaration", Rule::Atomic),
    // Members
    ("field_declaration", Rule::Atomic),
    ("event_field_declaration", Rule::Atomic),
    ("property_declaration", Rule::Compound),
    ("event_declaration", Rule::Compound),
    ("indexer_declaration", Rule::Compound),
    ("accessor_declaration", Rule::Compound),
    ("method_declaration", Rule::Compound),
    ("constructor_declaration", Rule::Compound),
    ("destructor_declaration", Rule::Compound),
    ("operator_declaration", Rule::Compound),
    ("conversion_operator_declaration", Rule::Compound),
    // Simple statements
    ("expression_statement", Rule::Atomic),
    ("local_declaration_statement", Rule::Atomic),
    ("break_statement", Rule::Atomic),
    ("continue_statement", Rule::Atomic),
    ("return_statement", Rule::Atomic),
    ("yield_statement", Rule::Atomic),
    ("throw_statement", Rule::Atomic),
    ("goto_statement", Rule::Atomic),
    ("empty_statement", Rule::Atomic),
    // Statements with bodies
    ("block", Rule::Compound),
    ("checked_statement", Rule::Compound),
    ("unsafe_statement", Rule::Compound),
    ("fixed_statement", Rule::Compound),
    ("lock_statement", Rule::Compound),
    ("using_statement", Rule::Compound),
    ("if_statement", Rule::Compound),
    ("switch_statement", Rule::Compound),
    ("for_statement", Rule::Compound),
    ("foreach_statement", Rule::Compound),
    ("while_statement", Rule::Compound),
    ("do_statement", Rule::Compound),
    ("try_statement", Rule::Compound),
    ("labeled_statement", Rule::Compound),
    ("local_function_statement", Rule::Compound),
    // Transparent
    ("comment", Rule::Skip),
    ("global_statement", Rule::Skip),
    ("declaration_list", Rule::Skip),
    ("enum_member_declaration_list", Rule::Skip),
    ("accessor_list", Rule::Skip),
    ("switch_body", Rule::Skip),
    ("switch_section", Rule::Skip),
    ("catch_clause", Rule::Skip),
    ("finally_clause", Rule::Skip),
    ("preproc_elif", Rule::Skip),
    ("preproc_else", Rule::Skip),
  ],
  fields: &[],
  containers: &[],
  collapse: Some(Collapse {
    kinds: &[
      "if_statement",
      "for_statement",
      "foreach_statement",
      "while_statement",
      "do_statement",
      "lock_statement",
      "using_statement",
      "fixed_statement",
    ],
    blocks: &["block"],
    keep_compound: false,
  }),
};
