use crate::rules::{LanguageRules, Rule};

pub static RULES: LanguageRules = LanguageRules {
  kinds: &[
    // Top level
    ("package_clause", Rule::Atomic),
    ("import_declaration", Rule::Atomic),
    ("const_declaration", Rule::Atomic),
    ("var_declaration", Rule::Atomic),
    ("type_declaration", Rule::Atomic),
    ("function_declaration", Rule::Compound),
    ("method_declaration", Rule::Compound),
    // Simple statements
    ("expression_statement", Rule::Atomic),
    ("send_statement", Rule::Atomic),
    ("inc_statement", Rule::Atomic),
    ("dec_statement", Rule::Atomic),
    ("assignment_statement", Rule::Atomic),
    ("short_var_declaration", Rule::Atomic),
    ("return_statement", Rule::Atomic),
    ("go_statement", Rule::Atomic),
    ("defer_statement", Rule::Atomic),
    ("break_statement", Rule::Atomic),
    ("continue_statement", Rule::Atomic),
    ("goto_statement", Rule::Atomic),
    ("fallthrough_statement", Rule::Atomic),
    ("empty_statement", Rule::Atomic),
    // Statements with bodies
    ("block", Rule::Compound),
    ("if_statement", Rule::Compound),
    ("for_statement", Rule::Compound),
    ("expression_switch_statement", Rule::Compound),
    ("type_switch_statement", Rule::Compound),
    ("select_statement", Rule::Compound),
    ("labeled_statement", Rule::Compound),
    // Loop headers
    ("for_clause", Rule::Opaque),
    ("range_clause", Rule::Opaque),
    // Transparent
    ("comment", Rule::Skip),
    ("expression_case", Rule::Skip),
    ("type_case", Rule::Skip),
    ("default_case", Rule::Skip),
    ("communication_case", Rule::Skip),
  ],
  fields: &[
    ("if_statement", "initializer", Rule::Opaque),
    ("expression_switch_statement", "initializer", Rule::Opaque),
    ("type_switch_statement", "initializer", Rule::Opaque),
    ("communication_case", "communication", Rule::Opaque),
  ],
  containers: &[],
  collapse: None,
};
