use crate::rules::{Collapse, LanguageRules, Rule, Shape};

/// Bodies that make a declaration compound
pub(crate) const RECORD_BODIES: &[&str] = &["field_declaration_list", "enumerator_list"];

pub static RULES: LanguageRules = LanguageRules {
  kinds: &[
    // Declarations
    ("declaration", Rule::CompoundIf(Shape::Contains(RECORD_BODIES))),
    ("type_definition", Rule::CompoundIf(Shape::Contains(RECORD_BODIES))),
    ("function_definition", Rule::Compound),
    ("struct_specifier", Rule::Compound),
    ("union_specifier", Rule::Compound),
    ("enum_specifier", Rule::Compound),
    ("field_declaration_list", Rule::Compound),
    ("field_declaration", Rule::Atomic),
    // Simple statements
    ("expression_statement", Rule::Atomic),
    ("return_statement", Rule::Atomic),
    ("break_statement", Rule::Atomic),
    ("continue_statement", Rule::Atomic),
    ("goto_statement", Rule::Atomic),
    ("labeled_statement", Rule::Wrapper),
    // Statements with bodies
    ("compound_statement", Rule::Compound),
    ("if_statement", Rule::Compound),
    ("switch_statement", Rule::Compound),
    ("case_statement", Rule::Compound),
    ("while_statement", Rule::Compound),
    ("do_statement", Rule::Compound),
    ("for_statement", Rule::Compound),
    // Preprocessor
    ("preproc_include", Rule::Atomic),
    ("preproc_def", Rule::Atomic),
    ("preproc_function_def", Rule::Atomic),
    ("preproc_call", Rule::Atomic),
    ("preproc_if", Rule::Compound),
    ("preproc_ifdef", Rule::Compound),
    // Transparent
    ("comment", Rule::Skip),
    ("else_clause", Rule::Skip),
    ("preproc_elif", Rule::Skip),
    ("preproc_elifdef", Rule::Skip),
    ("preproc_else", Rule::Skip),
  ],
  fields: &[
    // `typedef struct { ... } name;`: the specifier is part of the declaration
    ("*", "type", Rule::Skip),
  ],
  containers: &[],
  collapse: Some(Collapse {
    kinds: &["if_statement", "for_statement", "while_statement", "do_statement"],
    blocks: &["compound_statement"],
    keep_compound: false,
  }),
};
