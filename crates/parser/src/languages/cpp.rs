use super::c::RECORD_BODIES;
use crate::rules::{Collapse, LanguageRules, Rule, Shape};

/// The C table plus classes, namespaces, templates and concepts.
pub static RULES: LanguageRules = LanguageRules {
  kinds: &[
    // Declarations
    ("declaration", Rule::CompoundIf(Shape::Contains(RECORD_BODIES))),
    ("type_definition", Rule::CompoundIf(Shape::Contains(RECORD_BODIES))),
    ("function_definition", Rule::Compound),
    ("struct_specifier", Rule::Compound),
    ("union_specifier", Rule::Compound),
    ("enum_specifier", Rule::Compound),
    ("class_specifier", Rule::Compound),
    ("field_declaration_list", Rule::Compound),
    ("field_declaration", Rule::Atomic),
    ("namespace_definition", Rule::Compound),
    ("template_declaration", Rule::Compound),
    ("concept_definition", Rule::CompoundIf(Shape::Multiline)),
    ("alias_declaration", Rule::Atomic),
    ("using_declaration", Rule::Atomic),
    ("static_assert_declaration", Rule::Atomic),
    ("namespace_alias_definition", Rule::Atomic),
    ("access_specifier", Rule::Skip),
    // Requirements inside `requires { ... }`
    ("simple_requirement", Rule::Atomic),
    ("compound_requirement", Rule::Atomic),
    ("type_requirement", Rule::Atomic),
    // Simple statements
    ("expression_statement", Rule::Atomic),
    ("return_statement", Rule::Atomic),
    ("break_statement", Rule::Atomic),
    ("continue_statement", Rule::Atomic),
    ("goto_statement", Rule::Atomic),
    ("throw_statement", Rule::Atomic),
    ("co_return_statement", Rule::Atomic),
    ("co_yield_statement", Rule::Atomic),
    ("labeled_statement", Rule::Wrapper),
    // Statements with bodies
    ("compound_statement", Rule::Compound),
    ("if_statement", Rule::Compound),
    ("switch_statement", Rule::Compound),
    ("case_statement", Rule::Compound),
    ("while_statement", Rule::Compound),
    ("do_statement", Rule::Compound),
    ("for_statement", Rule::Compound),
    ("for_range_loop", Rule::Compound),
    ("try_statement", Rule::Compound),
    // Preprocessor
    ("preproc_include", Rule::Atomic),
    ("preproc_def", Rule::Atomic),
    ("preproc_function_def", Rule::Atomic),
    ("preproc_call", Rule::Atomic),
    ("preproc_if", Rule::Compound),
    ("preproc_ifdef", Rule::Compound),
    // Transparent
    ("comment", Rule::Skip),
    ("declaration_list", Rule::Skip),
    ("requires_expression", Rule::Skip),
    ("requirement_seq", Rule::Skip),
    ("else_clause", Rule::Skip),
    ("catch_clause", Rule::Skip),
    ("preproc_elif", Rule::Skip),
    ("preproc_elifdef", Rule::Skip),
    ("preproc_else", Rule::Skip),
  ],
  fields: &[("*", "type", Rule::Skip)],
  containers: &[],
  collapse: Some(Collapse {
    kinds: &["if_statement", "for_statement", "for_range_loop", "while_statement", "do_statement"],
    blocks: &["compound_statement"],
    keep_compound: false,
  }),
};
