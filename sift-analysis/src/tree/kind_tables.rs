//! Per-language node-kind vocabularies.
//!
//! Grammar kind strings are stable per language; these tables give generic
//! walking code (loop/conditional/call detectors, scope and import
//! builders) one lookup point per concept so no rule branches on the
//! source grammar directly.

use crate::scanner::Language;

/// Loop constructs.
pub fn loop_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &["for_statement", "while_statement"],
        Language::TypeScript | Language::JavaScript => &[
            "for_statement",
            "for_in_statement",
            "while_statement",
            "do_statement",
        ],
        Language::Rust => &["for_expression", "while_expression", "loop_expression"],
        Language::Go => &["for_statement"],
        Language::Java => &[
            "for_statement",
            "enhanced_for_statement",
            "while_statement",
            "do_statement",
        ],
    }
}

/// Function-like constructs (declarations, lambdas, closures).
pub fn function_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &["function_definition", "lambda"],
        Language::TypeScript | Language::JavaScript => &[
            "function_declaration",
            "function_expression",
            "generator_function_declaration",
            "arrow_function",
            "method_definition",
        ],
        Language::Rust => &["function_item", "closure_expression"],
        Language::Go => &["function_declaration", "method_declaration", "func_literal"],
        Language::Java => &[
            "method_declaration",
            "constructor_declaration",
            "lambda_expression",
        ],
    }
}

/// Call expressions.
pub fn call_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &["call"],
        Language::TypeScript | Language::JavaScript => &["call_expression", "new_expression"],
        Language::Rust => &["call_expression", "macro_invocation"],
        Language::Go => &["call_expression"],
        Language::Java => &["method_invocation", "object_creation_expression"],
    }
}

/// Conditional constructs.
pub fn conditional_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &["if_statement", "conditional_expression"],
        Language::TypeScript | Language::JavaScript => &["if_statement", "ternary_expression"],
        Language::Rust => &["if_expression", "match_expression"],
        Language::Go => &[
            "if_statement",
            "expression_switch_statement",
            "type_switch_statement",
        ],
        Language::Java => &["if_statement", "switch_expression", "ternary_expression"],
    }
}

/// Catch/except handler clauses. Empty for languages without them.
pub fn catch_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &["except_clause"],
        Language::TypeScript | Language::JavaScript => &["catch_clause"],
        Language::Rust | Language::Go => &[],
        Language::Java => &["catch_clause"],
    }
}

/// Import/require statements at module level.
pub fn import_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &["import_statement", "import_from_statement"],
        Language::TypeScript | Language::JavaScript => &["import_statement"],
        Language::Rust => &["use_declaration"],
        Language::Go => &["import_spec"],
        Language::Java => &["import_declaration"],
    }
}

/// Comment node kinds.
pub fn comment_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &["comment"],
        Language::TypeScript | Language::JavaScript => &["comment"],
        Language::Rust => &["line_comment", "block_comment"],
        Language::Go => &["comment"],
        Language::Java => &["line_comment", "block_comment"],
    }
}

/// Identifier kinds that can name a binding.
pub fn identifier_kinds(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &["identifier"],
        Language::TypeScript | Language::JavaScript => &[
            "identifier",
            "shorthand_property_identifier_pattern",
        ],
        Language::Rust => &["identifier"],
        Language::Go => &["identifier", "package_identifier"],
        Language::Java => &["identifier"],
    }
}
