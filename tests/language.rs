use std::fs;

use lej::{
    error::{LejError, ParseError, RuntimeError},
    interpreter::{evaluator::core::Options, value::ternary::Ternary},
    run,
    util::span::Span,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_lej_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code, &Options::default()) {
                panic!("Lej example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No Lej examples found in book/src");
}

fn extract_lej_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```lej") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn value_of(src: &str, name: &str) -> Ternary {
    match run(src, &Options::default()) {
        Ok(context) => context.store
                              .get(name)
                              .cloned()
                              .unwrap_or_else(|| panic!("'{name}' was not assigned by {src}")),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn failure(src: &str) -> LejError {
    match run(src, &Options::default()) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn constant_declarations() {
    assert_eq!(value_of("def val x as T;", "x").digits(), &[2]);
    assert_eq!(value_of("def val x as F;", "x").digits(), &[0]);
    assert_eq!(value_of("def val x as U;", "x").digits(), &[1, 2, 0]);
}

#[test]
fn negation() {
    assert_eq!(value_of("def val x as not T;", "x").digits(), &[0]);
    assert_eq!(value_of("def val x as not F;", "x").digits(), &[2]);
    assert_eq!(value_of("def val x as not U;", "x").digits(), &[1, 0, 2]);
}

#[test]
fn absorbing_and_neutral_constants() {
    assert_eq!(value_of("def val x as (T or U);", "x").digits(), &[2]);
    assert_eq!(value_of("def val x as (F and U);", "x").digits(), &[0]);
    assert_eq!(value_of("def val x as (F or U);", "x").digits(), &[1, 2, 0]);
    assert_eq!(value_of("def val x as (T and U);", "x").digits(), &[1, 2, 0]);
}

#[test]
fn top_level_connectives_need_no_parentheses() {
    assert!(value_of("def val x as T or F;", "x").is_true());
    assert!(value_of("def val x as T and F;", "x").is_false());
}

#[test]
fn each_unsure_is_a_new_atom() {
    let x = value_of("def val x as (U or U);", "x");
    assert_eq!(x.rows(), &[2, 2, 2, 0]);

    let y = value_of("def val y as (U and U);", "y");
    assert_eq!(y.rows(), &[2, 0, 0, 0]);
}

#[test]
fn excluded_middle_does_not_collapse_to_true() {
    let x = value_of("def val u as U; def val x as (u or not u);", "x");
    assert_eq!(x.digits(), &[1, 2, 2]);
    assert!(!x.is_true());
}

#[test]
fn contradiction_collapses_to_false() {
    assert!(value_of("def val u as U; def val x as (u and not u);", "x").is_false());
}

#[test]
fn variables_resolve_to_their_values() {
    assert!(value_of("def val x as T; def val y as x;", "y").is_true());
    assert!(value_of("def val x as T; def val y as not x;", "y").is_false());
    assert!(value_of("def val x as F; def val y as (x or T);", "y").is_true());
}

#[test]
fn reading_a_variable_does_not_change_it() {
    let src = "def val x as U; def val y as not x; def val z as x;";
    assert_eq!(value_of(src, "x").digits(), &[1, 2, 0]);
    assert_eq!(value_of(src, "y").digits(), &[1, 0, 2]);
    assert_eq!(value_of(src, "z").digits(), &[1, 2, 0]);
}

#[test]
fn multi_line_program_with_comments() {
    let src = "`first`\ndef val a as U;\n`second\nline`\ndef val b as (a and T);\n";
    assert_eq!(value_of(src, "b").rows(), &[2, 0]);
}

#[test]
fn example_script_works() {
    let script = fs::read_to_string("tests/example.lej").expect("missing file");
    let context = run(&script, &Options::default()).unwrap();
    let store = &context.store;

    assert!(store.get("sunny").unwrap().is_true());
    assert!(store.get("raining").unwrap().is_false());
    assert_eq!(store.get("windy").unwrap().rows(), &[2, 0]);
    assert!(store.get("dry").unwrap().is_true());
    assert!(store.get("pleasant").unwrap().is_true());
    assert_eq!(store.get("gusty").unwrap().rows(), &[2, 0]);
    assert!(store.get("unclear").unwrap().is_false());
    assert!(store.get("settled").unwrap().is_true());
    assert!(store.get("copy").unwrap().is_true());
    assert_eq!(store.len(), 9);
    assert_eq!(store.unsure_count(), 1);
}

#[test]
fn bindings_are_sorted_by_name() {
    let context = run("def val b as T; def val a as F;", &Options::default()).unwrap();
    let names: Vec<&str> = context.store.bindings().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn invalid_identifier_is_error() {
    assert!(matches!(failure("def val x_y as T;"),
                     LejError::Parse(ParseError::InvalidIdentifier { .. })));
}

#[test]
fn invalid_literal_is_error() {
    let err = failure("def val x as 42;");
    let LejError::Parse(parse_err) = err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(parse_err.span(), Some(Span::new(13, 15)));

    let ParseError::InvalidLiteral { text, span, line } = parse_err else {
        panic!("expected an invalid literal, got {parse_err:?}");
    };
    assert_eq!(text, "42");
    assert_eq!((span.start, span.end), (13, 15));
    assert_eq!(line, 1);
}

#[test]
fn dangling_parenthesis_is_error() {
    assert!(matches!(failure("def val x as (T;"),
                     LejError::Parse(ParseError::Irreducible { .. })));
}

#[test]
fn empty_program_is_error() {
    assert!(matches!(failure("`nothing here`\n"),
                     LejError::Parse(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn undeclared_identifier_is_error() {
    assert!(matches!(failure("def val y as (z or F);"), LejError::Parse(_)));
}

#[test]
fn use_before_declaration_is_error() {
    let err = failure("def val y as x; def val x as T;");
    let LejError::Runtime(RuntimeError::UnknownVariable { name, line, .. }) = err else {
        panic!("expected an unknown variable, got {err:?}");
    };
    assert_eq!(name, "x");
    assert_eq!(line, 1);
}

#[test]
fn bare_expression_is_not_a_statement() {
    assert!(matches!(failure("T"), LejError::Runtime(RuntimeError::UnexpectedAction { .. })));
}

#[test]
fn error_reports_the_line() {
    let err = failure("def val x as T;\ndef val y as x;\ndef val z as (x or #);");
    assert_eq!(err.line(), 3);
}

#[test]
fn depth_limit_is_enforced() {
    let src = "def val x as not not not not not not T;";
    let options = Options { max_depth: 4,
                            ..Options::default() };
    assert!(matches!(run(src, &options),
                     Err(LejError::Runtime(RuntimeError::DepthLimitExceeded { limit: 4, .. }))));
    assert!(run(src, &Options::default()).is_ok());
}

#[test]
fn unsure_limit_is_enforced() {
    let src = "def val a as U; def val b as U; def val c as U;";
    let options = Options { max_unsure: 2,
                            ..Options::default() };
    assert!(matches!(run(src, &options),
                     Err(LejError::Runtime(RuntimeError::UnsureLimitExceeded { limit: 2, .. }))));
}

fn flat_program(statements: usize) -> String {
    (0..statements).map(|i| format!("def val x{i} as T;\n")).collect()
}

#[test]
fn long_flat_programs_run_under_default_limits() {
    let context = run(&flat_program(400), &Options::default()).unwrap();

    assert_eq!(context.store.len(), 400);
    assert!(context.store.get("x399").unwrap().is_true());
}

#[test]
fn depth_limit_ignores_statement_count() {
    let options = Options { max_depth: 4,
                            ..Options::default() };
    let context = run(&flat_program(300), &options).unwrap();
    assert_eq!(context.store.len(), 300);
}

#[test]
fn statements_run_in_source_order() {
    let src = "def val a as U; def val b as U; def val c as U; def val d as U;";
    let context = run(src, &Options::default()).unwrap();

    for (name, rows) in [("a", 2), ("b", 4), ("c", 8), ("d", 16)] {
        assert_eq!(context.store.get(name).unwrap().rows().len(), rows, "{name}");
    }
}

#[test]
fn runtime_errors_point_at_the_reference() {
    let src = "def val y as x; def val x as T;";
    let LejError::Runtime(err) = failure(src) else {
        panic!("expected a runtime error");
    };
    assert_eq!(err.span(), Span::new(13, 14));
    assert_eq!(&src[err.span().start..err.span().end], "x");
}
