use lej::{
    ast::{Action, Ast, NodeId, Symbol},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::{
            grammar::{Grammar, Production},
            parse_source, parse_with,
            reducer::{IgnoreEvents, Reducer},
            resolver::IdentifierResolver,
        },
    },
    util::span::Span,
};

fn load(ast: &mut Ast, source: &str) -> Vec<NodeId> {
    tokenize(source).unwrap().into_iter().map(|node| ast.push(node)).collect()
}

fn symbols(ast: &Ast, live: &[NodeId]) -> Vec<Symbol> {
    live.iter().map(|id| ast[*id].symbol).collect()
}

fn irreducible(source: &str) -> (String, Span) {
    match parse_source(source) {
        Err(ParseError::Irreducible { remaining, span, .. }) => (remaining, span),
        other => panic!("expected an irreducible sequence, got {other:?}"),
    }
}

#[test]
fn lexer_tracks_lines_through_comments() {
    let terminals = tokenize("def val a as T;\n`one\ntwo`\ndef val b as F;").unwrap();
    assert_eq!(terminals[0].line, 1);
    assert_eq!(terminals[6].line, 4);
    assert_eq!(terminals[6].symbol, Symbol::Def);
}

#[test]
fn literals_enter_as_subexpressions() {
    let terminals = tokenize("T U F").unwrap();
    let actions: Vec<Action> = terminals.iter().map(|t| t.action).collect();

    assert!(terminals.iter().all(|t| t.symbol == Symbol::ValSubexpr));
    assert_eq!(actions, vec![Action::BuildTrue, Action::BuildUnsure, Action::BuildFalse]);
}

#[test]
fn keywords_are_not_identifiers() {
    let terminals = tokenize("define val asx notT").unwrap();
    assert_eq!(symbols_of(&terminals),
               vec![Symbol::Id, Symbol::Val, Symbol::Id, Symbol::Id]);
}

fn symbols_of(terminals: &[lej::ast::Node]) -> Vec<Symbol> {
    terminals.iter().map(|t| t.symbol).collect()
}

#[test]
fn resolver_rewrites_every_matching_identifier() {
    let mut ast = Ast::new();
    let terminals = load(&mut ast, "val x x y x");
    let declared = ast.push_nonterminal(Symbol::ValVar, Action::BindIdentifier, terminals[1], None);
    let mut live = vec![declared, terminals[2], terminals[3], terminals[4]];

    let mut resolver = IdentifierResolver::new();
    let rewritten = resolver.resolve(declared, &mut ast, &mut live);

    assert_eq!(rewritten, 2);
    assert_eq!(symbols(&ast, &live),
               vec![Symbol::ValVar, Symbol::ValVar, Symbol::Id, Symbol::ValVar]);
    assert_eq!(live[2], terminals[3]);
    assert_eq!(ast[live[1]].left(), Some(terminals[2]));
    assert_eq!(ast[live[1]].action, Action::Left);
    assert_eq!(ast[live[1]].span, Span::new(6, 7));
    assert_eq!(ast[live[3]].span, Span::new(10, 11));
    assert_eq!(resolver.bound_names(), ["x"]);
}

#[test]
fn identifiers_are_bound_in_declaration_order() {
    let grammar = Grammar::lej();
    let mut resolver = IdentifierResolver::new();
    let terminals = tokenize("def val a as T; def val b as (a and a); def val c as b;").unwrap();

    parse_with(&grammar, terminals, &mut resolver).unwrap();
    assert_eq!(resolver.bound_names(), ["a", "b", "c"]);
}

#[test]
fn program_reduces_to_one_code_block() {
    let tree = parse_source("def val x as T;\ndef val y as (x or U);").unwrap();
    let root = &tree.ast[tree.root];

    assert_eq!(root.symbol, Symbol::CodeBlock);
    assert_eq!(root.action, Action::Both);

    let first = &tree.ast[root.left().unwrap()];
    assert_eq!(first.symbol, Symbol::CodeBlock);
    assert_eq!(first.line, 1);

    let second = &tree.ast[root.right().unwrap()];
    assert_eq!(second.line, 2);
}

#[test]
fn nonterminal_spans_cover_their_children() {
    let tree = parse_source("def val x as (T or U);").unwrap();
    let statement = &tree.ast[tree.ast[tree.root].left().unwrap()];

    assert_eq!(statement.symbol, Symbol::AsgnStmt);
    assert_eq!(statement.action, Action::Assign);

    let target = &tree.ast[statement.left().unwrap()];
    let value = &tree.ast[statement.right().unwrap()];
    assert_eq!(target.span, Span::new(8, 9));
    // Spans run between the operands; the parentheses and keywords of the
    // frame are not part of the node.
    assert_eq!(value.span, Span::new(14, 20));
    assert_eq!(statement.span, Span::new(8, 20));
    assert_eq!(tree.ast[tree.root].span, statement.span);
}

#[test]
fn tree_dump_lists_every_node() {
    let tree = parse_source("def val x as not F;").unwrap();
    let dump = tree.to_string();

    assert!(dump.starts_with("CODE-BLOCK <LEFT>"));
    assert!(dump.contains("  ASGN-STMT <assign>"));
    assert!(dump.contains("VAL-SUBEXPR <not>"));
    assert!(dump.contains("ID 'x' @8..9"));
}

#[test]
fn dangling_parenthesis_reports_what_is_left() {
    let (remaining, span) = irreducible("def val x as (T;");
    assert_eq!(remaining, "DEF VAL-VAR AS ( VAL-EXPR ;");
    assert_eq!(span, Span::new(0, 16));
}

#[test]
fn wider_frames_win_over_narrower_ones() {
    // `T and F` is a three-symbol frame, so it reduces before `not T` does
    // and leaves the negation without an operand it can take.
    let (remaining, _) = irreducible("def val x as (not T and F);");
    assert_eq!(remaining, "DEF VAL-VAR AS ( NOT VAL-EXPR ) ;");

    assert!(parse_source("def val x as ((not T) and F);").is_ok());
}

#[test]
fn leftmost_frame_of_a_width_wins() {
    let mut grammar = Grammar::empty();
    grammar.rule(&[Symbol::ValSubexpr],
                 Production::new(Symbol::ValExpr, Action::Left, (0, 0)));

    let mut ast = Ast::new();
    let live = load(&mut ast, "T F");
    let result = Reducer::new(&grammar).reduce(&mut ast, live, &mut IgnoreEvents);

    assert!(matches!(result, Err(ParseError::Irreducible { ref remaining, .. })
                     if remaining == "VAL-EXPR VAL-EXPR"));
    assert_eq!(ast[NodeId(2)].left(), Some(NodeId(0)));
    assert_eq!(ast[NodeId(3)].left(), Some(NodeId(1)));
}

#[test]
fn reduction_with_a_custom_grammar() {
    let mut grammar = Grammar::empty();
    grammar.rule(&[Symbol::ValSubexpr],
                 Production::new(Symbol::ValExpr, Action::Left, (0, 0)))
           .rule(&[Symbol::ValSubexpr, Symbol::Or, Symbol::ValSubexpr],
                 Production::new(Symbol::ValExpr, Action::BuildOr, (0, 2)));
    assert_eq!(grammar.len(), 2);

    let mut ast = Ast::new();
    let live = load(&mut ast, "T or F");
    let root = Reducer::new(&grammar).reduce(&mut ast, live, &mut IgnoreEvents)
                                     .unwrap();

    assert_eq!(ast[root].action, Action::BuildOr);
    assert_eq!(ast[root].span, Span::new(0, 6));
}

#[test]
fn empty_input_is_rejected() {
    let grammar = Grammar::lej();
    let mut ast = Ast::new();
    let result = Reducer::new(&grammar).reduce(&mut ast, Vec::new(), &mut IgnoreEvents);

    assert!(matches!(result, Err(ParseError::UnexpectedEndOfInput { line: 1 })));
}

#[test]
#[should_panic(expected = "must hold between 1 and 5 symbols")]
fn oversized_frames_are_rejected() {
    let mut grammar = Grammar::empty();
    grammar.rule(&[Symbol::Not; 6], Production::new(Symbol::Not, Action::Left, (0, 0)));
}

#[test]
fn tree_dump_lists_children_left_to_right() {
    let tree = parse_source("def val x as (T or F);").unwrap();
    let lines: Vec<String> = tree.to_string()
                                 .lines()
                                 .map(|l| l.trim_start().to_string())
                                 .collect();

    let t = lines.iter().position(|l| l.contains("'T'")).unwrap();
    let f = lines.iter().position(|l| l.contains("'F'")).unwrap();
    let x = lines.iter().position(|l| l.contains("'x'")).unwrap();
    assert!(x < t && t < f);
}

#[test]
fn deeply_nested_trees_render() {
    let mut ast = Ast::new();
    let mut top = load(&mut ast, "T")[0];
    for _ in 0..2_000 {
        top = ast.push_nonterminal(Symbol::ValSubexpr, Action::BuildNot, top, None);
    }

    let dump = ast.render(top);
    assert_eq!(dump.lines().count(), 2_001);
    assert!(dump.lines().last().unwrap().trim_start().starts_with("VAL-SUBEXPR <true> 'T'"));
}

#[test]
fn arena_lookup_is_checked() {
    let mut ast = Ast::new();
    let live = load(&mut ast, "def val x as T;");

    assert_eq!(ast.len(), live.len());
    assert_eq!(ast.get(live[2]).and_then(lej::ast::Node::literal), Some("x"));
    assert!(ast.get(NodeId(ast.len())).is_none());
}

#[test]
fn parse_errors_expose_their_span() {
    let err = parse_source("def val x as (T;").unwrap_err();
    assert_eq!(err.span(), Some(Span::new(0, 16)));
    assert_eq!(err.line(), 1);

    let empty = parse_source("").unwrap_err();
    assert_eq!(empty.span(), None);
}
