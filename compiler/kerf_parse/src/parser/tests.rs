use pretty_assertions::assert_eq;

use super::*;

/// Kinds of the nodes in pre-order, one line per node, indented by depth.
fn outline(node: &SyntaxNode) -> String {
    fn walk(node: &SyntaxNode, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!("{:?}\n", node.kind()));
        for child in node.child_nodes() {
            walk(child, depth + 1, out);
        }
    }
    let mut out = String::new();
    walk(node, 0, &mut out);
    out
}

fn first_item(source: &str) -> SyntaxNode {
    let tree = parse(source);
    let item = tree
        .child_nodes()
        .next()
        .and_then(|item| item.child_nodes().next())
        .cloned()
        .unwrap_or_else(SyntaxNode::missing);
    item
}

#[test]
fn test_variable_decl_shape() {
    let decl = first_item("let a: Int? = 1");
    assert_eq!(
        outline(&decl),
        "VariableDecl\n  IdentifierPattern\n  TypeAnnotation\n    OptionalType\n      SimpleType\n  InitializerClause\n    IntegerLiteralExpr\n"
    );
}

#[test]
fn test_function_decl_shape() {
    let decl = first_item("func f(a: Int, b: String) -> () { return a }");
    assert_eq!(
        outline(&decl),
        "FunctionDecl\n  ParameterClause\n    FunctionParameter\n      SimpleType\n    FunctionParameter\n      SimpleType\n  ReturnClause\n    TupleType\n  CodeBlock\n    CodeBlockItem\n      ReturnStmt\n        IdentifierExpr\n"
    );
}

#[test]
fn test_if_else_chain_shape() {
    let stmt = first_item("if (x) { } else if y { } else { }");
    assert_eq!(
        outline(&stmt),
        "IfStmt\n  TupleExpr\n    IdentifierExpr\n  CodeBlock\n  ElseClause\n    IfStmt\n      IdentifierExpr\n      CodeBlock\n      ElseClause\n        CodeBlock\n"
    );
}

#[test]
fn test_postfix_expression_shape() {
    let expr = first_item("a.b!(c: 1, d)!");
    assert_eq!(
        outline(&expr),
        "ForceUnwrapExpr\n  FunctionCallExpr\n    ForceUnwrapExpr\n      MemberAccessExpr\n        IdentifierExpr\n    Argument\n      IntegerLiteralExpr\n    Argument\n      IdentifierExpr\n"
    );
}

#[test]
fn test_sequence_expression_shape() {
    let expr = first_item("x = -a + b");
    assert_eq!(
        outline(&expr),
        "SequenceExpr\n  IdentifierExpr\n  BinaryOperatorExpr\n  PrefixOperatorExpr\n    IdentifierExpr\n  BinaryOperatorExpr\n  IdentifierExpr\n"
    );
}

#[test]
fn test_enum_with_cases() {
    let decl = first_item("enum Color { case red, green\n case blue }");
    assert_eq!(
        outline(&decl),
        "EnumDecl\n  MemberBlock\n    CodeBlockItem\n      EnumCaseDecl\n        EnumCaseElement\n        EnumCaseElement\n    CodeBlockItem\n      EnumCaseDecl\n        EnumCaseElement\n"
    );
}

#[test]
fn test_semicolon_attaches_to_item() {
    let tree = parse("a(); b()");
    let items: Vec<String> = tree.child_nodes().map(SyntaxNode::trimmed_text).collect();
    assert_eq!(items, vec!["a();", "b()"]);
}

#[test]
fn test_return_value_must_share_the_line() {
    let tree = parse("func f() {\n  return\n  g()\n}");
    let block = tree
        .child_nodes()
        .next()
        .and_then(|item| item.child_nodes().next())
        .and_then(|decl| decl.child_node(SyntaxKind::CodeBlock))
        .map(|block| block.child_nodes().count());
    assert_eq!(block, Some(2));
}

#[test]
fn test_valid_programs_are_valid() {
    for source in [
        "import Foundation.Data\n",
        "struct Point { var x: Int\n var y: Int }\n",
        "func f(x: Int!) -> Int { if x == 1 { return 2 } else { return x! } }\n",
        "let s = \"hi\"; let t = true\n",
    ] {
        let tree = parse(source);
        assert!(tree.is_valid(), "expected valid tree for {source:?}");
        assert_eq!(tree.to_string(), source);
    }
}

#[test]
fn test_unknown_token_makes_tree_invalid() {
    let tree = parse("let a = 1\nlet b = $\n");
    assert_eq!(tree.first_invalid_offset(), Some(18));
    assert_eq!(tree.to_string(), "let a = 1\nlet b = $\n");
}

#[test]
fn test_missing_piece_makes_tree_invalid() {
    let tree = parse("let = 1");
    assert!(!tree.is_valid());
    assert_eq!(tree.first_invalid_offset(), Some(3));
}

#[test]
fn test_stray_closing_brace_is_unknown() {
    let tree = parse("}\nlet a = 1");
    assert_eq!(tree.first_invalid_offset(), Some(0));
    assert_eq!(tree.to_string(), "}\nlet a = 1");
}

#[test]
fn test_deeply_nested_parentheses() {
    let depth = 10_000;
    let source = format!("let a = {}x{}\n", "(".repeat(depth), ")".repeat(depth));
    let tree = parse(&source);
    assert!(tree.is_valid());
    assert_eq!(tree.to_string(), source);
}

#[test]
fn test_deeply_nested_types_and_prefix_operators() {
    let depth = 10_000;
    let source = format!(
        "func f() -> {}Int{} {{ return {}x }}\n",
        "(".repeat(depth),
        ")".repeat(depth),
        "- ".repeat(depth),
    );
    let tree = parse(&source);
    assert_eq!(tree.to_string(), source);
}

#[test]
fn test_long_else_if_chain() {
    let source = format!("{}{{}}\n", "if x {} else ".repeat(5_000));
    let tree = parse(&source);
    assert!(tree.is_valid());
    assert_eq!(tree.to_string(), source);
}
