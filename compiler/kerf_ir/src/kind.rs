//! The closed set of node kinds.

use std::fmt;

/// Tag of a [`crate::SyntaxNode`].
///
/// Rules declare interest in nodes by kind, and the rule catalog indexes
/// rules by it, so adding a kind means revisiting both.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SyntaxKind {
    SourceFile,
    /// One statement, declaration, or expression, plus an optional `;`.
    CodeBlockItem,
    /// `{ items }` of a function or an `if`.
    CodeBlock,
    /// `{ items }` of a type declaration.
    MemberBlock,

    // Declarations
    ImportDecl,
    VariableDecl,
    IdentifierPattern,
    TypeAnnotation,
    InitializerClause,
    FunctionDecl,
    ParameterClause,
    FunctionParameter,
    ReturnClause,
    StructDecl,
    EnumDecl,
    EnumCaseDecl,
    EnumCaseElement,

    // Statements
    ReturnStmt,
    IfStmt,
    ElseClause,

    // Expressions
    IdentifierExpr,
    IntegerLiteralExpr,
    StringLiteralExpr,
    BooleanLiteralExpr,
    /// `( ... )`; a single unlabeled element is a parenthesized expression.
    TupleExpr,
    FunctionCallExpr,
    Argument,
    MemberAccessExpr,
    ForceUnwrapExpr,
    PrefixOperatorExpr,
    /// Operands and operators in source order, before precedence folding.
    SequenceExpr,
    BinaryOperatorExpr,

    // Types
    SimpleType,
    OptionalType,
    ImplicitlyUnwrappedOptionalType,
    TupleType,

    /// Source the parser could not make sense of, or a required piece that
    /// is missing. Trees containing one are invalid.
    Unknown,
}

impl SyntaxKind {
    /// Number of kinds, for dense per-kind tables.
    pub const COUNT: usize = SyntaxKind::Unknown as usize + 1;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
