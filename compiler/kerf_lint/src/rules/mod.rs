//! Built-in rules.
//!
//! # Lint rules
//!
//! - **`AlwaysUseLowerCamelCase`**: variable, function, parameter and enum
//!   case names are lowerCamelCase
//! - **`TypeNamesShouldBeCapitalized`**: struct and enum names start uppercase
//! - **`NeverForceUnwrap`** (opt-in): no postfix `!` on expressions
//! - **`NeverUseImplicitlyUnwrappedOptionals`** (opt-in): no `T!` annotations
//! - **`NoLeadingUnderscores`** (opt-in): declared names do not start with `_`
//!
//! # Format rules
//!
//! - **`DoNotUseSemicolons`**: statements end at line breaks, not `;`
//! - **`NoParensAroundConditions`**: `if (x)` becomes `if x`
//! - **`ReturnVoidInsteadOfEmptyTuple`**: `-> ()` becomes `-> Void`

mod always_use_lower_camel_case;
mod do_not_use_semicolons;
mod never_force_unwrap;
mod never_use_iuo;
mod no_leading_underscores;
mod no_parens_around_conditions;
mod return_void;
mod type_names_capitalized;

pub use always_use_lower_camel_case::AlwaysUseLowerCamelCase;
pub use do_not_use_semicolons::DoNotUseSemicolons;
pub use never_force_unwrap::NeverForceUnwrap;
pub use never_use_iuo::NeverUseImplicitlyUnwrappedOptionals;
pub use no_leading_underscores::NoLeadingUnderscores;
pub use no_parens_around_conditions::NoParensAroundConditions;
pub use return_void::ReturnVoidInsteadOfEmptyTuple;
pub use type_names_capitalized::TypeNamesShouldBeCapitalized;

use kerf_ir::{Keyword, SyntaxKind, SyntaxNode, Token, TokenKind};

/// The identifier a declaration introduces, if it has one.
pub(crate) fn declared_name(node: &SyntaxNode) -> Option<&Token> {
    match node.kind() {
        SyntaxKind::VariableDecl => node
            .child_node(SyntaxKind::IdentifierPattern)?
            .child_token(TokenKind::Identifier),
        SyntaxKind::FunctionDecl
        | SyntaxKind::FunctionParameter
        | SyntaxKind::StructDecl
        | SyntaxKind::EnumDecl
        | SyntaxKind::EnumCaseElement => node.child_token(TokenKind::Identifier),
        _ => None,
    }
}

/// How findings refer to a declaration of this kind.
pub(crate) fn describe_declaration(node: &SyntaxNode) -> &'static str {
    match node.kind() {
        SyntaxKind::VariableDecl => {
            let is_let = node
                .first_token()
                .is_some_and(|token| token.is_keyword(Keyword::Let));
            if is_let {
                "constant"
            } else {
                "variable"
            }
        }
        SyntaxKind::FunctionDecl => "function",
        SyntaxKind::FunctionParameter => "function parameter",
        SyntaxKind::StructDecl => "struct",
        SyntaxKind::EnumDecl => "enum",
        SyntaxKind::EnumCaseElement => "enum case",
        _ => "declaration",
    }
}
