use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

/// Binary precedence levels, lowest first.
///
/// Each level folds one operator token kind left-associatively over operands
/// parsed at the next level up. Above `Multiplicative` sits unary.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

impl BindingPower {
    /// The operator token kind folded at this level.
    pub fn operator(&self) -> TokenKind {
        match self {
            BindingPower::LogicalOr => TokenKind::LogicalOr,
            BindingPower::LogicalAnd => TokenKind::LogicalAnd,
            BindingPower::Equality => TokenKind::EqualityOperator,
            BindingPower::Relational => TokenKind::RelationalOperator,
            BindingPower::Additive => TokenKind::AdditiveOperator,
            BindingPower::Multiplicative => TokenKind::MultiplicativeOperator,
        }
    }

    /// The next tighter level, `None` when operands are unary expressions.
    pub fn next(&self) -> Option<BindingPower> {
        match self {
            BindingPower::LogicalOr => Some(BindingPower::LogicalAnd),
            BindingPower::LogicalAnd => Some(BindingPower::Equality),
            BindingPower::Equality => Some(BindingPower::Relational),
            BindingPower::Relational => Some(BindingPower::Additive),
            BindingPower::Additive => Some(BindingPower::Multiplicative),
            BindingPower::Multiplicative => None,
        }
    }

    /// `&&` and `||` build `LogicalExpression`s, the rest `BinaryExpression`s.
    pub fn is_logical(&self) -> bool {
        matches!(self, BindingPower::LogicalOr | BindingPower::LogicalAnd)
    }
}

lazy_static! {
    pub static ref BP_LOOKUP: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::LogicalOr, BindingPower::LogicalOr);
        map.insert(TokenKind::LogicalAnd, BindingPower::LogicalAnd);
        map.insert(TokenKind::EqualityOperator, BindingPower::Equality);
        map.insert(TokenKind::RelationalOperator, BindingPower::Relational);
        map.insert(TokenKind::AdditiveOperator, BindingPower::Additive);
        map.insert(TokenKind::MultiplicativeOperator, BindingPower::Multiplicative);
        map
    };
}

/// Binding power of a binary operator token kind.
pub fn binding_power_of(kind: TokenKind) -> Option<BindingPower> {
    BP_LOOKUP.get(&kind).copied()
}

/// Assignment operators, all at the lowest (right-associative) level.
pub const ASSIGNMENT_OPERATORS: [TokenKind; 2] = [TokenKind::SimpleAssign, TokenKind::ComplexAssign];

/// Prefix operators of a unary expression.
pub const UNARY_OPERATORS: [TokenKind; 2] = [TokenKind::AdditiveOperator, TokenKind::LogicalNot];
