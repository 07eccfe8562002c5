//! Single binary operations over integer literals.

use miru_types::{ResolveError, ResolveResult};

/// Arithmetic operator accepted between two integer literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinOp {
    /// Parse an operator symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Rem),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }

    /// Apply the operator.
    ///
    /// `Div` floors. The grammar only admits unsigned literals, so both
    /// operands are non-negative and truncating division already equals floor
    /// division; negative operands never reach this function from the
    /// resolver.
    pub fn apply(self, left: i64, right: i64) -> ResolveResult<i64> {
        let describe = || format!("{left} {} {right}", self.symbol());
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div | Self::Rem if right == 0 => {
                return Err(ResolveError::DivisionByZero(describe()))
            }
            Self::Div => left.checked_div(right),
            Self::Rem => left.checked_rem(right),
        };
        result.ok_or_else(|| ResolveError::Overflow(describe()))
    }
}
