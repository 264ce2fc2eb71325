//! Stateless arithmetic over two operands.
//!
//! Nothing persists between calls; the CLI hands two raw strings and an
//! operator in, a display line comes back out.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub const ALL: &'static [Op] = &[Op::Add, Op::Sub, Op::Mul, Op::Div];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div => {
                if b == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Invalid number input")]
    InvalidNumber,
    #[error("Division by zero")]
    DivisionByZero,
}

/// Parse both operands, then apply `op`. A zero divisor is rejected before
/// anything is computed.
pub fn compute(a: &str, b: &str, op: Op) -> Result<f64, CalcError> {
    let a: f64 = a.trim().parse().map_err(|_| CalcError::InvalidNumber)?;
    let b: f64 = b.trim().parse().map_err(|_| CalcError::InvalidNumber)?;
    op.apply(a, b)
}

/// Integral results render without a decimal point, everything else to four
/// decimal places.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// Evaluate a raw `(operand, operator, operand)` triple into a display
/// line: `Result: …` or `Error: …`.
pub fn evaluate(a: &str, op: &str, b: &str) -> String {
    let Some(op) = Op::parse(op) else {
        return "Error: Invalid operation".to_string();
    };
    match compute(a, b, op) {
        Ok(value) => format!("Result: {}", format_value(value)),
        Err(e) => format!("Error: {}", e),
    }
}
