//! Basic operators, logarithms and roots.

use crate::domain::model::ArithmeticOp;
use crate::utils::error::{CalcError, Result};

/// Names the arithmetic form accepts without a second operand. Neither is an
/// arithmetic operation, so they still end up as an invalid operation.
const UNARY_NAMES: [&str; 2] = ["Square Root", "Cube Root"];

/// Applies the operation named `operation` to the operands.
///
/// A missing second operand is reported before the operation name is checked.
pub fn calculate(operation: &str, a: f64, b: Option<f64>) -> Result<f64> {
    let b = match b {
        Some(b) => b,
        None if UNARY_NAMES.contains(&operation) => {
            return Err(CalcError::InvalidOperation {
                name: operation.to_string(),
            })
        }
        None => return Err(CalcError::MissingOperand),
    };

    let op: ArithmeticOp = operation.parse()?;
    apply(op, a, b)
}

pub fn apply(op: ArithmeticOp, a: f64, b: f64) -> Result<f64> {
    match op {
        ArithmeticOp::Addition => Ok(a + b),
        ArithmeticOp::Subtraction => Ok(a - b),
        ArithmeticOp::Multiplication => Ok(a * b),
        ArithmeticOp::Division => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
        ArithmeticOp::Exponent => power(a, b),
        ArithmeticOp::Modulus => {
            if b == 0.0 {
                Err(CalcError::ModulusByZero)
            } else {
                Ok(floored_mod(a, b))
            }
        }
    }
}

/// Remainder carrying the sign of the divisor.
fn floored_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Overflow is not an error: it comes back as infinity.
pub fn power(base: f64, exponent: f64) -> Result<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(CalcError::ZeroToNegativePower);
    }
    Ok(base.powf(exponent))
}

pub fn logarithm(number: f64, base: f64) -> Result<f64> {
    if number > 0.0 && base > 0.0 && base != 1.0 {
        Ok(number.ln() / base.ln())
    } else {
        Err(CalcError::InvalidLogValues)
    }
}

pub fn antilogarithm(log_value: f64, base: f64) -> Result<f64> {
    power(base, log_value)
}

pub fn square_root(number: f64) -> Result<f64> {
    if number >= 0.0 {
        Ok(number.sqrt())
    } else {
        Err(CalcError::NegativeSquareRoot)
    }
}

/// Raises to the power 1/3. Negative input gives NaN rather than a real cube root.
pub fn cube_root(number: f64) -> f64 {
    number.powf(1.0 / 3.0)
}
