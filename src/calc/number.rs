// ABOUTME: Numeric values produced by the calculator and their arithmetic.
// ABOUTME: Integers stay exact with checked ops; floats must remain finite.

use std::fmt;

use crate::error::CalcError;

/// A calculator value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    fn finite(x: f64) -> Result<Number, CalcError> {
        if x.is_finite() {
            Ok(Number::Float(x))
        } else {
            Err(CalcError::NotFinite)
        }
    }

    pub fn try_neg(self) -> Result<Number, CalcError> {
        match self {
            Number::Int(n) => n.checked_neg().map(Number::Int).ok_or(CalcError::Overflow),
            Number::Float(x) => Ok(Number::Float(-x)),
        }
    }

    pub fn try_add(self, rhs: Number) -> Result<Number, CalcError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                a.checked_add(b).map(Number::Int).ok_or(CalcError::Overflow)
            }
            (a, b) => Self::finite(a.as_f64() + b.as_f64()),
        }
    }

    pub fn try_sub(self, rhs: Number) -> Result<Number, CalcError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                a.checked_sub(b).map(Number::Int).ok_or(CalcError::Overflow)
            }
            (a, b) => Self::finite(a.as_f64() - b.as_f64()),
        }
    }

    pub fn try_mul(self, rhs: Number) -> Result<Number, CalcError> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                a.checked_mul(b).map(Number::Int).ok_or(CalcError::Overflow)
            }
            (a, b) => Self::finite(a.as_f64() * b.as_f64()),
        }
    }

    /// True division; always yields a float.
    pub fn try_div(self, rhs: Number) -> Result<Number, CalcError> {
        let divisor = rhs.as_f64();
        if divisor == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::finite(self.as_f64() / divisor)
    }

    /// Division rounded toward negative infinity.
    pub fn floor_div(self, rhs: Number) -> Result<Number, CalcError> {
        match (self, rhs) {
            (Number::Int(_), Number::Int(0)) => Err(CalcError::DivisionByZero),
            (Number::Int(a), Number::Int(b)) => {
                let q = a.checked_div(b).ok_or(CalcError::Overflow)?;
                if a % b != 0 && ((a < 0) != (b < 0)) {
                    Ok(Number::Int(q - 1))
                } else {
                    Ok(Number::Int(q))
                }
            }
            (a, b) => {
                let divisor = b.as_f64();
                if divisor == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Self::finite((a.as_f64() / divisor).floor())
            }
        }
    }

    pub fn pow(self, rhs: Number) -> Result<Number, CalcError> {
        match (self, rhs) {
            (Number::Int(base), Number::Int(exp)) if exp >= 0 => {
                match base {
                    0 => return Ok(Number::Int(if exp == 0 { 1 } else { 0 })),
                    1 => return Ok(Number::Int(1)),
                    -1 => return Ok(Number::Int(if exp % 2 == 0 { 1 } else { -1 })),
                    _ => {}
                }
                let exp = u32::try_from(exp).map_err(|_| CalcError::Overflow)?;
                base.checked_pow(exp)
                    .map(Number::Int)
                    .ok_or(CalcError::Overflow)
            }
            (a, b) => {
                let (base, exp) = (a.as_f64(), b.as_f64());
                if base == 0.0 && exp < 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                if base < 0.0 && exp.fract() != 0.0 {
                    return Err(CalcError::NotReal);
                }
                Self::finite(base.powf(exp))
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => f.write_str(&format_float(x)),
        }
    }
}

/// Render a float the way a reader expects a calculator result: integral
/// values keep a `.0`, very large or small magnitudes switch to `1e+20` form.
fn format_float(x: f64) -> String {
    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", x);
        return match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
                format!("{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => sci,
        };
    }
    if x.fract() == 0.0 {
        format!("{:.1}", x)
    } else {
        format!("{}", x)
    }
}
