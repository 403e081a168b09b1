use crate::{Error, Int64Value, Kind};

/// A native number of the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A machine integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
}

impl Number {
    /// Convert into a raw 64-bit payload.
    ///
    /// Floats truncate toward zero, saturate when out of range and map NaN to
    /// zero. The signed result is then reinterpreted bit for bit.
    pub fn to_bits(self) -> u64 {
        match self {
            Self::Integer(n) => n as u64,
            Self::Float(n) => n as i64 as u64,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// A host value passed as an operand to a constructor or operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// A native number.
    Number(Number),
    /// A string expected to hold a decimal literal.
    String(&'a str),
    /// A boxed integer of either kind.
    Value(Int64Value),
    /// Any other host value, identified by its type name.
    Other(&'static str),
}

impl Operand<'_> {
    /// The type name of the operand, as reported in errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(Number::Integer(..)) => "integer",
            Self::Number(Number::Float(..)) => "float",
            Self::String(..) => "string",
            Self::Value(value) => value.kind().type_name(),
            Self::Other(name) => *name,
        }
    }

    /// Coerce the operand into a value of the given kind, where `op` names
    /// the operation the operand was passed to.
    ///
    /// Boxed values of the other kind have their payload reinterpreted, never
    /// converted.
    pub fn coerce(&self, kind: Kind, op: &'static str) -> Result<Int64Value, Error> {
        match *self {
            Self::Number(number) => Ok(Int64Value::from_number(kind, number)),
            Self::String(s) => {
                let bits = crate::parse::parse(kind, op, s)?;
                Ok(Int64Value::from_bits(kind, bits))
            }
            Self::Value(value) => Ok(value.reinterpret(kind)),
            Self::Other(name) => Err(Error::bad_operand_type(op, name)),
        }
    }
}

impl From<Number> for Operand<'_> {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Self::Number(Number::Integer(value))
    }
}

impl From<f64> for Operand<'_> {
    fn from(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(s: &'a str) -> Self {
        Self::String(s)
    }
}

impl From<Int64Value> for Operand<'_> {
    fn from(value: Int64Value) -> Self {
        Self::Value(value)
    }
}
