use core::fmt;

use crate::{Error, Kind, Number};

/// A boxed 64-bit integer.
///
/// The payload is always stored as raw bits and read according to the
/// [Kind] when formatted, so reinterpreting a value as the other kind is
/// lossless.
///
/// # Examples
///
/// ```
/// use int64::{Int64Value, Kind};
///
/// let a = Int64Value::signed(-1);
/// let b = a.reinterpret(Kind::Unsigned);
/// assert_eq!(b.to_string(), "18446744073709551615");
/// assert_eq!(b.reinterpret(Kind::Signed), a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "serde_repr::Repr", into = "serde_repr::Repr")
)]
pub struct Int64Value {
    kind: Kind,
    bits: u64,
}

impl Int64Value {
    /// Construct a value of the given kind from raw bits.
    pub const fn from_bits(kind: Kind, bits: u64) -> Self {
        Self { kind, bits }
    }

    /// Construct a signed value.
    pub const fn signed(value: i64) -> Self {
        Self::from_bits(Kind::Signed, value as u64)
    }

    /// Construct an unsigned value.
    pub const fn unsigned(value: u64) -> Self {
        Self::from_bits(Kind::Unsigned, value)
    }

    /// Construct a zero of the given kind.
    pub const fn zero(kind: Kind) -> Self {
        Self::from_bits(kind, 0)
    }

    /// Construct a value from a native host number.
    ///
    /// No range validation happens: floats are truncated toward zero (and
    /// saturate when out of range) before their bits are taken.
    ///
    /// ```
    /// use int64::{Int64Value, Kind, Number};
    ///
    /// assert_eq!(Int64Value::from_number(Kind::Signed, Number::Float(-2.9)), Int64Value::signed(-2));
    /// assert_eq!(Int64Value::from_number(Kind::Unsigned, Number::Integer(-1)), Int64Value::unsigned(u64::MAX));
    /// ```
    pub fn from_number(kind: Kind, number: Number) -> Self {
        Self::from_bits(kind, number.to_bits())
    }

    /// Parse a base-10 integer literal.
    ///
    /// Leading whitespace and a `+` sign are accepted, a `-` sign only for
    /// [Kind::Signed]. Anything which isn't an exact in-range literal is an
    /// error, reported against the constructor of the kind.
    pub fn from_str(kind: Kind, s: &str) -> Result<Self, Error> {
        let op = crate::context::constructor_name(kind);
        Ok(Self::from_bits(kind, crate::parse::parse(kind, op, s)?))
    }

    /// Reinterpret the payload of this value as the given kind.
    pub const fn reinterpret(self, kind: Kind) -> Self {
        Self::from_bits(kind, self.bits)
    }

    /// The kind of this value.
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// The raw payload.
    pub const fn bits(&self) -> u64 {
        self.bits
    }

    /// The payload read as a signed integer.
    pub const fn as_i64(&self) -> i64 {
        self.bits as i64
    }

    /// The payload read as an unsigned integer.
    pub const fn as_u64(&self) -> u64 {
        self.bits
    }

    /// Test if `self > other` when both payloads are read as `kind`.
    pub fn gt(&self, other: &Self, kind: Kind) -> bool {
        other.lt(self, kind)
    }

    /// Test if `self >= other` when both payloads are read as `kind`.
    pub fn ge(&self, other: &Self, kind: Kind) -> bool {
        other.le(self, kind)
    }

    /// Test if `self < other` when both payloads are read as `kind`.
    pub fn lt(&self, other: &Self, kind: Kind) -> bool {
        match kind {
            Kind::Signed => self.as_i64() < other.as_i64(),
            Kind::Unsigned => self.as_u64() < other.as_u64(),
        }
    }

    /// Test if `self <= other` when both payloads are read as `kind`.
    pub fn le(&self, other: &Self, kind: Kind) -> bool {
        match kind {
            Kind::Signed => self.as_i64() <= other.as_i64(),
            Kind::Unsigned => self.as_u64() <= other.as_u64(),
        }
    }
}

impl Default for Int64Value {
    fn default() -> Self {
        Self::zero(Kind::Signed)
    }
}

impl From<i64> for Int64Value {
    fn from(value: i64) -> Self {
        Self::signed(value)
    }
}

impl From<u64> for Int64Value {
    fn from(value: u64) -> Self {
        Self::unsigned(value)
    }
}

impl fmt::Display for Int64Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = itoa::Buffer::new();

        let s = match self.kind {
            Kind::Signed => buffer.format(self.as_i64()),
            Kind::Unsigned => buffer.format(self.as_u64()),
        };

        f.write_str(s)
    }
}

#[cfg(feature = "serde")]
mod serde_repr {
    use serde::{Deserialize, Serialize};

    use super::Int64Value;
    use crate::{Error, Kind};

    /// Values travel as decimal strings so that hosts whose numbers are
    /// doubles don't lose precision.
    #[derive(Serialize, Deserialize)]
    pub(super) struct Repr {
        kind: Kind,
        value: String,
    }

    impl From<Int64Value> for Repr {
        fn from(value: Int64Value) -> Self {
            Self {
                kind: value.kind(),
                value: value.to_string(),
            }
        }
    }

    impl TryFrom<Repr> for Int64Value {
        type Error = Error;

        fn try_from(repr: Repr) -> Result<Self, Self::Error> {
            Int64Value::from_str(repr.kind, &repr.value)
        }
    }
}

#[cfg(test)]
static_assertions::assert_impl_all!(Int64Value: Send, Sync, Copy);
