use core::fmt;

use crate::error::ErrorKind;
use crate::{Error, Int64Value, Kind, Operand, Options, Protocol};

/// The result of invoking a [Protocol].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// A new boxed integer, for the host to take ownership of.
    Value(Int64Value),
    /// The result of a comparison.
    Bool(bool),
    /// The result of [Protocol::ToString].
    String(String),
    /// The result of [Protocol::Len].
    Size(usize),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => fmt::Display::fmt(value, f),
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::String(s) => f.write_str(s),
            Self::Size(n) => fmt::Display::fmt(n, f),
        }
    }
}

macro_rules! arithmetic {
    ($name:ident, $ty:ty, $kind:expr) => {
        fn $name(protocol: Protocol, a: $ty, b: $ty) -> Result<$ty, Error> {
            let op = protocol.name();

            let value = match protocol {
                Protocol::Add => a.wrapping_add(b),
                Protocol::Sub => a.wrapping_sub(b),
                Protocol::Mul => a.wrapping_mul(b),
                Protocol::Div | Protocol::Rem if b == 0 => {
                    return Err(Error::from(ErrorKind::DivideByZero { op, kind: $kind }));
                }
                Protocol::Div => a.wrapping_div(b),
                Protocol::Rem => a.wrapping_rem(b),
                // NB: deliberately imprecise for results beyond 2^53.
                Protocol::Pow => (a as f64).powf(b as f64) as $ty,
                _ => {
                    return Err(Error::from(ErrorKind::UnsupportedOperation {
                        op,
                        kind: $kind,
                    }));
                }
            };

            Ok(value)
        }
    };
}

arithmetic!(signed_arithmetic, i64, Kind::Signed);
arithmetic!(unsigned_arithmetic, u64, Kind::Unsigned);

/// Constructs boxed integers and dispatches operators over them.
///
/// Every operator belongs to the family of one [Kind]. The family decides how
/// the payloads of the operands are read and the kind of the result,
/// regardless of the kinds of the operands themselves.
///
/// # Examples
///
/// ```
/// use int64::{Context, Int64Value, Kind, Output, Protocol};
///
/// let cx = Context::new();
///
/// let a = cx.construct(Kind::Signed, &["-1".into()])?;
/// let b = Int64Value::unsigned(1);
///
/// let out = cx.call(Kind::Unsigned, Protocol::Add, &[a.into(), b.into()])?;
/// assert_eq!(out, Output::Value(Int64Value::unsigned(0)));
/// # Ok::<_, int64::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    options: Options,
}

impl Context {
    /// Construct a context with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a context with the given options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// The options in use.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Construct a value of the given kind from zero or one operands.
    pub fn construct(&self, kind: Kind, args: &[Operand<'_>]) -> Result<Int64Value, Error> {
        let op = constructor_name(kind);

        match args {
            [] => Ok(Int64Value::zero(kind)),
            [arg] => arg.coerce(kind, op),
            _ => Err(Error::bad_argument_count(op, 1, args.len())),
        }
    }

    /// Invoke the given protocol of the family of `kind`.
    pub fn call(
        &self,
        kind: Kind,
        protocol: Protocol,
        args: &[Operand<'_>],
    ) -> Result<Output, Error> {
        let op = protocol.name();

        if args.len() != protocol.arity() {
            return Err(Error::bad_argument_count(op, protocol.arity(), args.len()));
        }

        tracing::trace!(%kind, %protocol, "call");

        match protocol {
            Protocol::Neg => {
                if kind == Kind::Unsigned {
                    return Err(Error::from(ErrorKind::UnsupportedOperation { op, kind }));
                }

                let a = args[0].coerce(kind, op)?;
                Ok(Output::Value(Int64Value::signed(a.as_i64().wrapping_neg())))
            }
            Protocol::Len => {
                // The width never depends on the payload, but the operand
                // must still be something we can box.
                args[0].coerce(kind, op)?;
                Ok(Output::Size(self.options.byte_width().get()))
            }
            Protocol::ToString => {
                let a = args[0].coerce(kind, op)?;
                Ok(Output::String(a.to_string()))
            }
            Protocol::Eq | Protocol::Lt | Protocol::Le => {
                let a = args[0].coerce(kind, op)?;
                let b = args[1].coerce(kind, op)?;

                let result = match protocol {
                    Protocol::Eq => a.bits() == b.bits(),
                    Protocol::Lt => a.lt(&b, kind),
                    _ => a.le(&b, kind),
                };

                Ok(Output::Bool(result))
            }
            _ => {
                let a = args[0].coerce(kind, op)?;
                let b = args[1].coerce(kind, op)?;

                let value = match kind {
                    Kind::Signed => {
                        let n = signed_arithmetic(protocol, a.as_i64(), b.as_i64())?;
                        Int64Value::signed(n)
                    }
                    Kind::Unsigned => {
                        let n = unsigned_arithmetic(protocol, a.as_u64(), b.as_u64())?;
                        Int64Value::unsigned(n)
                    }
                };

                Ok(Output::Value(value))
            }
        }
    }
}

/// The name the host binds the constructor of a kind under.
pub(crate) const fn constructor_name(kind: Kind) -> &'static str {
    match kind {
        Kind::Signed => "signed",
        Kind::Unsigned => "unsigned",
    }
}

#[cfg(test)]
static_assertions::assert_impl_all!(Context: Send, Sync);
