use core::num::ParseIntError;

use thiserror::Error;

use crate::Kind;

/// Errors raised when constructing or operating on boxed integers.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error {
    kind: Box<ErrorKind>,
}

impl<E> From<E> for Error
where
    ErrorKind: From<E>,
{
    fn from(err: E) -> Self {
        Self {
            kind: Box::new(ErrorKind::from(err)),
        }
    }
}

impl Error {
    /// Construct an error for an operand of a type which can't be coerced
    /// into a boxed integer.
    pub fn bad_operand_type(op: &'static str, actual: &'static str) -> Self {
        Self::from(ErrorKind::BadOperandType { op, actual })
    }

    /// Construct an error for an operator invoked with the wrong number of
    /// operands.
    pub fn bad_argument_count(op: &'static str, expected: usize, actual: usize) -> Self {
        Self::from(ErrorKind::BadArgumentCount {
            op,
            expected,
            actual,
        })
    }

    /// Construct an allocation failure reported by the host.
    pub fn allocation(kind: Kind) -> Self {
        Self::from(ErrorKind::Allocation { kind })
    }

    /// Access the underlying error kind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Convert into the underlying error kind.
    pub fn into_kind(self) -> ErrorKind {
        *self.kind
    }
}

/// The kind of error encountered.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An operand was neither a number, a numeric string nor a boxed integer.
    #[error("argument error type `{actual}` to `{op}`")]
    BadOperandType {
        /// The operation being performed.
        op: &'static str,
        /// The host type name of the offending operand.
        actual: &'static str,
    },
    /// The operation is not defined for the given kind.
    #[error("operation `{op}` not supported for {} values", kind.describe())]
    UnsupportedOperation {
        /// The operation being performed.
        op: &'static str,
        /// The kind the operation was invoked for.
        kind: Kind,
    },
    /// Wrong number of operands.
    #[error("`{op}` expects {expected} argument(s) but got {actual}")]
    BadArgumentCount {
        /// The operation being performed.
        op: &'static str,
        /// The number of operands the operation takes.
        expected: usize,
        /// The number of operands that were provided.
        actual: usize,
    },
    /// A string did not hold a decimal integer of the requested kind.
    #[error("the string (length = {len}) passed to `{op}` is not a {kind} string")]
    Parse {
        /// The operation the string was passed to.
        op: &'static str,
        /// The kind that was requested.
        kind: Kind,
        /// Length of the input in bytes.
        len: usize,
        /// The underlying parse error.
        #[source]
        error: ParseIntError,
    },
    /// Division or remainder with a zero divisor.
    #[error("division by zero in `{op}` for {kind}")]
    DivideByZero {
        /// The operation being performed.
        op: &'static str,
        /// The operator family.
        kind: Kind,
    },
    /// The host failed to allocate storage for a new value.
    #[error("no memory to allocate {kind}")]
    Allocation {
        /// The kind of value that was being allocated.
        kind: Kind,
    },
}

/// Error raised when configuring [Options][crate::Options].
#[derive(Debug, Clone, Error)]
pub enum ConfigurationError {
    /// Tried to set an option which doesn't exist.
    #[error("unsupported option `{option}`")]
    UnsupportedOption {
        /// The unsupported option.
        option: String,
    },
    /// The option exists but the value is not one it accepts.
    #[error("unsupported value `{value}` for option `{option}`")]
    UnsupportedValue {
        /// The option being set.
        option: String,
        /// The rejected value.
        value: String,
    },
}
