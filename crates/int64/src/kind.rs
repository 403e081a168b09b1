use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two kinds of boxed 64-bit integers.
///
/// The kind of a value is fixed when it is constructed and decides how its
/// payload is read by formatting. Operators read payloads according to the
/// kind of the operator family instead, see [Context::call][crate::Context::call].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// Two's-complement signed payload.
    #[cfg_attr(feature = "serde", serde(rename = "Signed64"))]
    Signed,
    /// Unsigned payload.
    #[cfg_attr(feature = "serde", serde(rename = "Unsigned64"))]
    Unsigned,
}

impl Kind {
    /// Size of the payload in bytes.
    pub const PAYLOAD_SIZE: usize = 8;

    /// The type tag the host uses to tell the two kinds apart.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Signed => "Signed64",
            Self::Unsigned => "Unsigned64",
        }
    }

    pub(crate) const fn describe(self) -> &'static str {
        match self {
            Self::Signed => "signed",
            Self::Unsigned => "unsigned",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
