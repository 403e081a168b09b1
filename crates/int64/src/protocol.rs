use core::fmt;

/// An operation exposed to the host for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// The addition operation.
    Add,
    /// The subtraction operation.
    Sub,
    /// The multiply operation.
    Mul,
    /// The division operation.
    Div,
    /// The remainder operation.
    Rem,
    /// Exponentiation, computed in floating point.
    Pow,
    /// Unary negation. Only defined for signed values.
    Neg,
    /// Equality.
    Eq,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// The width of a value in bytes.
    Len,
    /// Conversion into a decimal string.
    ToString,
}

impl Protocol {
    /// Every protocol, in the order the host registers them.
    pub const ALL: [Protocol; 12] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Rem,
        Self::Neg,
        Self::Pow,
        Self::Eq,
        Self::Lt,
        Self::Le,
        Self::Len,
        Self::ToString,
    ];

    /// The name the host binds the protocol under.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Rem => "mod",
            Self::Pow => "pow",
            Self::Neg => "unm",
            Self::Eq => "eq",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Len => "len",
            Self::ToString => "tostring",
        }
    }

    /// The number of operands the protocol takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Neg | Self::Len | Self::ToString => 1,
            _ => 2,
        }
    }

    /// Look up a protocol by the name the host binds it under.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
