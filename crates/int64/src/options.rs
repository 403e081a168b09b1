use crate::error::ConfigurationError;

/// How the `len` operator reports the width of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteWidth {
    /// Always the payload size, 8.
    Fixed,
    /// The width of a pointer on the current platform.
    Pointer,
}

impl ByteWidth {
    /// The width in bytes.
    pub const fn get(self) -> usize {
        match self {
            Self::Fixed => crate::Kind::PAYLOAD_SIZE,
            Self::Pointer => core::mem::size_of::<isize>(),
        }
    }
}

/// Options which tune the behavior of the operators.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// What the `len` operator reports.
    pub(crate) byte_width: ByteWidth,
}

impl Options {
    /// Parse the given option.
    ///
    /// # Examples
    ///
    /// ```
    /// use int64::{ByteWidth, Options};
    ///
    /// let mut options = Options::default();
    /// options.parse_option("byte-width=pointer")?;
    /// assert_eq!(options.byte_width(), ByteWidth::Pointer);
    /// # Ok::<_, int64::ConfigurationError>(())
    /// ```
    pub fn parse_option(&mut self, option: &str) -> Result<(), ConfigurationError> {
        let mut it = option.split('=');

        match it.next() {
            Some("byte-width") => {
                self.byte_width = match it.next() {
                    None | Some("fixed") => ByteWidth::Fixed,
                    Some("pointer") => ByteWidth::Pointer,
                    Some(value) => {
                        return Err(ConfigurationError::UnsupportedValue {
                            option: String::from("byte-width"),
                            value: value.to_owned(),
                        });
                    }
                };
            }
            _ => {
                return Err(ConfigurationError::UnsupportedOption {
                    option: option.to_owned(),
                });
            }
        }

        Ok(())
    }

    /// Set what the `len` operator reports.
    pub fn with_byte_width(mut self, byte_width: ByteWidth) -> Self {
        self.byte_width = byte_width;
        self
    }

    /// What the `len` operator reports.
    pub fn byte_width(&self) -> ByteWidth {
        self.byte_width
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            byte_width: ByteWidth::Fixed,
        }
    }
}
