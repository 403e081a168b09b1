use core::num::ParseIntError;

use crate::error::ErrorKind;
use crate::{Error, Kind};

/// Parse a decimal literal passed to `op` into the raw payload of the given
/// kind.
///
/// Overflow is detected exactly, so literals equal to the extremes of a kind
/// parse fine.
pub(crate) fn parse(kind: Kind, op: &'static str, s: &str) -> Result<u64, Error> {
    let digits = s.trim_start_matches(is_c_space);

    let result = match kind {
        Kind::Signed => digits.parse::<i64>().map(|n| n as u64),
        Kind::Unsigned => digits.parse::<u64>(),
    };

    result.map_err(|error| parse_error(kind, op, s, error))
}

fn parse_error(kind: Kind, op: &'static str, s: &str, error: ParseIntError) -> Error {
    Error::from(ErrorKind::Parse {
        op,
        kind,
        len: s.len(),
        error,
    })
}

/// Whitespace as understood by C's `isspace` in the "C" locale.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

#[cfg(test)]
mod tests {
    use core::num::IntErrorKind;

    use super::parse;
    use crate::error::ErrorKind;
    use crate::Kind;

    fn parse_err(kind: Kind, s: &str) -> (usize, IntErrorKind) {
        match parse(kind, "parse", s).unwrap_err().into_kind() {
            ErrorKind::Parse {
                op,
                kind: actual,
                len,
                error,
            } => {
                assert_eq!(op, "parse");
                assert_eq!(actual, kind);
                (len, error.kind().clone())
            }
            kind => panic!("unexpected error kind: {kind:?}"),
        }
    }

    #[test]
    fn test_signed() {
        assert_eq!(parse(Kind::Signed, "signed", "0").unwrap(), 0);
        assert_eq!(parse(Kind::Signed, "signed", "-1").unwrap(), u64::MAX);
        assert_eq!(parse(Kind::Signed, "signed", "+17").unwrap(), 17);
        assert_eq!(parse(Kind::Signed, "signed", " \t\n42").unwrap(), 42);
        assert_eq!(
            parse(Kind::Signed, "signed", "9223372036854775807").unwrap(),
            i64::MAX as u64
        );
        assert_eq!(
            parse(Kind::Signed, "signed", "-9223372036854775808").unwrap(),
            i64::MIN as u64
        );
    }

    #[test]
    fn test_unsigned() {
        assert_eq!(parse(Kind::Unsigned, "unsigned", "18446744073709551615").unwrap(), u64::MAX);
        assert_eq!(parse(Kind::Unsigned, "unsigned", "+0").unwrap(), 0);
        assert_eq!(parse(Kind::Unsigned, "unsigned", "\r\x0c7").unwrap(), 7);
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            parse_err(Kind::Signed, "9223372036854775808"),
            (19, IntErrorKind::PosOverflow)
        );
        assert_eq!(
            parse_err(Kind::Signed, "-9223372036854775809"),
            (20, IntErrorKind::NegOverflow)
        );
        assert_eq!(
            parse_err(Kind::Unsigned, "18446744073709551616"),
            (20, IntErrorKind::PosOverflow)
        );
    }

    #[test]
    fn test_malformed() {
        assert_eq!(parse_err(Kind::Signed, "123abc"), (6, IntErrorKind::InvalidDigit));
        assert_eq!(parse_err(Kind::Signed, ""), (0, IntErrorKind::Empty));
        assert_eq!(parse_err(Kind::Signed, "   "), (3, IntErrorKind::Empty));
        assert_eq!(parse_err(Kind::Signed, "-"), (1, IntErrorKind::InvalidDigit));
        assert_eq!(parse_err(Kind::Signed, "12 "), (3, IntErrorKind::InvalidDigit));
        assert_eq!(parse_err(Kind::Signed, "0x10"), (4, IntErrorKind::InvalidDigit));
        assert_eq!(parse_err(Kind::Unsigned, "-1"), (2, IntErrorKind::InvalidDigit));
        assert_eq!(parse_err(Kind::Unsigned, "1.5"), (3, IntErrorKind::InvalidDigit));
    }
}
