//! Lexical rules shared by SIP header values (RFC 3261 §25.1).
//!
//! ```text
//! token         = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")
//! quoted-string = DQUOTE *(qdtext / quoted-pair) DQUOTE
//! quoted-pair   = "\" (%x00-09 / %x0B-0C / %x0E-7F)
//! ```

use crate::SipError;
use std::fmt;

/// RFC 3261 token without the `.` character
pub(crate) fn is_token_nodot(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b != b'.' && is_token_char(b))
}

pub(crate) fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_token_char)
}

fn is_token_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'!' | b'%' | b'*' | b'_' | b'+' | b'`' | b'\'' | b'~')
}

/// Splits a header value on the `;` found outside quoted strings.
pub(crate) fn split_params(s: &str) -> Result<Vec<&str>, SipError> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;

    for (index, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                segments.push(&s[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    if in_quotes {
        return Err(SipError::invalid_parameter(format!("unterminated quoted string in '{s}'")));
    }

    segments.push(&s[start..]);
    Ok(segments)
}

/// Decodes a parameter value, either a bare value or a quoted string whose
/// quoted-pairs are unescaped.
pub(crate) fn decode_value(raw: &str) -> Result<String, SipError> {
    let Some(inner) = raw.strip_prefix('"') else {
        if raw.is_empty() || raw.contains(|c: char| c == '"' || c.is_whitespace()) {
            return Err(SipError::invalid_parameter(format!("bad value '{raw}'")));
        }
        return Ok(raw.to_string());
    };

    let Some(inner) = inner.strip_suffix('"') else {
        return Err(SipError::invalid_parameter(format!("unterminated quoted string '{raw}'")));
    };

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => value.push(escaped),
                None => return Err(SipError::invalid_parameter(format!("dangling escape in '{raw}'"))),
            },
            '"' => return Err(SipError::invalid_parameter(format!("unescaped quote in '{raw}'"))),
            c => value.push(c),
        }
    }

    Ok(value)
}

/// Writes a value as a token when it is one, as a quoted string otherwise.
pub(crate) fn write_value(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    if is_token(value) {
        return f.write_str(value);
    }

    f.write_str("\"")?;
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use crate::syntax::{decode_value, split_params};

    #[test]
    fn test_split_outside_quotes() {
        assert_eq!(split_params("presence;id=1").unwrap(), vec!["presence", "id=1"]);
        assert_eq!(split_params(r#"presence;reason="a;b";x"#).unwrap(), vec!["presence", r#"reason="a;b""#, "x"]);
        assert_eq!(split_params(r#"p;r="a\";b""#).unwrap(), vec!["p", r#"r="a\";b""#]);
        assert!(split_params(r#"p;r="open"#).is_err());
    }

    #[test]
    fn test_decode_value() {
        assert_eq!(decode_value("600").unwrap(), "600");
        assert_eq!(decode_value(r#""a;b""#).unwrap(), "a;b");
        assert_eq!(decode_value(r#""say \"hi\" \\o/""#).unwrap(), r#"say "hi" \o/"#);
        assert_eq!(decode_value(r#""""#).unwrap(), "");

        assert!(decode_value("").is_err());
        assert!(decode_value(r#""open"#).is_err());
        assert!(decode_value(r#""a"b""#).is_err());
        assert!(decode_value("a b").is_err());
    }
}
