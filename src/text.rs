//! Screening of raw input before it reaches the parser.
//!
//! Snippets must be text: valid UTF-8 without NUL or other C0 control
//! characters. Tab, line feed, vertical tab, form feed and carriage return
//! are whitespace in the script grammar and are allowed.

use thiserror::Error;

/// Why an input was rejected as not being text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// A control character that never appears in source text.
    #[error("binary content at byte {offset}")]
    Binary { offset: usize },

    /// Bytes that are not valid UTF-8.
    #[error("invalid UTF-8 after byte {valid_up_to}")]
    Utf8 { valid_up_to: usize },
}

impl TextError {
    /// Byte offset of the offending input
    pub fn offset(&self) -> usize {
        match self {
            Self::Binary { offset } => *offset,
            Self::Utf8 { valid_up_to } => *valid_up_to,
        }
    }
}

impl From<std::str::Utf8Error> for TextError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::Utf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Check that `text` contains no binary control characters
pub fn check_text(text: &str) -> Result<(), TextError> {
    match text.bytes().position(is_binary_byte) {
        Some(offset) => Err(TextError::Binary { offset }),
        None => Ok(()),
    }
}

/// Decode `bytes` as UTF-8 text and screen it with [`check_text`]
pub fn decode(bytes: &[u8]) -> Result<&str, TextError> {
    let text = std::str::from_utf8(bytes)?;
    check_text(text)?;
    Ok(text)
}

fn is_binary_byte(byte: u8) -> bool {
    byte < 0x20 && !matches!(byte, b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_whitespace_is_text() {
        assert_eq!(check_text("a\tb\nc\r\n\x0B\x0C"), Ok(()));
        assert_eq!(check_text(""), Ok(()));
        assert_eq!(check_text("const café = '😀';"), Ok(()));
    }

    #[test]
    fn test_control_characters_are_binary() {
        assert_eq!(check_text("\x00\x01binary"), Err(TextError::Binary { offset: 0 }));
        assert_eq!(check_text("ok\x1b[0m"), Err(TextError::Binary { offset: 2 }));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(b"let x = 1;"), Ok("let x = 1;"));
        assert_eq!(decode(b"ab\xff"), Err(TextError::Utf8 { valid_up_to: 2 }));
        assert_eq!(decode(b"\x7fELF\x02"), Err(TextError::Binary { offset: 4 }));
    }

    #[test]
    fn test_display() {
        assert_eq!(TextError::Binary { offset: 3 }.to_string(), "binary content at byte 3");
        assert_eq!(TextError::Utf8 { valid_up_to: 0 }.offset(), 0);
    }
}
