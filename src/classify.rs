//! Per-code-point classification and the Unicode-to-TIS-620 transcoding stub
//! used to decide whether a line needs Thai dictionary segmentation.

/// True for ASCII `[0-9A-Za-z_]`, false for CJK ideograph ranges (each such
/// code point becomes its own word), true for everything else that isn't
/// control/punctuation.
pub fn is_letter(c: u32) -> bool {
    if (b'0' as u32..=b'9' as u32).contains(&c)
        || c == b'_' as u32
        || (b'A' as u32..=b'Z' as u32).contains(&c)
        || (b'a' as u32..=b'z' as u32).contains(&c)
    {
        return true;
    }
    if c < 0xc0 {
        return false;
    }
    if (0x3000..=0x9fff).contains(&c) {
        return false;
    }
    if (0x20000..=0x2a000).contains(&c) {
        return false;
    }
    true
}

/// Only ASCII space and tab count as whitespace for suffix attachment.
pub fn is_space(c: u32) -> bool {
    c == b' ' as u32 || c == b'\t' as u32
}

/// Sentinel returned by [`to_tis620`] for code points with no TIS-620
/// representation, mirroring libthai's `THCHAR_ERR`.
pub const THCHAR_ERR: u8 = 0xff;

/// A minimal Unicode-to-TIS-620 transcoder covering the Thai block
/// (U+0E01-U+0E5B maps to TIS-620 0xA1-0xFB, the block's actual internal
/// layout). Everything outside that block maps to [`THCHAR_ERR`], same as a
/// full libthai transcoder would for non-Thai input; ASCII passes through
/// unchanged since TIS-620 is ASCII-compatible below 0x80.
pub fn to_tis620(c: u32) -> u8 {
    if c < 0x80 {
        return c as u8;
    }
    if (0x0e01..=0x0e5b).contains(&c) {
        return (c - 0x0e01 + 0xa1) as u8;
    }
    THCHAR_ERR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_and_digits() {
        assert!(is_letter('a' as u32));
        assert!(is_letter('Z' as u32));
        assert!(is_letter('5' as u32));
        assert!(is_letter('_' as u32));
        assert!(!is_letter(' ' as u32));
        assert!(!is_letter('.' as u32));
    }

    #[test]
    fn cjk_is_not_letter() {
        assert!(!is_letter('日' as u32));
        assert!(!is_letter('本' as u32));
    }

    #[test]
    fn non_ascii_latin_is_letter() {
        assert!(is_letter('é' as u32));
        assert!(is_letter('ñ' as u32));
    }

    #[test]
    fn space_and_tab_only() {
        assert!(is_space(' ' as u32));
        assert!(is_space('\t' as u32));
        assert!(!is_space('\n' as u32));
        assert!(!is_space('\u{00A0}' as u32));
    }

    #[test]
    fn tis620_ascii_passthrough() {
        assert_eq!(to_tis620('a' as u32), b'a');
    }

    #[test]
    fn tis620_thai_block() {
        assert_ne!(to_tis620(0x0e01), THCHAR_ERR);
        assert_eq!(to_tis620('日' as u32), THCHAR_ERR);
    }
}
