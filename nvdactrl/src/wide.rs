//! Wide-character string marshaling.
//!
//! The controller ABI is the Windows one: text crosses it as
//! NUL-terminated UTF-16 (`const wchar_t*`). These helpers convert
//! between that shape and `Rust` strings on either side of the boundary,
//! using 16-bit units on every host so the wire contract stays fixed.

use crate::error::{ControllerError, Result};

/// Encode text as a NUL-terminated UTF-16 buffer.
///
/// Rejects interior NULs: the receiving side scans for the terminator,
/// so an embedded NUL would silently truncate the message.
pub fn to_wide(text: &str) -> Result<Vec<u16>> {
    if text.chars().any(|c| c == '\0') {
        return Err(ControllerError::NulInText);
    }
    Ok(text.encode_utf16().chain(std::iter::once(0)).collect())
}

/// Number of 16-bit units before the NUL terminator.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated UTF-16 buffer.
pub unsafe fn wide_len(ptr: *const u16) -> usize {
    if ptr.is_null() {
        return 0;
    }
    let mut len = 0;
    while *ptr.add(len) != 0 {
        len += 1;
    }
    len
}

/// Decode a NUL-terminated UTF-16 pointer into an owned string.
///
/// Unpaired surrogates are replaced rather than rejected, matching how
/// Windows itself treats `wchar_t` text. Returns `None` for null.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated UTF-16 buffer.
pub unsafe fn from_wide_ptr(ptr: *const u16) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let units = std::slice::from_raw_parts(ptr, wide_len(ptr));
    Some(String::from_utf16_lossy(units))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wide_appends_terminator() {
        let wide = to_wide("Hi").unwrap();
        assert_eq!(wide, vec![0x48, 0x69, 0x00]);
    }

    #[test]
    fn test_to_wide_rejects_interior_nul() {
        assert!(matches!(
            to_wide("a\0b"),
            Err(ControllerError::NulInText)
        ));
    }

    #[test]
    fn test_round_trip_bmp() {
        let wide = to_wide("Hello, NVDA").unwrap();
        let back = unsafe { from_wide_ptr(wide.as_ptr()) }.unwrap();
        assert_eq!(back, "Hello, NVDA");
    }

    #[test]
    fn test_round_trip_surrogate_pairs() {
        // U+1F50A (speaker with three sound waves) needs a surrogate pair.
        let wide = to_wide("loud \u{1F50A}").unwrap();
        let back = unsafe { from_wide_ptr(wide.as_ptr()) }.unwrap();
        assert_eq!(back, "loud \u{1F50A}");
    }

    #[test]
    fn test_null_pointer() {
        assert_eq!(unsafe { wide_len(std::ptr::null()) }, 0);
        assert!(unsafe { from_wide_ptr(std::ptr::null()) }.is_none());
    }

    #[test]
    fn test_empty_string() {
        let wide = to_wide("").unwrap();
        assert_eq!(wide, vec![0x00]);
        assert_eq!(unsafe { wide_len(wide.as_ptr()) }, 0);
        assert_eq!(unsafe { from_wide_ptr(wide.as_ptr()) }.unwrap(), "");
    }
}
