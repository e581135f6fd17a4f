//! Borrowed null-terminated text.

use std::borrow::Cow;
use std::ffi::{c_char, CStr};

/// Read-only view of the bytes before a nul terminator.
///
/// The view borrows the caller's memory for `'a` and never owns it. Anything
/// that must outlive the call has to be copied out with [`to_owned_bytes`].
///
/// [`to_owned_bytes`]: BorrowedText::to_owned_bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorrowedText<'a> {
    bytes: &'a [u8],
}

impl<'a> BorrowedText<'a> {
    /// View a byte slice, stopping at the first nul byte if there is one.
    pub fn new(bytes: &'a [u8]) -> Self {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        Self {
            bytes: &bytes[..end],
        }
    }

    pub fn from_cstr(s: &'a CStr) -> Self {
        Self {
            bytes: s.to_bytes(),
        }
    }

    /// View a raw C string. Returns `None` for a null pointer.
    ///
    /// # Safety
    /// A non-null `ptr` must point to a nul-terminated sequence that stays
    /// valid and unmodified for `'a`.
    pub unsafe fn from_ptr(ptr: *const c_char) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        Some(Self::from_cstr(CStr::from_ptr(ptr)))
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }

    /// Copy the bytes out so they can be kept after the call returns.
    pub fn to_owned_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_new_stops_at_terminator() {
        let text = BorrowedText::new(b"hello\0world");
        assert_eq!(text.as_bytes(), b"hello");
        assert_eq!(text.len(), 5);
    }

    #[test]
    fn test_new_without_terminator() {
        let text = BorrowedText::new(b"abc");
        assert_eq!(text.as_bytes(), b"abc");
    }

    #[test]
    fn test_from_ptr() {
        let owned = CString::new("hello").unwrap();
        let text = unsafe { BorrowedText::from_ptr(owned.as_ptr()) }.unwrap();
        assert_eq!(text.as_bytes(), b"hello");
        assert_eq!(text.to_string_lossy(), "hello");
    }

    #[test]
    fn test_from_null_ptr() {
        let text = unsafe { BorrowedText::from_ptr(std::ptr::null()) };
        assert!(text.is_none());
    }

    #[test]
    fn test_empty() {
        let owned = CString::new("").unwrap();
        let text = BorrowedText::from_cstr(&owned);
        assert!(text.is_empty());
        assert!(text.to_owned_bytes().is_empty());
    }

    #[test]
    fn test_lossy_invalid_utf8() {
        let text = BorrowedText::new(&[0x66, 0xff, 0x6f]);
        assert_eq!(text.to_string_lossy(), "f\u{fffd}o");
    }
}
