//! Safe Rust calls into the exported functions.
//!
//! These wrappers cross the boundary exactly as a foreign caller would:
//! Rust strings become owned `CString`s that live for the duration of the
//! call, and closures travel through `user_data` behind a trampoline.

use crate::data::{BorrowedText, CRecord, Record};
use crate::error::Result;
use crate::ffi::{self, BridgeStatus, CEchoConfig};
use crate::ops::EchoConfig;
use libc::c_int;
use std::ffi::{c_void, CString};

pub fn multiply_by_two(x: i32) -> i32 {
    ffi::bridge_multiply_by_two(x)
}

/// Print `text` with the default framing.
///
/// Fails with `InteriorNul` before anything is printed if `text` contains a
/// nul byte.
pub fn print(text: &str) -> Result<()> {
    print_with(&EchoConfig::default(), text)
}

pub fn print_with(config: &EchoConfig, text: &str) -> Result<()> {
    let prefix = CString::new(config.prefix.as_str())?;
    let text = CString::new(text)?;
    let c_config = CEchoConfig {
        prefix: prefix.as_ptr(),
        newline: config.newline,
    };
    unsafe { ffi::bridge_print_string_with(&c_config, text.as_ptr()) }.into_result()
}

/// Render the printed line without printing it.
pub fn format(text: &str) -> Result<Vec<u8>> {
    let text = CString::new(text)?;

    let mut len = 0usize;
    unsafe { ffi::bridge_format_string(text.as_ptr(), std::ptr::null_mut(), 0, &mut len) }
        .into_result()?;

    let mut buffer = vec![0u8; len + 1];
    unsafe {
        ffi::bridge_format_string(
            text.as_ptr(),
            buffer.as_mut_ptr().cast(),
            buffer.len(),
            &mut len,
        )
    }
    .into_result()?;

    Ok(BorrowedText::new(&buffer).to_owned_bytes())
}

extern "C" fn trampoline<F>(user_data: *mut c_void, value: c_int) -> c_int
where
    F: FnMut(i32) -> i32,
{
    let callback = unsafe { &mut *(user_data as *mut F) };
    callback(value)
}

/// Hand `callback` to `bridge_call_callback` and return its result.
///
/// `callback` must not panic: unwinding out of the trampoline aborts.
pub fn call_with<F>(value: i32, mut callback: F) -> Result<i32>
where
    F: FnMut(i32) -> i32,
{
    let mut result: c_int = 0;
    let status = unsafe {
        ffi::bridge_call_callback(
            value,
            Some(trampoline::<F>),
            &mut callback as *mut F as *mut c_void,
            &mut result,
        )
    };
    status.into_result()?;
    Ok(result)
}

pub fn process_record(record: &mut Record) -> Result<()> {
    let mut c_record = CRecord::from(*record);
    let status: BridgeStatus = unsafe { ffi::bridge_process_record(&mut c_record) };
    status.into_result()?;
    *record = c_record.into();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BridgeError;

    #[test]
    fn test_multiply_by_two() {
        assert_eq!(multiply_by_two(5), 10);
        assert_eq!(multiply_by_two(-3), -6);
    }

    #[test]
    fn test_format() {
        assert_eq!(format("hello").unwrap(), b"[bridge] hello\n");
        assert_eq!(format("").unwrap(), b"[bridge] \n");
    }

    #[test]
    fn test_format_utf8() {
        let line = format("你好").unwrap();
        assert_eq!(String::from_utf8(line).unwrap(), "[bridge] 你好\n");
    }

    #[test]
    fn test_print_rejects_interior_nul() {
        let err = print("bad\0text").unwrap_err();
        assert!(matches!(err, BridgeError::InteriorNul(3)));
    }

    #[test]
    fn test_print_with_rejects_nul_prefix() {
        let config = EchoConfig {
            prefix: "a\0".into(),
            newline: true,
        };
        let err = print_with(&config, "x").unwrap_err();
        assert!(matches!(err, BridgeError::InteriorNul(1)));
    }

    #[test]
    fn test_print() {
        print("hello").unwrap();
        print("").unwrap();
    }

    #[test]
    fn test_call_with_closure() {
        let mut seen = Vec::new();
        let result = call_with(6, |v| {
            seen.push(v);
            v * 7
        })
        .unwrap();
        assert_eq!(result, 42);
        assert_eq!(seen, vec![6]);
    }

    #[test]
    fn test_process_record() {
        let mut record = Record::new(1, 0.0);
        process_record(&mut record).unwrap();
        assert_eq!(record, Record::new(1, 1.0));
    }
}
