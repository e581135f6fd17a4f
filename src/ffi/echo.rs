//! FFI functions for printing borrowed strings.

use super::types::{BridgeStatus, CEchoConfig};
use crate::data::BorrowedText;
use crate::error::{BridgeError, Result};
use crate::ops::{self, EchoConfig};
use std::ffi::c_char;
use std::io;

unsafe fn print_with(config: &EchoConfig, s: *const c_char) -> Result<()> {
    let text = BorrowedText::from_ptr(s).ok_or(BridgeError::NullPointer("s"))?;
    tracing::debug!(text = %text.to_string_lossy(), len = text.len(), "printing");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ops::echo(&mut out, text.as_bytes(), config)
}

/// Print a string to stdout, prefixed and newline-terminated.
///
/// A null pointer or a failed write is logged and otherwise ignored.
///
/// # Safety
/// `s` must be null or point to a nul-terminated string that stays valid for
/// the duration of the call. The string is only read.
#[no_mangle]
pub unsafe extern "C" fn bridge_print_string(s: *const c_char) {
    if let Err(err) = print_with(&EchoConfig::default(), s) {
        tracing::warn!(%err, "bridge_print_string failed");
    }
}

/// Print a string to stdout using an explicit configuration.
///
/// A null `config` selects the defaults.
///
/// # Safety
/// `config` must be null or valid, and its `prefix` null or nul-terminated.
/// `s` must point to a nul-terminated string valid for the call.
#[no_mangle]
pub unsafe extern "C" fn bridge_print_string_with(
    config: *const CEchoConfig,
    s: *const c_char,
) -> BridgeStatus {
    let cfg = if config.is_null() {
        EchoConfig::default()
    } else {
        match (*config).to_config() {
            Ok(cfg) => cfg,
            Err(err) => return err.status(),
        }
    };

    match print_with(&cfg, s) {
        Ok(()) => BridgeStatus::Ok,
        Err(err) => {
            tracing::warn!(%err, "bridge_print_string_with failed");
            err.status()
        }
    }
}

/// Render what `bridge_print_string` would print into a caller buffer.
///
/// At most `buffer_len - 1` bytes are copied and the buffer is always
/// nul-terminated. `out_len` receives the full rendered length, so a
/// truncated result is detected by `*out_len >= buffer_len`. With
/// `buffer_len == 0` only the length is reported and `buffer` may be null.
///
/// # Safety
/// `s` must be nul-terminated, `buffer` must have room for `buffer_len`
/// bytes, and `out_len` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn bridge_format_string(
    s: *const c_char,
    buffer: *mut c_char,
    buffer_len: usize,
    out_len: *mut usize,
) -> BridgeStatus {
    if out_len.is_null() || (buffer.is_null() && buffer_len > 0) {
        return BridgeStatus::NullPointer;
    }
    let Some(text) = BorrowedText::from_ptr(s) else {
        return BridgeStatus::NullPointer;
    };

    let line = ops::render(text.as_bytes(), &EchoConfig::default());

    if buffer_len > 0 {
        let copy_len = line.len().min(buffer_len - 1);
        std::ptr::copy_nonoverlapping(line.as_ptr(), buffer as *mut u8, copy_len);
        *buffer.add(copy_len) = 0;
    }
    *out_len = line.len();

    BridgeStatus::Ok
}
