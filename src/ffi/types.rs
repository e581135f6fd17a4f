//! C-compatible type definitions for FFI.

use crate::error::{BridgeError, Result};
use crate::ops::EchoConfig;
use libc::c_int;
use std::ffi::{c_char, c_void, CStr};

/// Result status codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeStatus {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer was passed.
    NullPointer = 1,
    /// Invalid argument.
    InvalidArgument = 2,
    /// Invalid UTF-8 string.
    InvalidUtf8 = 3,
    /// Writing the output failed.
    IoError = 4,
    /// Logging was already set up.
    AlreadyInitialized = 5,
}

impl BridgeStatus {
    pub fn into_result(self) -> Result<()> {
        match self {
            BridgeStatus::Ok => Ok(()),
            status => Err(BridgeError::Status(status)),
        }
    }
}

/// Print configuration passed from C.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CEchoConfig {
    /// Nul-terminated prefix, or null for the default prefix.
    pub prefix: *const c_char,
    /// Terminate the line with a newline.
    pub newline: bool,
}

impl Default for CEchoConfig {
    fn default() -> Self {
        Self {
            prefix: std::ptr::null(),
            newline: true,
        }
    }
}

impl CEchoConfig {
    /// Copy into an owned [`EchoConfig`].
    ///
    /// # Safety
    /// A non-null `prefix` must point to a valid nul-terminated string.
    pub unsafe fn to_config(&self) -> Result<EchoConfig> {
        let mut config = EchoConfig {
            newline: self.newline,
            ..EchoConfig::default()
        };
        if !self.prefix.is_null() {
            config.prefix = CStr::from_ptr(self.prefix)
                .to_str()
                .map_err(|_| BridgeError::InvalidUtf8("prefix"))?
                .to_string();
        }
        Ok(config)
    }
}

/// Callback invoked synchronously by `bridge_call_callback`.
///
/// Nullable on the C side, hence the `Option`; cbindgen emits it as a plain
/// function pointer typedef.
///
/// # Arguments
/// * `user_data` - User-provided context pointer, passed through untouched
/// * `value` - The value given to `bridge_call_callback`
pub type IntCallback = Option<extern "C" fn(user_data: *mut c_void, value: c_int) -> c_int>;
