//! FFI function for calling back into the foreign side.

use super::types::{BridgeStatus, IntCallback};
use crate::ops;
use libc::c_int;
use std::ffi::c_void;

/// Call `callback(user_data, value)` once and store its return value.
///
/// Nothing is called when `callback` or `out_result` is null.
///
/// # Safety
/// `out_result` must be valid for writes. `user_data` is passed through
/// as-is and must be whatever `callback` expects.
#[no_mangle]
pub unsafe extern "C" fn bridge_call_callback(
    value: c_int,
    callback: IntCallback,
    user_data: *mut c_void,
    out_result: *mut c_int,
) -> BridgeStatus {
    let Some(callback) = callback else {
        return BridgeStatus::NullPointer;
    };
    if out_result.is_null() {
        return BridgeStatus::NullPointer;
    }

    *out_result = ops::invoke(value, |v| callback(user_data, v));
    BridgeStatus::Ok
}
