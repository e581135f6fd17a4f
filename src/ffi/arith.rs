//! FFI function for the integer passthrough.

use crate::ops;
use libc::c_int;

/// Return `2 * x`. Overflow wraps instead of trapping.
#[no_mangle]
pub extern "C" fn bridge_multiply_by_two(x: c_int) -> c_int {
    ops::double(x)
}
