//! Synchronous callback invocation.

/// Call `callback` once with `value` and return what it returns.
pub fn invoke<F>(value: i32, callback: F) -> i32
where
    F: FnOnce(i32) -> i32,
{
    tracing::debug!(value, "invoking callback");
    let result = callback(value);
    tracing::debug!(value, result, "callback returned");
    result
}
