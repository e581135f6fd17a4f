//! FFI function for logging setup.

use super::types::BridgeStatus;

/// Install a stderr tracing subscriber. `RUST_LOG` overrides the filter.
///
/// Returns `AlreadyInitialized` if a subscriber is already installed.
#[no_mangle]
pub extern "C" fn bridge_init_logging(verbose: bool) -> BridgeStatus {
    match crate::logging::init(verbose) {
        Ok(()) => BridgeStatus::Ok,
        Err(err) => err.status(),
    }
}
