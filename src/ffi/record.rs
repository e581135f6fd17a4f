//! FFI function for in-place record mutation.

use super::types::BridgeStatus;
use crate::data::{CRecord, Record};

/// Increment `data->value` by one.
///
/// # Safety
/// `data` must be null or point to a valid, exclusively borrowed record.
#[no_mangle]
pub unsafe extern "C" fn bridge_process_record(data: *mut CRecord) -> BridgeStatus {
    let Some(slot) = data.as_mut() else {
        return BridgeStatus::NullPointer;
    };

    let mut record = Record::from(*slot);
    record.process();
    *slot = record.into();

    BridgeStatus::Ok
}
