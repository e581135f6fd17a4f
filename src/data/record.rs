//! Caller-owned record mutated across the boundary.

use libc::{c_double, c_int};

/// A plain data record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub id: i32,
    pub value: f64,
}

impl Record {
    pub fn new(id: i32, value: f64) -> Self {
        Self { id, value }
    }

    /// Increment `value` by one. `id` is left untouched.
    pub fn process(&mut self) {
        tracing::debug!(id = self.id, value = self.value, "processing record");
        self.value += 1.0;
    }
}

/// C-compatible record layout for FFI.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CRecord {
    pub id: c_int,
    pub value: c_double,
}

impl From<Record> for CRecord {
    fn from(r: Record) -> Self {
        CRecord {
            id: r.id,
            value: r.value,
        }
    }
}

impl From<CRecord> for Record {
    fn from(r: CRecord) -> Self {
        Record {
            id: r.id,
            value: r.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_increments_value() {
        let mut record = Record::new(7, 1.5);
        record.process();
        assert_eq!(record, Record::new(7, 2.5));
    }

    #[test]
    fn test_process_twice() {
        let mut record = Record::new(-1, -0.5);
        record.process();
        record.process();
        assert_eq!(record.id, -1);
        assert_eq!(record.value, 1.5);
    }

    #[test]
    fn test_c_conversion() {
        let c: CRecord = Record::new(3, 4.25).into();
        assert_eq!(c, CRecord { id: 3, value: 4.25 });
        assert_eq!(Record::from(c), Record::new(3, 4.25));
    }
}
