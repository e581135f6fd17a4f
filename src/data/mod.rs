//! Plain data crossing the boundary.

pub mod record;
pub mod text;

pub use record::{CRecord, Record};
pub use text::BorrowedText;
