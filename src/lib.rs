//! cbridge - a C-ABI boundary library.
//!
//! This crate exports a small set of functions with the C calling convention
//! and shows how data crosses the boundary in each direction:
//!
//! - integers passed by value
//! - borrowed, nul-terminated strings that are read but never retained
//! - caller-supplied function pointers invoked synchronously
//! - caller-owned records mutated in place
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     FFI Layer (cbridge.h)           │
//! │  #[no_mangle] extern "C" exports    │
//! └─────────────────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────┐
//! │           Pure Rust core            │
//! │  ┌───────────┐  ┌───────────────┐  │
//! │  │   ops     │  │     data      │  │
//! │  │ arith/echo│  │ BorrowedText  │  │
//! │  │ callback  │  │ Record        │  │
//! │  └───────────┘  └───────────────┘  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # FFI Usage
//!
//! ```c
//! int doubled = bridge_multiply_by_two(21);
//!
//! bridge_print_string("hello");
//!
//! CEchoConfig config = { .prefix = "> ", .newline = true };
//! bridge_print_string_with(&config, "hello");
//!
//! int result;
//! bridge_call_callback(5, my_callback, my_context, &result);
//!
//! CRecord record = { .id = 1, .value = 2.0 };
//! bridge_process_record(&record);
//! ```

pub mod client;
pub mod data;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod ops;

pub use data::{BorrowedText, CRecord, Record};
pub use error::{BridgeError, Result};
pub use ops::{EchoConfig, DEFAULT_PREFIX};

// Re-export FFI items for cbindgen
pub use ffi::arith::*;
pub use ffi::callback::*;
pub use ffi::echo::*;
pub use ffi::logging::*;
pub use ffi::record::*;
pub use ffi::types::*;
