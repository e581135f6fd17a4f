//! FFI (Foreign Function Interface) layer for C bindings.
//!
//! Every function here uses the C calling convention and an unmangled name,
//! so any language with C FFI can bind to it directly.

pub mod arith;
pub mod callback;
pub mod echo;
pub mod logging;
pub mod record;
pub mod types;

pub use arith::*;
pub use callback::*;
pub use echo::*;
pub use logging::*;
pub use record::*;
pub use types::*;
