//! Pure Rust behaviour behind the exported functions.

pub mod arith;
pub mod callback;
pub mod echo;

pub use arith::double;
pub use callback::invoke;
pub use echo::{echo, render, EchoConfig, DEFAULT_PREFIX};
