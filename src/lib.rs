//! Falling-piece controller (workspace facade crate).
//!
//! Re-exports the `tetro_control::{core,input,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use tetro_control_core as core;
pub use tetro_control_input as input;
pub use tetro_control_types as types;
