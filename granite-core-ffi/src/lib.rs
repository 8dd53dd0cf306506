//! Welcome to the `granite-core-ffi` documentation!
//!
//! This crate exposes a C-callable subset of `granite-core`, following a uniform shape:
//!
//! + One symbol per (operation, calling convention, checked/unchecked entry) triple, operating
//!   on the 64 bits precision entities.
//! + Every symbol returns an `int`: `0` on success, a nonzero value on failure. Results are
//!   written through out-pointers. Panics are caught at the boundary and reported as failures,
//!   never unwound into the caller.
//! + Objects (engines, entities, seeder builders) are handled through opaque pointers, each
//!   with a matching `destroy_*` symbol. No handle is ever freed implicitly.
//! + The `*_view_buffers` symbols operate on ciphertext views wrapping caller-provided
//!   buffers; the `*_raw_ptr_buffers` symbols skip the view wrapping and take the raw buffer
//!   plus an explicit dimension, which is the lowest-ceremony, highest-trust call shape.
//! + The `*_unchecked` symbols skip the pointer and precondition validations, and call the
//!   unchecked entry points of the engines.

pub mod default_engine;
pub mod seeder;
pub mod utils;

pub use default_engine::*;
pub use seeder::*;
pub use utils::*;
